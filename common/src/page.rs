//! ページ要素の抽象
//!
//! ブラウザ（web-sys）とインメモリ実装の両方がこれらのトレイトを実装する。
//! DOMハンドルと同様に、更新系も `&self` で受ける。

use crate::summary::SummaryField;

/// テーブルの1行
pub trait StatusRow {
    /// `data-status` の生の値
    fn status(&self) -> Option<String>;
    fn is_visible(&self) -> bool;
    fn set_visible(&self, visible: bool);
}

/// フィルタ対象の行を列挙する（tbody の行）
pub trait RowSource {
    type Row: StatusRow;

    fn rows(&self) -> Vec<Self::Row>;
}

/// ステータス選択コントロール
pub trait SelectControl {
    fn selected(&self) -> Option<String>;
}

/// サマリの表示先
pub trait SummaryBoard {
    fn write(&self, field: SummaryField, text: &str);
}

/// 制約検証を持つフォーム
pub trait ValidatingForm {
    fn check_validity(&self) -> bool;
    fn add_class(&self, class: &str);
}

/// 既定動作と伝播を止められるイベント
pub trait Cancelable {
    fn cancel(&self);
}

/// 確認ダイアログ
pub trait ConfirmDialog {
    fn set_content(&self, company: &str);
    fn open(&self);
}

/// 送信先を書き換えられるフォーム
pub trait ActionForm {
    fn set_action(&self, action: &str);
}

/// 行アクションの起点になる要素
pub trait ActionTrigger: Sized {
    /// 自身を含む祖先のうち、`marker` クラスを持つ最も近い要素
    fn closest(&self, marker: &str) -> Option<Self>;
    /// `data-<key>` の値
    fn data(&self, key: &str) -> Option<String>;
}

impl<B: SummaryBoard> SummaryBoard for Option<B> {
    fn write(&self, field: SummaryField, text: &str) {
        if let Some(board) = self {
            board.write(field, text);
        }
    }
}

impl<D: ConfirmDialog> ConfirmDialog for Option<D> {
    fn set_content(&self, company: &str) {
        if let Some(dialog) = self {
            dialog.set_content(company);
        }
    }

    fn open(&self) {
        if let Some(dialog) = self {
            dialog.open();
        }
    }
}

impl<F: ActionForm> ActionForm for Option<F> {
    fn set_action(&self, action: &str) {
        if let Some(form) = self {
            form.set_action(action);
        }
    }
}
