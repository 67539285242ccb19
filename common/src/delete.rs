//! 削除確認ダイアログ
//!
//! 削除ボタンの `data-id` / `data-company` を読み取り、ダイアログの表示と
//! 削除フォームの送信先を書き換えてからダイアログを開く。

use crate::page::{ActionForm, ActionTrigger, ConfirmDialog};

/// 削除ボタンから読み取った内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: String,
    pub company: Option<String>,
}

impl DeleteRequest {
    /// `data-id` が無ければ空文字として扱う
    pub fn from_trigger<T: ActionTrigger>(trigger: &T, id_key: &str, company_key: &str) -> Self {
        Self {
            id: trigger.data(id_key).unwrap_or_default(),
            company: trigger.data(company_key),
        }
    }

    /// 会社名が空なら `fallback`
    pub fn company_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.company.as_deref() {
            Some(company) if !company.is_empty() => company,
            _ => fallback,
        }
    }
}

/// `{id}` をそのまま埋め込む（エスケープしない）
pub fn deletion_path(template: &str, id: &str) -> String {
    template.replace("{id}", id)
}

fn is_path_unsafe(id: &str) -> bool {
    id.is_empty() || id.chars().any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace())
}

#[derive(Debug, Clone)]
pub struct DeleteConfirmer<D, F> {
    dialog: D,
    form: F,
    path_template: String,
    company_fallback: String,
}

impl<D: ConfirmDialog, F: ActionForm> DeleteConfirmer<D, F> {
    pub fn new(
        dialog: D,
        form: F,
        path_template: impl Into<String>,
        company_fallback: impl Into<String>,
    ) -> Self {
        Self {
            dialog,
            form,
            path_template: path_template.into(),
            company_fallback: company_fallback.into(),
        }
    }

    /// ダイアログを準備して開く。書き換えた送信先を返す
    pub fn confirm(&self, request: &DeleteRequest) -> String {
        if is_path_unsafe(&request.id) {
            tracing::warn!(id = %request.id, "delete id is interpolated without escaping");
        }
        let action = deletion_path(&self.path_template, &request.id);

        self.dialog.set_content(request.company_or(&self.company_fallback));
        self.form.set_action(&action);
        self.dialog.open();
        tracing::debug!(%action, "delete confirmation opened");
        action
    }
}
