//! フォーム送信時の入力検証

use crate::page::{Cancelable, ValidatingForm};

/// 送信イベントの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Proceed,
    Blocked,
}

/// 必須項目が埋まっていない送信を止める
#[derive(Debug, Clone)]
pub struct ValidationGuard<F> {
    form: F,
    validated_class: String,
}

impl<F: ValidatingForm> ValidationGuard<F> {
    pub fn new(form: F, validated_class: impl Into<String>) -> Self {
        Self {
            form,
            validated_class: validated_class.into(),
        }
    }

    /// 検証に失敗したらイベントを取り消す。検証済みクラスは毎回付与する
    pub fn on_submit<E: Cancelable>(&self, event: &E) -> SubmitOutcome {
        let outcome = if self.form.check_validity() {
            SubmitOutcome::Proceed
        } else {
            event.cancel();
            SubmitOutcome::Blocked
        };
        self.form.add_class(&self.validated_class);
        tracing::debug!(?outcome, "application form submit");
        outcome
    }
}
