//! ページ設定
//!
//! 要素ID・マーカークラス・削除パスなど、サーバーが描画するマークアップとの取り決め。
//! すべての項目に既定値があり、JSONで一部だけ上書きできる。

use crate::error::{Error, Result};
use crate::status::StatusCategory;
use crate::summary::SummaryField;
use serde::{Deserialize, Serialize};

/// サマリ表示欄の要素ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryTargets {
    pub total: String,
    pub applied: String,
    pub interview: String,
    pub rejected: String,
    pub offer: String,
}

impl Default for SummaryTargets {
    fn default() -> Self {
        Self {
            total: "summary-total".into(),
            applied: "summary-applied".into(),
            interview: "summary-interview".into(),
            rejected: "summary-rejected".into(),
            offer: "summary-offer".into(),
        }
    }
}

impl SummaryTargets {
    pub fn id_for(&self, field: SummaryField) -> &str {
        match field {
            SummaryField::Total => &self.total,
            SummaryField::Category(StatusCategory::Applied) => &self.applied,
            SummaryField::Category(StatusCategory::Interview) => &self.interview,
            SummaryField::Category(StatusCategory::Rejected) => &self.rejected,
            SummaryField::Category(StatusCategory::Offer) => &self.offer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    pub form_id: String,
    pub validated_class: String,

    pub filter_id: String,
    pub table_id: String,
    /// テーブル内でフィルタ対象になる行
    pub row_selector: String,
    pub status_attribute: String,
    pub summary: SummaryTargets,

    pub delete_modal_id: String,
    pub company_label_id: String,
    pub delete_form_id: String,
    pub delete_trigger_class: String,
    /// `data-` を除いたキー
    pub id_key: String,
    pub company_key: String,
    /// `{id}` を含むこと
    pub delete_path: String,
    pub company_fallback: String,

    /// ブラウザのコンソールへトレースを出す
    pub debug_logging: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form_id: "applicationForm".into(),
            validated_class: "was-validated".into(),
            filter_id: "statusFilter".into(),
            table_id: "applicationsTable".into(),
            row_selector: "tbody tr".into(),
            status_attribute: "data-status".into(),
            summary: SummaryTargets::default(),
            delete_modal_id: "deleteModal".into(),
            company_label_id: "delCompany".into(),
            delete_form_id: "deleteForm".into(),
            delete_trigger_class: "btn-delete".into(),
            id_key: "id".into(),
            company_key: "company".into(),
            delete_path: "/delete/{id}".into(),
            company_fallback: "this company".into(),
            debug_logging: false,
        }
    }
}

impl PageConfig {
    /// JSON文字列から読み込み、検証する
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("formId", &self.form_id),
            ("validatedClass", &self.validated_class),
            ("filterId", &self.filter_id),
            ("tableId", &self.table_id),
            ("rowSelector", &self.row_selector),
            ("statusAttribute", &self.status_attribute),
            ("deleteModalId", &self.delete_modal_id),
            ("companyLabelId", &self.company_label_id),
            ("deleteFormId", &self.delete_form_id),
            ("deleteTriggerClass", &self.delete_trigger_class),
            ("idKey", &self.id_key),
            ("companyKey", &self.company_key),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(Error::Config(format!("{name} must not be empty")));
        }
        if SummaryField::ALL
            .iter()
            .any(|field| self.summary.id_for(*field).trim().is_empty())
        {
            return Err(Error::Config("summary ids must not be empty".into()));
        }
        if self.delete_trigger_class.contains(char::is_whitespace) {
            return Err(Error::Config("deleteTriggerClass must be a single class".into()));
        }
        if !self.delete_path.contains("{id}") {
            return Err(Error::Config(format!(
                "deletePath must contain {{id}}: {}",
                self.delete_path
            )));
        }
        Ok(())
    }
}
