//! ステータス区分とフィルタ値
//!
//! 行の `data-status` とセレクタの値はどちらも大文字小文字を区別せずに比較する。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 集計対象のステータス区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Applied,
    Interview,
    Rejected,
    Offer,
}

impl StatusCategory {
    pub const ALL: [StatusCategory; 4] = [
        StatusCategory::Applied,
        StatusCategory::Interview,
        StatusCategory::Rejected,
        StatusCategory::Offer,
    ];

    /// 正規化済み（小文字）のキー
    pub fn key(self) -> &'static str {
        match self {
            StatusCategory::Applied => "applied",
            StatusCategory::Interview => "interview",
            StatusCategory::Rejected => "rejected",
            StatusCategory::Offer => "offer",
        }
    }

    /// 表示用ラベル
    pub fn label(self) -> &'static str {
        match self {
            StatusCategory::Applied => "Applied",
            StatusCategory::Interview => "Interview",
            StatusCategory::Rejected => "Rejected",
            StatusCategory::Offer => "Offer",
        }
    }

    /// 大文字小文字を無視して区分を判定。区分外は `None`
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.to_lowercase();
        Self::ALL.into_iter().find(|c| c.key() == normalized)
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

/// 行のステータス属性を比較用に正規化（未設定は空文字）
pub fn normalize_status(raw: Option<&str>) -> String {
    raw.map(str::to_lowercase).unwrap_or_default()
}

/// セレクタの値を正規化したもの
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(String),
}

impl StatusFilter {
    /// セレクタの値から生成。空・未設定・"all" はすべて `All`
    ///
    /// 空白のみの値は空とみなすが、それ以外の値は前後の空白も含めて比較する。
    pub fn from_selector(value: Option<&str>) -> Self {
        match value {
            None => StatusFilter::All,
            Some(v) if v.trim().is_empty() => StatusFilter::All,
            Some(v) => {
                let v = v.to_lowercase();
                if v == "all" {
                    StatusFilter::All
                } else {
                    StatusFilter::Only(v)
                }
            }
        }
    }

    /// `status` は `normalize_status` 済みであること
    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    /// セレクタに並べる選択肢（"All" + 4区分）
    pub fn options() -> Vec<&'static str> {
        std::iter::once("All")
            .chain(StatusCategory::ALL.iter().map(|c| c.label()))
            .collect()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(v) => f.write_str(v),
        }
    }
}
