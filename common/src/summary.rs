//! 表示中の行の集計

use crate::status::StatusCategory;
use serde::Serialize;

/// サマリ表示欄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryField {
    Total,
    Category(StatusCategory),
}

impl SummaryField {
    pub const ALL: [SummaryField; 5] = [
        SummaryField::Total,
        SummaryField::Category(StatusCategory::Applied),
        SummaryField::Category(StatusCategory::Interview),
        SummaryField::Category(StatusCategory::Rejected),
        SummaryField::Category(StatusCategory::Offer),
    ];

    pub fn label(self) -> &'static str {
        match self {
            SummaryField::Total => "Total",
            SummaryField::Category(c) => c.label(),
        }
    }

    /// `"<Label>: <count>"` 形式の表示文字列
    pub fn format(self, count: usize) -> String {
        format!("{}: {}", self.label(), count)
    }
}

/// 表示中の行数（合計と区分別）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub applied: usize,
    pub interview: usize,
    pub rejected: usize,
    pub offer: usize,
}

impl Summary {
    /// 正規化済みステータスのリストから集計
    pub fn tally<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = Self::default();
        for status in statuses {
            summary.record(status.as_ref());
        }
        summary
    }

    /// 1行分を加算。区分外は合計のみ
    pub fn record(&mut self, status: &str) {
        self.total += 1;
        match StatusCategory::parse(status) {
            Some(StatusCategory::Applied) => self.applied += 1,
            Some(StatusCategory::Interview) => self.interview += 1,
            Some(StatusCategory::Rejected) => self.rejected += 1,
            Some(StatusCategory::Offer) => self.offer += 1,
            None => {}
        }
    }

    pub fn count(&self, field: SummaryField) -> usize {
        match field {
            SummaryField::Total => self.total,
            SummaryField::Category(StatusCategory::Applied) => self.applied,
            SummaryField::Category(StatusCategory::Interview) => self.interview,
            SummaryField::Category(StatusCategory::Rejected) => self.rejected,
            SummaryField::Category(StatusCategory::Offer) => self.offer,
        }
    }

    /// 4区分のいずれにも当たらない行数
    pub fn uncategorized(&self) -> usize {
        self.total - (self.applied + self.interview + self.rejected + self.offer)
    }

    /// 各表示欄とその文字列
    pub fn lines(&self) -> [(SummaryField, String); 5] {
        SummaryField::ALL.map(|field| (field, field.format(self.count(field))))
    }
}
