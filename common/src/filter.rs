//! ステータスによる行フィルタとサマリ更新
//!
//! どちらの操作も毎回DOMの現在状態から計算し直すので、何度呼んでも結果はずれない。

use crate::page::{RowSource, SelectControl, StatusRow, SummaryBoard};
use crate::status::{normalize_status, StatusFilter};
use crate::summary::Summary;

/// セレクタ・テーブル・サマリ欄をまとめたビュー
#[derive(Debug, Clone)]
pub struct StatusFilterView<S, T, B> {
    select: S,
    table: T,
    board: B,
}

impl<S, T, B> StatusFilterView<S, T, B>
where
    S: SelectControl,
    T: RowSource,
    B: SummaryBoard,
{
    pub fn new(select: S, table: T, board: B) -> Self {
        Self { select, table, board }
    }

    /// セレクタとテーブルが両方そろっている場合のみ生成する
    pub fn attach(select: Option<S>, table: Option<T>, board: B) -> Option<Self> {
        match (select, table) {
            (Some(select), Some(table)) => Some(Self::new(select, table, board)),
            _ => None,
        }
    }

    /// 現在のセレクタ値
    pub fn current_filter(&self) -> StatusFilter {
        StatusFilter::from_selector(self.select.selected().as_deref())
    }

    /// 各行の表示を切り替えてからサマリを更新する
    pub fn apply_filter(&self) -> Summary {
        let filter = self.current_filter();
        for row in self.table.rows() {
            let status = normalize_status(row.status().as_deref());
            row.set_visible(filter.matches(&status));
        }
        let summary = self.update_summary();
        tracing::debug!(filter = %filter, total = summary.total, "status filter applied");
        summary
    }

    /// 表示中の行を集計してサマリ欄に書き込む
    pub fn update_summary(&self) -> Summary {
        let summary = self.tally();
        for (field, text) in summary.lines() {
            self.board.write(field, &text);
        }
        summary
    }

    /// 表示中の行を集計する（書き込みなし）
    pub fn tally(&self) -> Summary {
        Summary::tally(
            self.table
                .rows()
                .into_iter()
                .filter(StatusRow::is_visible)
                .map(|row| normalize_status(row.status().as_deref())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryBoard, MemorySelect, MemoryTable};
    use crate::summary::SummaryField;
    use crate::StatusCategory;

    fn view(
        select: Option<&str>,
        statuses: &[Option<&str>],
    ) -> (StatusFilterView<MemorySelect, MemoryTable, MemoryBoard>, MemorySelect, MemoryTable, MemoryBoard) {
        let select = MemorySelect::new(select);
        let table = MemoryTable::with_statuses(statuses.iter().copied());
        let board = MemoryBoard::default();
        let view = StatusFilterView::new(select.clone(), table.clone(), board.clone());
        (view, select, table, board)
    }

    const SAMPLE: [Option<&str>; 4] = [Some("Applied"), Some("Interview"), Some("Applied"), Some("Rejected")];

    #[test]
    fn test_all_shows_everything() {
        let (view, _, table, board) = view(Some("All"), &SAMPLE);
        let summary = view.apply_filter();

        assert_eq!(table.visibility(), vec![true; 4]);
        assert_eq!(summary, Summary { total: 4, applied: 2, interview: 1, rejected: 1, offer: 0 });
        assert_eq!(board.text(SummaryField::Total).as_deref(), Some("Total: 4"));
        assert_eq!(board.text(SummaryField::Category(StatusCategory::Applied)).as_deref(), Some("Applied: 2"));
        assert_eq!(board.text(SummaryField::Category(StatusCategory::Offer)).as_deref(), Some("Offer: 0"));
    }

    #[test]
    fn test_applied_only() {
        let (view, _, table, board) = view(Some("applied"), &SAMPLE);
        let summary = view.apply_filter();

        assert_eq!(table.visibility(), vec![true, false, true, false]);
        assert_eq!(summary, Summary { total: 2, applied: 2, ..Default::default() });
        assert_eq!(board.text(SummaryField::Category(StatusCategory::Interview)).as_deref(), Some("Interview: 0"));
    }

    #[test]
    fn test_change_then_back_to_all() {
        let (view, select, table, _) = view(Some("Rejected"), &SAMPLE);
        assert_eq!(view.apply_filter().total, 1);

        select.set(Some("all"));
        assert_eq!(view.apply_filter().total, 4);
        assert_eq!(table.visible_count(), 4);
    }

    #[test]
    fn test_unset_selector_is_all() {
        let (view, _, table, _) = view(None, &SAMPLE);
        view.apply_filter();
        assert_eq!(table.visible_count(), 4);
    }

    #[test]
    fn test_padded_selector_hides_everything() {
        let (view, _, table, _) = view(Some(" Applied "), &[Some("applied"), Some("interview")]);
        let summary = view.apply_filter();
        assert_eq!(table.visibility(), vec![false, false]);
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn test_empty_table() {
        let (view, _, _, board) = view(Some("offer"), &[]);
        assert_eq!(view.apply_filter(), Summary::default());
        assert_eq!(board.text(SummaryField::Total).as_deref(), Some("Total: 0"));
    }

    #[test]
    fn test_missing_status_row() {
        let (view, select, table, _) = view(Some("all"), &[None, Some("Offer")]);
        let summary = view.apply_filter();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.uncategorized(), 1);

        select.set(Some("offer"));
        view.apply_filter();
        assert_eq!(table.visibility(), vec![false, true]);
    }

    #[test]
    fn test_update_summary_counts_only_visible() {
        let (view, _, table, _) = view(Some("all"), &SAMPLE);
        view.apply_filter();
        table.rows()[0].set_visible(false);

        let summary = view.update_summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.applied, 1);
    }

    #[test]
    fn test_attach_requires_select_and_table() {
        let board = MemoryBoard::default();
        let missing_table: Option<MemoryTable> = None;
        assert!(StatusFilterView::attach(Some(MemorySelect::default()), missing_table, board.clone()).is_none());

        let missing_select: Option<MemorySelect> = None;
        assert!(StatusFilterView::attach(missing_select, Some(MemoryTable::default()), board.clone()).is_none());

        assert!(StatusFilterView::attach(Some(MemorySelect::default()), Some(MemoryTable::default()), board).is_some());
    }
}
