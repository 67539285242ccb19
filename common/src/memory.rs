//! インメモリのページ実装
//!
//! ブラウザ外（テストや非WASMホスト）で各機能を動かすための合成DOM。
//! 各ハンドルは `Rc` で状態を共有するので、clone して後から中身を確認できる。

use crate::page::{
    ActionForm, ActionTrigger, Cancelable, ConfirmDialog, RowSource, SelectControl, StatusRow,
    SummaryBoard, ValidatingForm,
};
use crate::summary::SummaryField;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
struct RowState {
    status: Option<String>,
    visible: bool,
}

/// テーブルの行
#[derive(Debug, Clone)]
pub struct MemoryRow(Rc<RefCell<RowState>>);

impl MemoryRow {
    pub fn new(status: Option<&str>) -> Self {
        Self(Rc::new(RefCell::new(RowState {
            status: status.map(str::to_string),
            visible: true,
        })))
    }
}

impl StatusRow for MemoryRow {
    fn status(&self) -> Option<String> {
        self.0.borrow().status.clone()
    }

    fn is_visible(&self) -> bool {
        self.0.borrow().visible
    }

    fn set_visible(&self, visible: bool) {
        self.0.borrow_mut().visible = visible;
    }
}

/// 行の集合（tbody）
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    rows: Rc<RefCell<Vec<MemoryRow>>>,
}

impl MemoryTable {
    pub fn with_statuses<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let table = Self::default();
        for status in statuses {
            table.push(MemoryRow::new(status.as_ref().map(|s| s.as_ref())));
        }
        table
    }

    pub fn push(&self, row: MemoryRow) {
        self.rows.borrow_mut().push(row);
    }

    pub fn visibility(&self) -> Vec<bool> {
        self.rows.borrow().iter().map(StatusRow::is_visible).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visibility().into_iter().filter(|v| *v).count()
    }
}

impl RowSource for MemoryTable {
    type Row = MemoryRow;

    fn rows(&self) -> Vec<MemoryRow> {
        self.rows.borrow().clone()
    }
}

/// ステータス選択
#[derive(Debug, Clone, Default)]
pub struct MemorySelect(Rc<RefCell<Option<String>>>);

impl MemorySelect {
    pub fn new(value: Option<&str>) -> Self {
        let select = Self::default();
        select.set(value);
        select
    }

    pub fn set(&self, value: Option<&str>) {
        *self.0.borrow_mut() = value.map(str::to_string);
    }
}

impl SelectControl for MemorySelect {
    fn selected(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

/// サマリ表示欄
#[derive(Debug, Clone, Default)]
pub struct MemoryBoard(Rc<RefCell<HashMap<SummaryField, String>>>);

impl MemoryBoard {
    pub fn text(&self, field: SummaryField) -> Option<String> {
        self.0.borrow().get(&field).cloned()
    }
}

impl SummaryBoard for MemoryBoard {
    fn write(&self, field: SummaryField, text: &str) {
        self.0.borrow_mut().insert(field, text.to_string());
    }
}

#[derive(Debug, Default)]
struct FormState {
    valid: Cell<bool>,
    classes: RefCell<Vec<String>>,
}

/// 制約検証付きフォーム
#[derive(Debug, Clone, Default)]
pub struct MemoryForm(Rc<FormState>);

impl MemoryForm {
    pub fn new(valid: bool) -> Self {
        let form = Self::default();
        form.set_valid(valid);
        form
    }

    /// 必須項目の入力状態を切り替える
    pub fn set_valid(&self, valid: bool) {
        self.0.valid.set(valid);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.classes.borrow().clone()
    }
}

impl ValidatingForm for MemoryForm {
    fn check_validity(&self) -> bool {
        self.0.valid.get()
    }

    fn add_class(&self, class: &str) {
        // classList.add と同じく重複させない
        if !self.has_class(class) {
            self.0.classes.borrow_mut().push(class.to_string());
        }
    }
}

/// 送信イベント
#[derive(Debug, Clone, Default)]
pub struct MemoryEvent(Rc<Cell<bool>>);

impl MemoryEvent {
    pub fn is_canceled(&self) -> bool {
        self.0.get()
    }
}

impl Cancelable for MemoryEvent {
    fn cancel(&self) {
        self.0.set(true);
    }
}

/// 確認ダイアログ
#[derive(Debug, Clone, Default)]
pub struct MemoryDialog {
    content: Rc<RefCell<Option<String>>>,
    opened: Rc<Cell<usize>>,
}

impl MemoryDialog {
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    pub fn open_count(&self) -> usize {
        self.opened.get()
    }
}

impl ConfirmDialog for MemoryDialog {
    fn set_content(&self, company: &str) {
        *self.content.borrow_mut() = Some(company.to_string());
    }

    fn open(&self) {
        self.opened.set(self.opened.get() + 1);
    }
}

/// 削除フォーム
#[derive(Debug, Clone, Default)]
pub struct MemoryActionForm(Rc<RefCell<Option<String>>>);

impl MemoryActionForm {
    pub fn action(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

impl ActionForm for MemoryActionForm {
    fn set_action(&self, action: &str) {
        *self.0.borrow_mut() = Some(action.to_string());
    }
}

/// クリック対象になる要素（親をたどれる）
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    classes: Vec<String>,
    data: HashMap<String, String>,
    parent: Option<Box<MemoryElement>>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn child_of(mut self, parent: MemoryElement) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}

impl ActionTrigger for MemoryElement {
    fn closest(&self, marker: &str) -> Option<Self> {
        if self.classes.iter().any(|c| c == marker) {
            return Some(self.clone());
        }
        self.parent.as_ref().and_then(|p| p.closest(marker))
    }

    fn data(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }
}
