//! web-sys による要素アダプタ
//!
//! `jobtrack_common::page` のトレイトを実際のDOM要素に対して実装する。

use jobtrack_common::{
    ActionForm, ActionTrigger, Cancelable, RowSource, SelectControl, StatusRow, SummaryBoard,
    SummaryField, SummaryTargets, ValidatingForm,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlSelectElement};

/// IDで要素を取得し、目的の型に変換できなければ `None`
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub struct DomSelect(pub HtmlSelectElement);

impl SelectControl for DomSelect {
    fn selected(&self) -> Option<String> {
        Some(self.0.value())
    }
}

pub struct DomRow {
    element: HtmlElement,
    status_attribute: Rc<str>,
}

impl StatusRow for DomRow {
    fn status(&self) -> Option<String> {
        self.element.get_attribute(&self.status_attribute)
    }

    /// インラインの `display: none` だけを非表示とみなす
    fn is_visible(&self) -> bool {
        self.element
            .style()
            .get_property_value("display")
            .map(|display| display.trim() != "none")
            .unwrap_or(true)
    }

    fn set_visible(&self, visible: bool) {
        let style = self.element.style();
        let result = if visible {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
        if let Err(err) = result {
            tracing::debug!(error = ?err, visible, "failed to toggle row visibility");
        }
    }
}

pub struct DomTable {
    table: Element,
    row_selector: String,
    status_attribute: Rc<str>,
}

impl DomTable {
    pub fn new(table: Element, row_selector: &str, status_attribute: &str) -> Self {
        Self {
            table,
            row_selector: row_selector.to_string(),
            status_attribute: Rc::from(status_attribute),
        }
    }
}

impl RowSource for DomTable {
    type Row = DomRow;

    fn rows(&self) -> Vec<DomRow> {
        let Ok(nodes) = self.table.query_selector_all(&self.row_selector) else {
            tracing::debug!(selector = %self.row_selector, "invalid row selector");
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|element| DomRow {
                element,
                status_attribute: self.status_attribute.clone(),
            })
            .collect()
    }
}

/// 見つかったサマリ欄だけを保持する
pub struct DomSummaryBoard {
    targets: Vec<(SummaryField, Element)>,
}

impl DomSummaryBoard {
    pub fn locate(document: &Document, ids: &SummaryTargets) -> Self {
        let targets = SummaryField::ALL
            .into_iter()
            .filter_map(|field| {
                document
                    .get_element_by_id(ids.id_for(field))
                    .map(|element| (field, element))
            })
            .collect();
        Self { targets }
    }
}

impl SummaryBoard for DomSummaryBoard {
    fn write(&self, field: SummaryField, text: &str) {
        if let Some((_, element)) = self.targets.iter().find(|(f, _)| *f == field) {
            element.set_text_content(Some(text));
        }
    }
}

pub struct DomForm(pub HtmlFormElement);

impl ValidatingForm for DomForm {
    fn check_validity(&self) -> bool {
        self.0.check_validity()
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            tracing::debug!(error = ?err, class, "failed to add form class");
        }
    }
}

pub struct DomSubmitEvent<'a>(pub &'a Event);

impl Cancelable for DomSubmitEvent<'_> {
    fn cancel(&self) {
        self.0.prevent_default();
        self.0.stop_propagation();
    }
}

/// `action` 属性を書き換える
pub struct DomActionForm(pub Element);

impl ActionForm for DomActionForm {
    fn set_action(&self, action: &str) {
        if let Err(err) = self.0.set_attribute("action", action) {
            tracing::debug!(error = ?err, action, "failed to set form action");
        }
    }
}

pub struct DomTrigger(pub Element);

impl ActionTrigger for DomTrigger {
    fn closest(&self, marker: &str) -> Option<Self> {
        self.0
            .closest(&format!(".{marker}"))
            .ok()
            .flatten()
            .map(DomTrigger)
    }

    fn data(&self, key: &str) -> Option<String> {
        self.0.get_attribute(&format!("data-{key}"))
    }
}
