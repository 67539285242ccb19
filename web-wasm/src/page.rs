//! ページへのイベント登録
//!
//! `initialize` が3つの機能をそれぞれ登録し、リスナーを `PageBindings` に保持する。
//! `PageBindings` を破棄するとリスナーも外れる。

use crate::dom::{
    element_by_id, DomActionForm, DomForm, DomSelect, DomSubmitEvent, DomSummaryBoard, DomTable,
    DomTrigger,
};
use crate::modal::ModalDialog;
use gloo::events::{EventListener, EventListenerOptions};
use jobtrack_common::{
    ActionDispatcher, DeleteConfirmer, DeleteRequest, PageConfig, StatusFilterView, Summary,
    ValidationGuard,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlFormElement, HtmlSelectElement};

type DomFilterView = StatusFilterView<DomSelect, DomTable, DomSummaryBoard>;

/// 登録済みリスナーの所有者
#[wasm_bindgen]
pub struct PageBindings {
    validation: Option<EventListener>,
    filter: Option<(Rc<DomFilterView>, EventListener)>,
    modal: bool,
    _delete: EventListener,
}

/// ページの3機能を登録する。要素が無い機能は何もしない
///
/// 削除ボタンはドキュメントへの委譲なので常に登録される。
pub fn initialize(document: &Document, config: &PageConfig) -> PageBindings {
    let dialog = ModalDialog::locate(document, &config.delete_modal_id, &config.company_label_id);
    let bindings = PageBindings {
        validation: bind_validation(document, config),
        filter: bind_filter(document, config),
        modal: dialog.has_modal(),
        _delete: bind_delete(document, config, dialog),
    };
    tracing::info!(
        validation = bindings.validation.is_some(),
        filter = bindings.filter.is_some(),
        modal = bindings.modal,
        "page behaviors initialized"
    );
    bindings
}

fn bind_validation(document: &Document, config: &PageConfig) -> Option<EventListener> {
    let form: HtmlFormElement = element_by_id(document, &config.form_id)?;
    let guard = ValidationGuard::new(DomForm(form.clone()), config.validated_class.clone());

    // passive だと preventDefault が効かない
    Some(EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            guard.on_submit(&DomSubmitEvent(event));
        },
    ))
}

fn bind_filter(
    document: &Document,
    config: &PageConfig,
) -> Option<(Rc<DomFilterView>, EventListener)> {
    let select = element_by_id::<HtmlSelectElement>(document, &config.filter_id);
    let listen_on = select.clone();
    let table = document
        .get_element_by_id(&config.table_id)
        .map(|table| DomTable::new(table, &config.row_selector, &config.status_attribute));
    let board = DomSummaryBoard::locate(document, &config.summary);

    let view = Rc::new(StatusFilterView::attach(select.map(DomSelect), table, board)?);
    let select = listen_on?;

    let handler_view = view.clone();
    let listener = EventListener::new(&select, "change", move |_| {
        handler_view.apply_filter();
    });
    view.apply_filter();
    Some((view, listener))
}

fn bind_delete(document: &Document, config: &PageConfig, dialog: ModalDialog) -> EventListener {
    let form = document.get_element_by_id(&config.delete_form_id).map(DomActionForm);
    let confirmer = DeleteConfirmer::new(
        dialog,
        form,
        config.delete_path.clone(),
        config.company_fallback.clone(),
    );

    let mut dispatcher = ActionDispatcher::new();
    let (id_key, company_key) = (config.id_key.clone(), config.company_key.clone());
    dispatcher.register(config.delete_trigger_class.clone(), move |trigger: &DomTrigger| {
        let request = DeleteRequest::from_trigger(trigger, &id_key, &company_key);
        confirmer.confirm(&request);
    });

    EventListener::new(document, "click", move |event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        dispatcher.dispatch(&DomTrigger(target));
    })
}

impl PageBindings {
    /// 現在の表示に対するサマリ（フィルタ未登録なら `None`）
    pub fn current_summary(&self) -> Option<Summary> {
        self.filter.as_ref().map(|(view, _)| view.tally())
    }

    /// フィルタを再適用する
    pub fn reapply(&self) -> Option<Summary> {
        self.filter.as_ref().map(|(view, _)| view.apply_filter())
    }
}

#[wasm_bindgen]
impl PageBindings {
    #[wasm_bindgen(getter, js_name = validationBound)]
    pub fn validation_bound(&self) -> bool {
        self.validation.is_some()
    }

    #[wasm_bindgen(getter, js_name = filterBound)]
    pub fn filter_bound(&self) -> bool {
        self.filter.is_some()
    }

    /// `bootstrap.Modal` が使えるか。false でも会社名と送信先は書き換える
    #[wasm_bindgen(getter, js_name = modalBound)]
    pub fn modal_bound(&self) -> bool {
        self.modal
    }

    /// `{ total, applied, interview, rejected, offer }`。フィルタ未登録なら null
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        summary_to_js(self.current_summary())
    }

    pub fn refresh(&self) -> Result<JsValue, JsValue> {
        summary_to_js(self.reapply())
    }

    /// すべてのリスナーを外す
    pub fn dispose(self) {
        tracing::debug!("page behaviors disposed");
    }
}

fn summary_to_js(summary: Option<Summary>) -> Result<JsValue, JsValue> {
    match summary {
        Some(summary) => serde_wasm_bindgen::to_value(&summary)
            .map_err(|e| JsValue::from_str(&format!("summary serialization failed: {}", e))),
        None => Ok(JsValue::NULL),
    }
}
