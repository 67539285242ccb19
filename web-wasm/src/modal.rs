//! 確認ダイアログ（Bootstrap Modal）
//!
//! `bootstrap.Modal` が読み込まれていなければ、会社名の表示だけを行う。

use jobtrack_common::ConfirmDialog;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    type BootstrapModal;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Modal", catch)]
    fn new(element: &Element) -> Result<BootstrapModal, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &BootstrapModal);
}

pub struct ModalDialog {
    modal: Option<BootstrapModal>,
    company_label: Option<Element>,
}

impl ModalDialog {
    pub fn locate(document: &Document, modal_id: &str, company_label_id: &str) -> Self {
        let modal = document
            .get_element_by_id(modal_id)
            .and_then(|element| match BootstrapModal::new(&element) {
                Ok(modal) => Some(modal),
                Err(err) => {
                    tracing::warn!(error = ?err, "bootstrap.Modal is unavailable");
                    None
                }
            });
        Self {
            modal,
            company_label: document.get_element_by_id(company_label_id),
        }
    }

    pub fn has_modal(&self) -> bool {
        self.modal.is_some()
    }
}

impl ConfirmDialog for ModalDialog {
    fn set_content(&self, company: &str) {
        if let Some(label) = &self.company_label {
            label.set_text_content(Some(company));
        }
    }

    fn open(&self) {
        if let Some(modal) = &self.modal {
            modal.show();
        }
    }
}
