//! ブラウザ上での登録テスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行する

#![cfg(target_arch = "wasm32")]

use jobtrack_common::{PageConfig, Summary};
use jobtrack_wasm::initialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlElement, HtmlFormElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<form id="applicationForm">
  <input name="company_name" required>
</form>
<select id="statusFilter">
  <option value="All">All</option>
  <option value="Applied">Applied</option>
  <option value="Interview">Interview</option>
  <option value="Rejected">Rejected</option>
  <option value="Offer">Offer</option>
</select>
<table id="applicationsTable">
  <thead><tr><th>Company</th></tr></thead>
  <tbody>
    <tr data-status="Applied"><td>Acme</td><td><button class="btn btn-delete" data-id="42" data-company="Acme"><i id="icon42"></i></button></td></tr>
    <tr data-status="Interview"><td>Globex</td><td><button class="btn btn-delete" data-id="7">x</button></td></tr>
    <tr data-status="Applied"><td>Initech</td></tr>
    <tr data-status="Rejected"><td>Hooli</td></tr>
  </tbody>
</table>
<span id="summary-total"></span>
<span id="summary-applied"></span>
<span id="summary-interview"></span>
<span id="summary-rejected"></span>
<span id="summary-offer"></span>
<div id="deleteModal"><span id="delCompany"></span></div>
<form id="deleteForm" method="post"></form>
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(html: &str) -> Document {
    let document = document();
    document.body().unwrap().set_inner_html(html);
    document
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> T {
    document.get_element_by_id(id).unwrap().dyn_into::<T>().unwrap()
}

fn text(document: &Document, id: &str) -> String {
    document.get_element_by_id(id).unwrap().text_content().unwrap_or_default()
}

fn visible_rows(document: &Document) -> Vec<bool> {
    let rows = document.query_selector_all("#applicationsTable tbody tr").unwrap();
    (0..rows.length())
        .map(|i| {
            let row: HtmlElement = rows.get(i).unwrap().dyn_into().unwrap();
            row.style().get_property_value("display").unwrap() != "none"
        })
        .collect()
}

fn change(select: &HtmlSelectElement, value: &str) {
    select.set_value(value);
    select.dispatch_event(&Event::new("change").unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn initial_summary_counts_all_rows() {
    let document = mount(PAGE);
    let bindings = initialize(&document, &PageConfig::default());

    assert!(bindings.filter_bound());
    assert_eq!(text(&document, "summary-total"), "Total: 4");
    assert_eq!(text(&document, "summary-applied"), "Applied: 2");
    assert_eq!(text(&document, "summary-interview"), "Interview: 1");
    assert_eq!(text(&document, "summary-rejected"), "Rejected: 1");
    assert_eq!(text(&document, "summary-offer"), "Offer: 0");
}

#[wasm_bindgen_test]
fn change_event_filters_rows() {
    let document = mount(PAGE);
    let bindings = initialize(&document, &PageConfig::default());
    let select: HtmlSelectElement = by_id(&document, "statusFilter");

    change(&select, "Applied");
    assert_eq!(visible_rows(&document), vec![true, false, true, false]);
    assert_eq!(text(&document, "summary-total"), "Total: 2");
    assert_eq!(
        bindings.current_summary(),
        Some(Summary { total: 2, applied: 2, ..Default::default() })
    );

    change(&select, "All");
    assert_eq!(visible_rows(&document), vec![true; 4]);
    assert_eq!(text(&document, "summary-total"), "Total: 4");
}

#[wasm_bindgen_test]
fn filter_is_inert_without_table() {
    let document = mount(r#"<select id="statusFilter"><option>All</option></select><span id="summary-total"></span>"#);
    let bindings = initialize(&document, &PageConfig::default());

    assert!(!bindings.filter_bound());
    assert!(!bindings.validation_bound());
    assert_eq!(bindings.current_summary(), None);
    assert_eq!(text(&document, "summary-total"), "");
}

#[wasm_bindgen_test]
fn delete_click_retargets_form() {
    let document = mount(PAGE);
    let bindings = initialize(&document, &PageConfig::default());

    // アイコンのクリックもボタンへ解決される
    let icon: HtmlElement = by_id(&document, "icon42");
    icon.click();
    assert_eq!(text(&document, "delCompany"), "Acme");
    let form: HtmlFormElement = by_id(&document, "deleteForm");
    assert_eq!(form.get_attribute("action").as_deref(), Some("/delete/42"));

    // テストページには bootstrap が無いのでダイアログ自体は開かない
    assert!(!bindings.modal_bound());

    let second: HtmlElement = document
        .query_selector("button[data-id='7']")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    second.click();
    assert_eq!(text(&document, "delCompany"), "this company");
    assert_eq!(form.get_attribute("action").as_deref(), Some("/delete/7"));
}

#[wasm_bindgen_test]
fn delete_trigger_added_later_is_handled() {
    let document = mount(PAGE);
    let _bindings = initialize(&document, &PageConfig::default());

    let tbody = document.query_selector("#applicationsTable tbody").unwrap().unwrap();
    let row = document.create_element("tr").unwrap();
    row.set_inner_html(r#"<td><button class="btn-delete" data-id="99" data-company="Umbrella">x</button></td>"#);
    tbody.append_child(&row).unwrap();

    let button: HtmlElement = row.query_selector("button").unwrap().unwrap().dyn_into().unwrap();
    button.click();
    assert_eq!(text(&document, "delCompany"), "Umbrella");
}

#[wasm_bindgen_test]
fn invalid_submit_is_prevented() {
    let document = mount(PAGE);
    let bindings = initialize(&document, &PageConfig::default());
    assert!(bindings.validation_bound());

    let form: HtmlFormElement = by_id(&document, "applicationForm");
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap();

    assert!(event.default_prevented());
    assert!(form.class_list().contains("was-validated"));
}

#[wasm_bindgen_test]
fn dispose_unbinds_listeners() {
    let document = mount(PAGE);
    let bindings = initialize(&document, &PageConfig::default());
    bindings.dispose();

    let select: HtmlSelectElement = by_id(&document, "statusFilter");
    change(&select, "Rejected");
    assert_eq!(visible_rows(&document), vec![true; 4]);
    assert_eq!(text(&document, "summary-total"), "Total: 4");
}
