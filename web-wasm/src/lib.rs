//! Job Tracker Web (WASM)
//!
//! サーバーが描画した応募一覧ページに、入力検証・ステータスフィルタ・削除確認を登録する。

mod dom;
mod modal;
mod page;

pub use page::{initialize, PageBindings};

use jobtrack_common::PageConfig;
use std::sync::Once;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

/// JavaScript から呼ぶ初期化。`config` は省略・オブジェクト・JSON文字列のいずれか
#[wasm_bindgen(js_name = initialize)]
pub fn initialize_js(config: JsValue) -> Result<PageBindings, JsValue> {
    let config = read_config(&config).map_err(|e| JsValue::from_str(&e))?;
    if config.debug_logging {
        init_tracing();
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;
    Ok(initialize(&document, &config))
}

fn read_config(value: &JsValue) -> Result<PageConfig, String> {
    if value.is_undefined() || value.is_null() {
        return Ok(PageConfig::default());
    }
    if let Some(json) = value.as_string() {
        return PageConfig::from_json(&json).map_err(|e| e.to_string());
    }
    let config: PageConfig = serde_wasm_bindgen::from_value(value.clone())
        .map_err(|e| format!("Config error: {}", e))?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        wasm_tracing::set_as_global_default();
    });
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_missing_config_uses_defaults() {
        let config = read_config(&JsValue::UNDEFINED).expect("default config");
        assert_eq!(config, PageConfig::default());
    }

    #[wasm_bindgen_test]
    fn wasm_json_string_config() {
        let config = read_config(&JsValue::from_str(r#"{"deleteTriggerClass": "js-remove"}"#))
            .expect("json config");
        assert_eq!(config.delete_trigger_class, "js-remove");
        assert_eq!(config.delete_path, "/delete/{id}");
    }

    #[wasm_bindgen_test]
    fn wasm_invalid_config_is_rejected() {
        let err = read_config(&JsValue::from_str(r#"{"deletePath": "/remove"}"#)).unwrap_err();
        assert!(err.contains("{id}"));
    }
}
