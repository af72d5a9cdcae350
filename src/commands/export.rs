//! Export Command

use wasm_bindgen::JsValue;

use super::call;

/// Path of the written report, `None` when there was nothing to export
pub async fn export_all() -> Result<Option<String>, String> {
    call("export_all", JsValue::NULL).await
}
