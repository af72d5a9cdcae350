//! Startup Commands

use gestion_core::reminder::PermissionState;
use wasm_bindgen::JsValue;

use super::call;

/// Err carries the database initialization failure
pub async fn app_status() -> Result<(), String> {
    call("app_status", JsValue::NULL).await
}

pub async fn notification_permission() -> Result<PermissionState, String> {
    call("notification_permission", JsValue::NULL).await
}
