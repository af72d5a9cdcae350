//! Consigna Commands
//!
//! Frontend bindings for consigna-related backend commands.

use gestion_core::form::ConsignaForm;
use gestion_core::form::Saved;
use gestion_core::Consigna;
use wasm_bindgen::JsValue;

use super::{call, to_args, FormArgs, IdArgs, ToggleArgs};

pub async fn list_consignas() -> Result<Vec<Consigna>, String> {
    call("list_consignas", JsValue::NULL).await
}

pub async fn get_consigna(id: u32) -> Result<Option<Consigna>, String> {
    call("get_consigna", to_args(&IdArgs { id })?).await
}

pub async fn save_consigna(form: &ConsignaForm) -> Result<Saved<Consigna>, String> {
    call("save_consigna", to_args(&FormArgs { form })?).await
}

pub async fn toggle_consigna(id: u32, completed: bool) -> Result<Consigna, String> {
    call("toggle_consigna", to_args(&ToggleArgs { id, completed })?).await
}

pub async fn delete_consigna(id: u32) -> Result<(), String> {
    call("delete_consigna", to_args(&IdArgs { id })?).await
}
