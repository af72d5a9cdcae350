//! Novedad Commands
//!
//! Frontend bindings for novedad-related backend commands.

use gestion_core::form::NovedadForm;
use gestion_core::form::Saved;
use gestion_core::Novedad;
use wasm_bindgen::JsValue;

use super::{call, to_args, FormArgs, IdArgs, ToggleArgs};

pub async fn list_novedades() -> Result<Vec<Novedad>, String> {
    call("list_novedades", JsValue::NULL).await
}

pub async fn get_novedad(id: u32) -> Result<Option<Novedad>, String> {
    call("get_novedad", to_args(&IdArgs { id })?).await
}

pub async fn save_novedad(form: &NovedadForm) -> Result<Saved<Novedad>, String> {
    call("save_novedad", to_args(&FormArgs { form })?).await
}

pub async fn toggle_novedad(id: u32, completed: bool) -> Result<Novedad, String> {
    call("toggle_novedad", to_args(&ToggleArgs { id, completed })?).await
}

pub async fn delete_novedad(id: u32) -> Result<(), String> {
    call("delete_novedad", to_args(&IdArgs { id })?).await
}
