//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by collection.

mod app;
mod consigna;
mod export;
mod novedad;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejects with the backend's error string when a command fails
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

fn to_args<A: Serialize>(args: &A) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())
}

/// Invoke `cmd` and decode its result
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct ToggleArgs {
    id: u32,
    completed: bool,
}

#[derive(Serialize)]
struct FormArgs<'a, F> {
    form: &'a F,
}

// Re-export all public items
pub use app::*;
pub use consigna::*;
pub use export::*;
pub use novedad::*;
