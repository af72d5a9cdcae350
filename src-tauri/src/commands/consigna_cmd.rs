//! Tauri Commands for Consignas

use chrono::Utc;
use gestion_core::confirm::PendingDelete;
use gestion_core::form::ConsignaForm;
use gestion_core::form::Saved;
use gestion_core::{Collection, Consigna};
use tauri::State;

use crate::AppState;

#[tauri::command]
pub async fn list_consignas(state: State<'_, AppState>) -> Result<Vec<Consigna>, String> {
    state.service.list_consignas().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_consigna(state: State<'_, AppState>, id: u32) -> Result<Option<Consigna>, String> {
    state.service.get_consigna(id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn save_consigna(
    state: State<'_, AppState>,
    form: ConsignaForm,
) -> Result<Saved<Consigna>, String> {
    state.service.submit_consigna(&form).await.map_err(|e| {
        log::error!("Error saving consigna: {}", e);
        e.to_string()
    })
}

#[tauri::command]
pub async fn toggle_consigna(
    state: State<'_, AppState>,
    id: u32,
    completed: bool,
) -> Result<Consigna, String> {
    state
        .service
        .toggle_consigna(id, completed, Utc::now())
        .await
        .map_err(|e| {
            log::error!("Error toggling consigna completion: {}", e);
            e.to_string()
        })
}

#[tauri::command]
pub async fn delete_consigna(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state
        .service
        .delete(PendingDelete { collection: Collection::Consignas, id })
        .await
        .map_err(|e| e.to_string())
}
