//! Tauri Commands for Novedades

use chrono::Utc;
use gestion_core::confirm::PendingDelete;
use gestion_core::form::NovedadForm;
use gestion_core::form::Saved;
use gestion_core::{Collection, Novedad};
use tauri::State;

use crate::AppState;

/// List all novedades
#[tauri::command]
pub async fn list_novedades(state: State<'_, AppState>) -> Result<Vec<Novedad>, String> {
    state.service.list_novedades().await.map_err(|e| e.to_string())
}

/// Get novedad by ID
#[tauri::command]
pub async fn get_novedad(state: State<'_, AppState>, id: u32) -> Result<Option<Novedad>, String> {
    state.service.get_novedad(id).await.map_err(|e| e.to_string())
}

/// Create or edit from the modal form
#[tauri::command]
pub async fn save_novedad(
    state: State<'_, AppState>,
    form: NovedadForm,
) -> Result<Saved<Novedad>, String> {
    state
        .service
        .submit_novedad(&form, Utc::now())
        .await
        .map_err(|e| {
            log::error!("Error saving novedad: {}", e);
            e.to_string()
        })
}

/// Set completion state
#[tauri::command]
pub async fn toggle_novedad(
    state: State<'_, AppState>,
    id: u32,
    completed: bool,
) -> Result<Novedad, String> {
    state
        .service
        .toggle_novedad(id, completed, Utc::now())
        .await
        .map_err(|e| {
            log::error!("Error toggling novedad completion: {}", e);
            e.to_string()
        })
}

/// Delete after confirmation
#[tauri::command]
pub async fn delete_novedad(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state
        .service
        .delete(PendingDelete { collection: Collection::Novedades, id })
        .await
        .map_err(|e| e.to_string())
}
