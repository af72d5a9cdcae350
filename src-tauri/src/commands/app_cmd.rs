//! Startup status and notification permission

use gestion_core::reminder::PermissionState;
use tauri::State;

use crate::AppState;

/// Fails with the initialization error when the database could not be opened
#[tauri::command]
pub async fn app_status(state: State<'_, AppState>) -> Result<(), String> {
    state.db_state.connection().await.map(|_| ()).map_err(|e| {
        log::error!("Error initializing application: {}", e);
        e.to_string()
    })
}

/// Permission resolved at startup
#[tauri::command]
pub fn notification_permission(state: State<'_, AppState>) -> PermissionState {
    state.service.notifications().permission()
}
