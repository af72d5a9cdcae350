//! CSV export command

use chrono::Local;
use tauri::State;

use crate::AppState;

/// Write the full report into the export directory.
///
/// Returns the written path, or `None` when there is nothing to export.
#[tauri::command]
pub async fn export_all(state: State<'_, AppState>) -> Result<Option<String>, String> {
    log::info!("Exporting all data to CSV...");
    let report = state
        .service
        .export_all(&Local::now())
        .await
        .map_err(|e| {
            log::error!("Error exporting to CSV: {}", e);
            e.to_string()
        })?;

    let Some(report) = report else {
        return Ok(None);
    };
    let path = report.write_to(&state.export_dir).map_err(|e| {
        log::error!("Error exporting to CSV: {}", e);
        e.to_string()
    })?;
    Ok(Some(path.display().to_string()))
}
