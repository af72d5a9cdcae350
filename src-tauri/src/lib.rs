//! Gestión Pro Backend
//!
//! - gestion_core: domain, storage and the application service
//! - commands: Tauri command handlers
//! - notifier: desktop notifications
//! - logging: stderr and file logging

use std::path::PathBuf;
use std::sync::Arc;

use gestion_core::config::AppConfig;
use gestion_core::reminder::NotificationGate;
use gestion_core::repository::DbState;
use gestion_core::service::Service;
use tauri::Manager;

mod commands;
mod logging;
mod notifier;

use notifier::TauriNotifier;

/// Application state shared across commands
pub struct AppState {
    pub service: Service,
    pub db_state: DbState,
    pub export_dir: PathBuf,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_notification::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();
            let paths = app_handle.path();

            if let Err(e) = logging::init_logger(&paths.app_log_dir()?, "gestion-pro") {
                eprintln!("Failed to initialize logging: {}", e);
            }

            let config = AppConfig::load(&paths.app_config_dir()?);
            let data_dir = paths.app_data_dir()?;
            std::fs::create_dir_all(&data_dir)?;
            let db_path = config.database_path(&data_dir);

            // A failed open is remembered; app_status reports it to the frontend.
            let db_state = DbState::new();
            match tauri::async_runtime::block_on(db_state.open(&db_path)) {
                Ok(()) => log::info!("Database ready at {}", db_path.display()),
                Err(e) => log::error!("Error initializing database: {}", e),
            }

            let gate = Arc::new(NotificationGate::new(
                Arc::new(TauriNotifier::new(app_handle.clone())),
                config.notifications_enabled,
            ));
            let service = Service::new(db_state.clone(), gate.clone());

            let export_dir = paths
                .download_dir()
                .or_else(|_| paths.app_data_dir())?;

            app.manage(AppState {
                service: service.clone(),
                db_state: db_state.clone(),
                export_dir,
            });

            let permission = gate.init();
            log::info!("Notification permission: {:?}", permission);

            if tauri::async_runtime::block_on(db_state.is_ready()) {
                let scheduler = service.reminder_scheduler();
                let period = config.reminder_interval();
                tauri::async_runtime::spawn(async move {
                    scheduler.run(period).await;
                });
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::app_status,
            commands::notification_permission,
            // Novedades
            commands::list_novedades,
            commands::get_novedad,
            commands::save_novedad,
            commands::toggle_novedad,
            commands::delete_novedad,
            // Consignas
            commands::list_consignas,
            commands::get_consigna,
            commands::save_consigna,
            commands::toggle_consigna,
            commands::delete_consigna,
            // Export
            commands::export_all,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
