//! Desktop notifications through tauri-plugin-notification

use gestion_core::reminder::{Notifier, PermissionState};
use gestion_core::{DomainError, DomainResult};
use tauri::AppHandle;
use tauri_plugin_notification::NotificationExt;

fn to_permission_state(state: tauri_plugin_notification::PermissionState) -> PermissionState {
    match state {
        tauri_plugin_notification::PermissionState::Granted => PermissionState::Granted,
        tauri_plugin_notification::PermissionState::Denied => PermissionState::Denied,
        _ => PermissionState::Default,
    }
}

pub struct TauriNotifier {
    app: AppHandle,
}

impl TauriNotifier {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl Notifier for TauriNotifier {
    fn permission(&self) -> PermissionState {
        match self.app.notification().permission_state() {
            Ok(state) => to_permission_state(state),
            Err(e) => {
                log::warn!("This platform does not support desktop notifications: {}", e);
                PermissionState::Denied
            }
        }
    }

    fn request_permission(&self) -> PermissionState {
        match self.app.notification().request_permission() {
            Ok(state) => to_permission_state(state),
            Err(e) => {
                log::warn!("Notification permission request failed: {}", e);
                PermissionState::Default
            }
        }
    }

    fn notify(&self, title: &str, body: &str) -> DomainResult<()> {
        self.app
            .notification()
            .builder()
            .title(title)
            .body(body)
            .show()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}
