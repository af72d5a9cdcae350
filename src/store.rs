//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gestion_core::confirm::DeleteConfirmation;
use gestion_core::filter::{ConsignaFilter, NovedadFilter};
use gestion_core::form::{ConsignaForm, ModalState, NovedadForm};
use gestion_core::{Consigna, DomainError, DomainResult, Novedad};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last loaded novedades
    pub novedades: Vec<Novedad>,
    /// Load error of the novedades list, if the last load failed
    pub novedades_error: Option<String>,
    pub consignas: Vec<Consigna>,
    pub consignas_error: Option<String>,
    pub novedad_filter: NovedadFilter,
    pub consigna_filter: ConsignaFilter,
    pub novedad_modal: ModalState<NovedadForm>,
    pub consigna_modal: ModalState<ConsignaForm>,
    /// The shared delete confirmation dialog
    pub confirm: DeleteConfirmation,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// The novedades load result as the renderer expects it
pub fn loaded_novedades(store: &AppStore) -> DomainResult<Vec<Novedad>> {
    match store.novedades_error().get() {
        Some(e) => Err(DomainError::Render(e)),
        None => Ok(store.novedades().get()),
    }
}

pub fn loaded_consignas(store: &AppStore) -> DomainResult<Vec<Consigna>> {
    match store.consignas_error().get() {
        Some(e) => Err(DomainError::Render(e)),
        None => Ok(store.consignas().get()),
    }
}

/// Reload novedades from the backend
pub async fn reload_novedades(store: AppStore) {
    match commands::list_novedades().await {
        Ok(loaded) => {
            web_sys::console::log_1(&format!("[STORE] Loaded {} novedades", loaded.len()).into());
            store.novedades().set(loaded);
            store.novedades_error().set(None);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Error loading novedades: {}", e).into());
            store.novedades_error().set(Some(e));
        }
    }
}

/// Reload consignas from the backend
pub async fn reload_consignas(store: AppStore) {
    match commands::list_consignas().await {
        Ok(loaded) => {
            web_sys::console::log_1(&format!("[STORE] Loaded {} consignas", loaded.len()).into());
            store.consignas().set(loaded);
            store.consignas_error().set(None);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Error loading consignas: {}", e).into());
            store.consignas_error().set(Some(e));
        }
    }
}
