//! Confirm Delete Modal Component
//!
//! The one confirmation dialog shared by both sections.

use gestion_core::confirm::PendingDelete;
use gestion_core::Collection;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{alert, AppContext};
use crate::store::{reload_consignas, reload_novedades, use_app_store, AppStateStoreFields};

async fn delete(target: PendingDelete) -> Result<(), String> {
    match target.collection {
        Collection::Novedades => commands::delete_novedad(target.id).await,
        Collection::Consignas => commands::delete_consigna(target.id).await,
    }
}

#[component]
pub fn ConfirmModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let confirm = store.confirm();

    let on_confirm = move |_| {
        // Taking the pending delete closes the dialog; a second click finds nothing
        let Some(target) = confirm.try_update(|c| c.confirm()).flatten() else {
            return;
        };
        spawn_local(async move {
            match delete(target).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("Item deleted from {} with ID: {}", target.collection, target.id).into());
                    ctx.show_success("Elemento eliminado");
                    match target.collection {
                        Collection::Novedades => reload_novedades(store).await,
                        Collection::Consignas => reload_consignas(store).await,
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting item: {}", e).into());
                    alert("Error al eliminar el elemento.");
                }
            }
        });
    };

    view! {
        <div id="confirm-modal" class=move || if confirm.with(|c| c.is_open()) { "modal active" } else { "modal" }>
            <div class="modal-content modal-small">
                <h2>"Confirmar eliminación"</h2>
                <p>"¿Estás seguro de que deseas eliminar este elemento?"</p>
                <div class="modal-actions">
                    <button id="cancel-delete-btn" class="btn btn-secondary" on:click=move |_| confirm.update(|c| c.cancel())>
                        "Cancelar"
                    </button>
                    <button id="confirm-delete-btn" class="btn btn-danger" on:click=on_confirm>
                        "Eliminar"
                    </button>
                </div>
            </div>
        </div>
    }
}
