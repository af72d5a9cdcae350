//! Consignas Section Component

use chrono::Local;
use gestion_core::filter::StatusFilter;
use gestion_core::render::render_consignas;
use gestion_core::Collection;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{ConsignaModal, ListContainer, ToggleControl};
use crate::commands;
use crate::context::alert;
use crate::store::{loaded_consignas, reload_consignas, use_app_store, AppStateStoreFields};

#[component]
pub fn ConsignaSection() -> impl IntoView {
    let store = use_app_store();

    let list = Signal::derive(move || {
        render_consignas(&loaded_consignas(&store), &store.consigna_filter().get(), &Local::now())
    });

    let on_edit = Callback::new(move |id: u32| {
        spawn_local(async move {
            match commands::get_consigna(id).await {
                Ok(Some(consigna)) => store.consigna_modal().update(|m| m.open_edit(&consigna)),
                Ok(None) => {
                    web_sys::console::error_1(&format!("Consigna {} no longer exists", id).into());
                    alert("Error al cargar la consigna. Por favor, recarga la página.");
                    reload_consignas(store).await;
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading consigna {}: {}", id, e).into());
                    alert("Error al cargar la consigna. Por favor, recarga la página.");
                }
            }
        });
    });

    let on_delete = Callback::new(move |id: u32| {
        store.confirm().update(|confirm| {
            if let Err(e) = confirm.request(Collection::Consignas, id) {
                web_sys::console::warn_1(&e.to_string().into());
            }
        });
    });

    let on_toggle = Callback::new(move |(id, completed): (u32, bool)| {
        spawn_local(async move {
            match commands::toggle_consigna(id, completed).await {
                Ok(updated) => {
                    web_sys::console::log_1(&format!("Consigna completion toggled: {} {}", updated.id, updated.completed).into());
                    reload_consignas(store).await;
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error toggling consigna completion: {}", e).into());
                    alert("Error al actualizar el estado de la consigna.");
                    // The checkbox already flipped; redraw from the stored state
                    store.consignas().update(|_| {});
                }
            }
        });
    });

    view! {
        <section id="consignas-section" class="section">
            <div class="section-header">
                <h2>"Consignas"</h2>
                <button class="btn btn-primary" on:click=move |_| store.consigna_modal().update(|m| m.open_create())>
                    "+ Nueva Consigna"
                </button>
            </div>

            <div class="filters">
                <input
                    id="consigna-search"
                    type="text"
                    placeholder="Buscar por título o asignado..."
                    prop:value=move || store.consigna_filter().with(|f| f.search.clone())
                    on:input=move |ev| {
                        let search = event_target_value(&ev);
                        store.consigna_filter().update(|f| f.search = search);
                    }
                />
                <select
                    id="consigna-filter-estado"
                    on:change=move |ev| {
                        let estado = StatusFilter::from_select(&event_target_value(&ev));
                        store.consigna_filter().update(|f| f.estado = estado);
                    }
                >
                    <option value="">"Todos los estados"</option>
                    <option value="false">"Pendientes"</option>
                    <option value="true">"Completadas"</option>
                </select>
            </div>

            <ListContainer
                list=list
                toggle=ToggleControl::Checkbox
                on_edit=on_edit
                on_delete=on_delete
                on_toggle=on_toggle
            />

            <ConsignaModal />
        </section>
    }
}
