//! Novedades Section Component
//!
//! Search and select filters, the card list and the create button.

use chrono::Local;
use gestion_core::filter::{NovedadFilter, StatusFilter};
use gestion_core::render::render_novedades;
use gestion_core::{Collection, Prioridad};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{ListContainer, NovedadModal, ToggleControl};
use crate::commands;
use crate::context::alert;
use crate::store::{loaded_novedades, reload_novedades, use_app_store, AppStateStoreFields};

#[component]
pub fn NovedadSection() -> impl IntoView {
    let store = use_app_store();

    let list = Signal::derive(move || {
        render_novedades(&loaded_novedades(&store), &store.novedad_filter().get(), &Local::now())
    });

    let on_edit = Callback::new(move |id: u32| {
        spawn_local(async move {
            match commands::get_novedad(id).await {
                Ok(Some(novedad)) => store.novedad_modal().update(|m| m.open_edit(&novedad)),
                Ok(None) => {
                    web_sys::console::error_1(&format!("Novedad {} no longer exists", id).into());
                    alert("Error al cargar la novedad. Por favor, recarga la página.");
                    reload_novedades(store).await;
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading novedad {}: {}", id, e).into());
                    alert("Error al cargar la novedad. Por favor, recarga la página.");
                }
            }
        });
    });

    let on_delete = Callback::new(move |id: u32| {
        store.confirm().update(|confirm| {
            if let Err(e) = confirm.request(Collection::Novedades, id) {
                web_sys::console::warn_1(&e.to_string().into());
            }
        });
    });

    let on_toggle = Callback::new(move |(id, completed): (u32, bool)| {
        spawn_local(async move {
            match commands::toggle_novedad(id, completed).await {
                Ok(updated) => {
                    web_sys::console::log_1(&format!("Novedad completion toggled: {} {}", updated.id, updated.completed).into());
                    reload_novedades(store).await;
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error toggling novedad completion: {}", e).into());
                    alert("Error al actualizar el estado de la novedad.");
                }
            }
        });
    });

    view! {
        <section id="novedades-section" class="section">
            <div class="section-header">
                <h2>"Novedades"</h2>
                <button class="btn btn-primary" on:click=move |_| store.novedad_modal().update(|m| m.open_create())>
                    "+ Nueva Novedad"
                </button>
            </div>

            <div class="filters">
                <input
                    id="novedad-search"
                    type="text"
                    placeholder="Buscar por descripción o responsable..."
                    prop:value=move || store.novedad_filter().with(|f| f.search.clone())
                    on:input=move |ev| {
                        let search = event_target_value(&ev);
                        store.novedad_filter().update(|f| f.search = search);
                    }
                />
                <select
                    id="novedad-filter-prioridad"
                    on:change=move |ev| {
                        let prioridad = NovedadFilter::prioridad_from_select(&event_target_value(&ev));
                        store.novedad_filter().update(|f| f.prioridad = prioridad);
                    }
                >
                    <option value="">"Todas las prioridades"</option>
                    {Prioridad::ALL.iter().map(|p| view! {
                        <option value=p.as_str()>{p.as_str()}</option>
                    }).collect_view()}
                </select>
                <select
                    id="novedad-filter-estado"
                    on:change=move |ev| {
                        let estado = StatusFilter::from_select(&event_target_value(&ev));
                        store.novedad_filter().update(|f| f.estado = estado);
                    }
                >
                    <option value="">"Todos los estados"</option>
                    <option value="false">"Pendientes"</option>
                    <option value="true">"Completadas"</option>
                </select>
            </div>

            <ListContainer
                list=list
                toggle=ToggleControl::Button
                on_edit=on_edit
                on_delete=on_delete
                on_toggle=on_toggle
            />

            <NovedadModal />
        </section>
    }
}
