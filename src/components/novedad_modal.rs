//! Novedad Modal Component
//!
//! Create/edit form for a novedad.

use gestion_core::form::Saved;
use gestion_core::Prioridad;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{alert, AppContext};
use crate::store::{reload_novedades, use_app_store, AppStateStoreFields};

#[component]
pub fn NovedadModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let modal = store.novedad_modal();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = modal.with(|m| m.form.clone());
        spawn_local(async move {
            match commands::save_novedad(&form).await {
                Ok(saved) => {
                    ctx.show_success(match saved {
                        Saved::Created(_) => "Novedad creada con éxito",
                        Saved::Updated(_) => "Novedad actualizada con éxito",
                    });
                    modal.update(|m| m.close());
                    reload_novedades(store).await;
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error saving novedad: {}", e).into());
                    alert("Error al guardar la novedad. Por favor, inténtalo de nuevo.");
                }
            }
        });
    };

    view! {
        <div id="novedad-modal" class=move || if modal.with(|m| m.open) { "modal active" } else { "modal" }>
            <div class="modal-content">
                <div class="modal-header">
                    <h2 id="novedad-modal-title">{move || modal.with(|m| m.title())}</h2>
                    <button class="modal-close" on:click=move |_| modal.update(|m| m.close())>"×"</button>
                </div>
                <form id="novedad-form" on:submit=on_submit>
                    <label for="novedad-descripcion">"Descripción"</label>
                    <input
                        id="novedad-descripcion"
                        type="text"
                        required
                        prop:value=move || modal.with(|m| m.form.descripcion.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            modal.update(|m| m.form.descripcion = value);
                        }
                    />

                    <label for="novedad-responsable">"Responsable"</label>
                    <input
                        id="novedad-responsable"
                        type="text"
                        required
                        prop:value=move || modal.with(|m| m.form.responsable.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            modal.update(|m| m.form.responsable = value);
                        }
                    />

                    <label for="novedad-hora-inicio">"Hora de inicio"</label>
                    <input
                        id="novedad-hora-inicio"
                        type="time"
                        required
                        prop:value=move || modal.with(|m| m.form.hora_inicio.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            modal.update(|m| m.form.hora_inicio = value);
                        }
                    />

                    <label for="novedad-prioridad">"Prioridad"</label>
                    <select
                        id="novedad-prioridad"
                        required
                        prop:value=move || modal.with(|m| m.form.prioridad.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            modal.update(|m| m.form.prioridad = value);
                        }
                    >
                        <option value="">"Seleccionar..."</option>
                        {Prioridad::ALL.iter().map(|p| view! {
                            <option value=p.as_str()>{p.as_str()}</option>
                        }).collect_view()}
                    </select>

                    <label for="novedad-observaciones">"Observaciones"</label>
                    <textarea
                        id="novedad-observaciones"
                        prop:value=move || modal.with(|m| m.form.observaciones.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            modal.update(|m| m.form.observaciones = value);
                        }
                    ></textarea>

                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| modal.update(|m| m.close())>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn-primary">"Guardar"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
