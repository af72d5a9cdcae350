//! Consigna Modal Component

use gestion_core::form::Saved;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{alert, AppContext};
use crate::store::{reload_consignas, use_app_store, AppStateStoreFields};

#[component]
pub fn ConsignaModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let modal = store.consigna_modal();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = modal.with(|m| m.form.clone());
        spawn_local(async move {
            match commands::save_consigna(&form).await {
                Ok(saved) => {
                    ctx.show_success(match saved {
                        Saved::Created(_) => "Consigna creada con éxito",
                        Saved::Updated(_) => "Consigna actualizada con éxito",
                    });
                    modal.update(|m| m.close());
                    reload_consignas(store).await;
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error saving consigna: {}", e).into());
                    alert("Error al guardar la consigna. Por favor, inténtalo de nuevo.");
                }
            }
        });
    };

    view! {
        <div id="consigna-modal" class=move || if modal.with(|m| m.open) { "modal active" } else { "modal" }>
            <div class="modal-content">
                <div class="modal-header">
                    <h2 id="consigna-modal-title">{move || modal.with(|m| m.title())}</h2>
                    <button class="modal-close" on:click=move |_| modal.update(|m| m.close())>"×"</button>
                </div>
                <form id="consigna-form" on:submit=on_submit>
                    <label for="consigna-titulo">"Título"</label>
                    <input
                        id="consigna-titulo"
                        type="text"
                        required
                        prop:value=move || modal.with(|m| m.form.titulo.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            modal.update(|m| m.form.titulo = value);
                        }
                    />

                    <label for="consigna-asignado">"Asignado a"</label>
                    <input
                        id="consigna-asignado"
                        type="text"
                        required
                        prop:value=move || modal.with(|m| m.form.asignado.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            modal.update(|m| m.form.asignado = value);
                        }
                    />

                    <label for="consigna-descripcion">"Descripción"</label>
                    <textarea
                        id="consigna-descripcion"
                        prop:value=move || modal.with(|m| m.form.descripcion.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            modal.update(|m| m.form.descripcion = value);
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
