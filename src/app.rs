//! Gestión Pro Frontend App
//!
//! Navigation between the two sections, the export button and the shared
//! dialogs.

use gestion_core::export::{EXPORT_FAILED, NOTHING_TO_EXPORT};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ConfirmModal, ConsignaSection, NovedadSection, SuccessBanner};
use crate::context::{alert, AppContext, Section};
use crate::store::{reload_consignas, reload_novedades, AppState};

const INIT_FAILED: &str = "Error al inicializar la aplicación. Por favor, recarga la página.";

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new();
    provide_context(store);
    provide_context(ctx);

    // Initial load, once the backend reports a usable database
    spawn_local(async move {
        if let Err(e) = commands::app_status().await {
            web_sys::console::error_1(&format!("Error initializing application: {}", e).into());
            alert(INIT_FAILED);
            return;
        }
        if let Ok(permission) = commands::notification_permission().await {
            web_sys::console::log_1(&format!("[APP] Notification permission: {:?}", permission).into());
        }
        reload_novedades(store).await;
        reload_consignas(store).await;
    });

    let on_export = move |_| {
        spawn_local(async move {
            match commands::export_all().await {
                Ok(Some(path)) => {
                    web_sys::console::log_1(&format!("[APP] Report written to {}", path).into());
                    ctx.show_success(&format!("Reporte exportado: {}", path));
                }
                Ok(None) => alert(NOTHING_TO_EXPORT),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error exporting to CSV: {}", e).into());
                    alert(EXPORT_FAILED);
                }
            }
        });
    };

    let nav_class = move |section: Section| {
        if ctx.section.get() == section { "nav-item active" } else { "nav-item" }
    };

    view! {
        <div class="app-layout">
            <nav class="sidebar">
                <h1 class="app-title">"Gestión Pro"</h1>
                <button
                    class=move || nav_class(Section::Novedades)
                    on:click=move |_| ctx.show_section(Section::Novedades)
                >
                    "📋 Novedades"
                </button>
                <button
                    class=move || nav_class(Section::Consignas)
                    on:click=move |_| ctx.show_section(Section::Consignas)
                >
                    "✅ Consignas"
                </button>
                <button id="export-all-btn" class="btn btn-secondary" on:click=on_export>
                    "📥 Exportar todo (CSV)"
                </button>
            </nav>

            <main class="main-content">
                <Show when=move || ctx.section.get() == Section::Novedades>
                    <NovedadSection />
                </Show>
                <Show when=move || ctx.section.get() == Section::Consignas>
                    <ConsignaSection />
                </Show>
            </main>

            <ConfirmModal />
            <SuccessBanner />
        </div>
    }
}
