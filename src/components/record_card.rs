//! Record Card Component
//!
//! Renders one `Card` view model, and a whole `ListView`, with edit, delete
//! and completion controls.

use gestion_core::render::{Card, ListView};
use leptos::prelude::*;

/// How a card exposes its completion state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleControl {
    /// "Marcar como completada" button (novedades)
    Button,
    /// Checkbox next to the title (consignas)
    Checkbox,
}

#[component]
fn RecordCard(
    card: Card,
    toggle: ToggleControl,
    on_edit: Callback<u32>,
    on_delete: Callback<u32>,
    /// (id, new completed state)
    on_toggle: Callback<(u32, bool)>,
) -> impl IntoView {
    let id = card.id;
    let completed = card.completed;
    let toggle_label = card.toggle_label();
    let card_class = if completed { "card completed" } else { "card" };

    view! {
        <div class=card_class data-id=id.to_string() data-completed=completed.to_string()>
            <div class="card-header">
                {match toggle {
                    ToggleControl::Checkbox => view! {
                        <div class="checkbox-wrapper">
                            <input
                                type="checkbox"
                                class="checkbox"
                                prop:checked=completed
                                on:change=move |ev| on_toggle.run((id, event_target_checked(&ev)))
                            />
                            <h3 class="card-title" data-completed=completed.to_string()>{card.title}</h3>
                        </div>
                    }.into_any(),
                    ToggleControl::Button => view! {
                        <h3 class="card-title">{card.title}</h3>
                    }.into_any(),
                }}
                {card.badge.map(|badge| view! { <span class=badge.class>{badge.label}</span> })}
            </div>
            <p class="card-description">{card.description}</p>
            <div class="card-meta">
                {card.meta.into_iter().map(|line| view! { <span>{line}</span> }).collect_view()}
            </div>
            <div class="card-actions">
                <button class="btn btn-secondary btn-edit" on:click=move |_| on_edit.run(id)>
                    "✏️ Editar"
                </button>
                <button class="btn btn-danger btn-delete" on:click=move |_| on_delete.run(id)>
                    "🗑️ Eliminar"
                </button>
                {(toggle == ToggleControl::Button).then(|| view! {
                    <button class="btn btn-primary btn-complete" on:click=move |_| on_toggle.run((id, !completed))>
                        {toggle_label}
                    </button>
                })}
            </div>
        </div>
    }
}

/// A list container: cards, or a single placeholder paragraph
#[component]
pub fn ListContainer(
    #[prop(into)] list: Signal<ListView>,
    toggle: ToggleControl,
    on_edit: Callback<u32>,
    on_delete: Callback<u32>,
    on_toggle: Callback<(u32, bool)>,
) -> impl IntoView {
    view! {
        <div class="cards-container">
            {move || match list.get() {
                ListView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! {
                        <RecordCard
                            card=card
                            toggle=toggle
                            on_edit=on_edit
                            on_delete=on_delete
                            on_toggle=on_toggle
                        />
                    })
                    .collect_view()
                    .into_any(),
                ListView::Empty(message) | ListView::Error(message) => view! {
                    <p class="list-placeholder">{message}</p>
                }.into_any(),
            }}
        </div>
    }
}
