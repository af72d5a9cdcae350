//! UI Components
//!
//! Leptos components for the two sections and the shared dialogs.

mod confirm_modal;
mod consigna_modal;
mod consigna_section;
mod novedad_modal;
mod novedad_section;
mod record_card;
mod success_banner;

pub use confirm_modal::ConfirmModal;
pub use consigna_modal::ConsignaModal;
pub use consigna_section::ConsignaSection;
pub use novedad_modal::NovedadModal;
pub use novedad_section::NovedadSection;
pub use record_card::{ListContainer, ToggleControl};
pub use success_banner::SuccessBanner;
