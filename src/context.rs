//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the success banner stays visible
const SUCCESS_BANNER_MS: u32 = 3_000;

/// The two list sections
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Novedades,
    Consignas,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Section currently shown - read
    pub section: ReadSignal<Section>,
    /// Section currently shown - write
    set_section: WriteSignal<Section>,
    /// Text of the success banner, `None` when hidden - read
    pub success: ReadSignal<Option<String>>,
    /// Text of the success banner - write
    set_success: WriteSignal<Option<String>>,
    /// Bumped on every banner so an older timer does not hide a newer one
    banner_generation: StoredValue<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        let (section, set_section) = signal(Section::Novedades);
        let (success, set_success) = signal(None);
        Self {
            section,
            set_section,
            success,
            set_success,
            banner_generation: StoredValue::new(0),
        }
    }

    pub fn show_section(&self, section: Section) {
        self.set_section.set(section);
    }

    /// Show `✓ message` for three seconds
    pub fn show_success(&self, message: &str) {
        let generation = self.banner_generation.get_value().wrapping_add(1);
        self.banner_generation.set_value(generation);
        self.set_success.set(Some(format!("✓ {}", message)));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(SUCCESS_BANNER_MS).await;
            if ctx.banner_generation.get_value() == generation {
                ctx.set_success.set(None);
            }
        });
    }
}

/// Blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
