//! Success Banner Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Transient confirmation message, hidden after three seconds
#[component]
pub fn SuccessBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div
            id="success-message"
            class=move || if ctx.success.get().is_some() { "success-message show" } else { "success-message" }
        >
            {move || ctx.success.get().unwrap_or_default()}
        </div>
    }
}
