//! Navigation Bar Component
//!
//! Brand block and the Roadmap / Analytics switch.

use leptos::prelude::*;
use roadmap_core::view_state::ViewMode;

use crate::context::use_app_context;

const VIEWS: &[(ViewMode, &str)] = &[
    (ViewMode::Roadmap, "Roadmap"),
    (ViewMode::Dashboard, "Analytics"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="nav-bar">
            <div class="brand">
                <div class="brand-logo">"P"</div>
                <div class="brand-text">
                    <div class="brand-title">"Liquidity Pools"</div>
                    <div class="brand-subtitle">"Launch Strategy"</div>
                </div>
            </div>

            <nav class="view-switch">
                {VIEWS.iter().map(|&(mode, label)| {
                    let is_active = move || ctx.view.get() == mode;
                    view! {
                        <button
                            class=move || if is_active() { "view-tab active" } else { "view-tab" }
                            on:click=move |_| ctx.show(mode)
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
