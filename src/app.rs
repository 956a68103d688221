//! Launch Roadmap App
//!
//! Header navigation, then either the roadmap or the analytics dashboard.

use std::sync::Arc;
use leptos::prelude::*;
use reactive_stores::Store;
use roadmap_core::view_state::{DataMode, ViewMode};
use roadmap_core::Catalogue;

use crate::context::AppContext;
use crate::store::AppState;
use crate::components::{NavBar, RoadmapView, Dashboard};

#[component]
pub fn App() -> impl IntoView {
    let catalogue = match Catalogue::builtin() {
        Ok(catalogue) => Arc::new(catalogue),
        Err(e) => {
            log::error!("failed to load roadmap catalogue: {}", e);
            return view! {
                <div class="load-error">{format!("Roadmap data unavailable: {}", e)}</div>
            }
            .into_any();
        }
    };

    // State
    let store = Store::new(AppState::new(&catalogue));
    let view_mode = signal(ViewMode::default());
    let data_mode = signal(DataMode::default());

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new(view_mode, data_mode, catalogue);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match ctx.view.get() {
                    ViewMode::Roadmap => view! { <RoadmapView /> }.into_any(),
                    ViewMode::Dashboard => view! { <Dashboard /> }.into_any(),
                }}
            </main>

            <footer class="app-footer">
                <span>"Созвоны: Вт/Пт (60 мин)"</span>
                <span>"Updates: Daily Telegram"</span>
                <span class="footer-version">"SYSTEM_VERSION_1.0 // LIQUIDITY_POOLS"</span>
            </footer>
        </div>
    }
    .into_any()
}
