//! Dashboard Component
//!
//! Summary cards and charts, switched between the projected dataset and
//! the manually entered history.

use leptos::prelude::*;
use roadmap_core::domain::{ChartPoint, MetricTotals};
use roadmap_core::input::MetricForm;
use roadmap_core::view_state::DataMode;

use super::stat_card::STAT_CARDS;
use crate::components::{ActionsChart, StatCard, TrafficChart};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

const DATA_MODES: [(DataMode, &str); 2] = [
    (DataMode::Expectation, "Ожидание"),
    (DataMode::Reality, "Реальность"),
];

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let form = RwSignal::new(MetricForm::default());

    let reality = move || ctx.data_mode.get() == DataMode::Reality;

    let totals = Signal::derive(move || -> MetricTotals {
        match ctx.data_mode.get() {
            DataMode::Expectation => ctx.catalogue().expectation,
            DataMode::Reality => store.history().read().aggregate(),
        }
    });
    let points = Signal::derive(move || -> Vec<ChartPoint> {
        match ctx.data_mode.get() {
            DataMode::Expectation => ctx.catalogue().projection.clone(),
            DataMode::Reality => store.history().read().chart_points(),
        }
    });
    let waiting = Signal::derive(move || reality() && store.history().read().is_empty());

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <div>
                    <h2 class="dashboard-title">"Launch Analytics"</h2>
                    <p class="dashboard-subtitle">"Ключевые метрики запуска Liquidity Pools"</p>
                </div>
                <div class="data-mode-switch">
                    {DATA_MODES.into_iter().map(|(mode, label)| view! {
                        <button
                            class=move || if ctx.data_mode.get() == mode { "mode-btn active" } else { "mode-btn" }
                            on:click=move |_| ctx.set_data_mode(mode)
                        >
                            {label}
                        </button>
                    }).collect_view()}
                </div>
                <span class=move || if reality() { "live-badge reality" } else { "live-badge" }>
                    {move || if reality() { "LIVE DATA ENTRY" } else { "SIMULATION MODE" }}
                </span>
            </div>

            <div class="stat-grid">
                {STAT_CARDS.iter().map(|info| view! {
                    <StatCard info=info totals=totals form=form />
                }).collect_view()}
            </div>

            <div class="chart-grid">
                <TrafficChart points=points waiting=waiting />
                <ActionsChart points=points waiting=waiting />
            </div>
        </div>
    }
}
