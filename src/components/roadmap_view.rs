//! Roadmap View Component
//!
//! Intro header, the week rows and the future goals.

use leptos::prelude::*;

use crate::components::{FutureGoals, WeekRow};
use crate::store::{use_app_store, AppStateStoreFields};

/// Legend entries: (css modifier, label)
const LEGEND: &[(&str, &str)] = &[
    ("task", "Задача"),
    ("kpi", "KPI"),
    ("report", "Отчет"),
];

#[component]
pub fn RoadmapView() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="roadmap-view">
            <div class="roadmap-header">
                <h1>"Baseline & Launch"</h1>
                <p class="roadmap-intro">
                    "Стратегия запуска рассчитана на 1 месяц интенсивной работы для создания базы и получения первых результатов. "
                    "Включает в себя экономику, упаковку, трафик и аналитику."
                </p>
                <div class="phase-badge">"Current Phase: Week 1 Baseline"</div>
                <div class="legend">
                    {LEGEND.iter().map(|(kind, label)| view! {
                        <span class=format!("legend-chip {}", kind)>{*label}</span>
                    }).collect_view()}
                </div>
            </div>

            <div class="week-stack">
                // Week membership is fixed; cards read their own data from the store
                <For
                    each=move || store.roadmap().read().weeks().to_vec()
                    key=|week| week.id.clone()
                    children=move |week| view! { <WeekRow week=week /> }
                />

                <FutureGoals />
            </div>
        </div>
    }
}
