//! Future Goals Component
//!
//! Read-only blocks for the months after launch.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn FutureGoals() -> impl IntoView {
    let ctx = use_app_context();
    let catalogue = ctx.catalogue();

    view! {
        <section class="future-goals">
            <div class="future-goals-header">
                <h2>"Будущие этапы"</h2>
                <p>"Scaling & Authority"</p>
            </div>
            <div class="future-goals-grid">
                {catalogue.future_goals.iter().map(|goal| view! {
                    <div class="goal-card">
                        <div class="goal-top">
                            <h3>{goal.title.clone()}</h3>
                            <span class="goal-period">{goal.period.clone()}</span>
                        </div>
                        <div class="goal-columns">
                            <div>
                                <div class="goal-column-title">"Задачи"</div>
                                <ul class="goal-items">
                                    {goal.items.iter().map(|item| view! { <li>{item.clone()}</li> }).collect_view()}
                                </ul>
                            </div>
                            <div>
                                <div class="goal-column-title kpi">"Target KPI"</div>
                                <ul class="goal-kpis">
                                    {goal.kpi.iter().map(|kpi| view! { <li>{kpi.clone()}</li> }).collect_view()}
                                </ul>
                            </div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
