//! Week Row Component
//!
//! One week: header, a card per item, and the outcomes card.

use std::sync::Arc;
use leptos::prelude::*;
use roadmap_core::domain::Week;

use crate::components::{OutcomesCard, RoadmapCard};

#[component]
pub fn WeekRow(week: Arc<Week>) -> impl IntoView {
    let week_id = week.id.clone();
    let has_outcomes = !week.outcomes.is_empty();

    view! {
        <section class="week-row">
            <div class="week-header">
                <h2 class="week-title">{week.title.clone()}</h2>
                <p class="week-subtitle">{week.subtitle.clone()}</p>
            </div>

            <div class="week-grid">
                {week.items.iter().map(|item| view! {
                    <RoadmapCard item_id=item.id.clone() />
                }).collect_view()}

                {has_outcomes.then(|| view! { <OutcomesCard week_id=week_id /> })}
            </div>
        </section>
    }
}
