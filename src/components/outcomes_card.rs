//! Outcomes Card Component
//!
//! Week checklist: progress on the front, toggles on the back.

use leptos::prelude::*;
use roadmap_core::view_state::OutcomesView;

use crate::store::{store_toggle_outcome, use_app_store, AppStateStoreFields};

#[component]
pub fn OutcomesCard(week_id: String) -> impl IntoView {
    let store = use_app_store();
    let id = StoredValue::new(week_id);
    let (flip, set_flip) = signal(OutcomesView::default());

    let outcomes = Memo::new(move |_| {
        id.with_value(|id| {
            store
                .roadmap()
                .read()
                .week(id)
                .map(|week| week.outcomes.clone())
                .unwrap_or_default()
        })
    });
    // Derived on every change, never stored
    let progress = Memo::new(move |_| {
        id.with_value(|id| {
            store
                .roadmap()
                .read()
                .week(id)
                .map(|week| (week.completed_outcomes(), week.outcomes.len(), week.completion_percent()))
                .unwrap_or((0, 0, 0.0))
        })
    });

    view! {
        <div class="outcomes-card" on:click=move |_| set_flip.update(|v| *v = v.click_body())>
            <div class=move || if flip.get().flipped { "card-inner flipped" } else { "card-inner" }>
                <div class="card-face card-front">
                    <div class="card-top">
                        <span class="card-type">"Итоги недели"</span>
                        <span class="outcomes-count">
                            {move || {
                                let (done, total, _) = progress.get();
                                format!("{} / {}", done, total)
                            }}
                        </span>
                    </div>
                    <ul class="outcomes-list">
                        <For
                            each=move || outcomes.get()
                            key=|outcome| (outcome.id.clone(), outcome.is_completed)
                            children=move |outcome| view! {
                                <li class=if outcome.is_completed { "outcome done" } else { "outcome" }>
                                    {outcome.text}
                                </li>
                            }
                        />
                    </ul>
                    <div class="progress-track">
                        <div class="progress-fill" style=move || format!("width: {}%;", progress.get().2)></div>
                    </div>
                </div>

                <div class="card-face card-back" on:click=|ev| ev.stop_propagation()>
                    <div class="card-back-header">
                        <span>"Чеклист итогов"</span>
                        <button
                            class="close-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_flip.update(|v| *v = v.close());
                            }
                        >
                            "↺"
                        </button>
                    </div>
                    <div class="card-back-body">
                        <For
                            each=move || outcomes.get()
                            key=|outcome| (outcome.id.clone(), outcome.is_completed)
                            children=move |outcome| {
                                let outcome_id = outcome.id.clone();
                                view! {
                                    <div
                                        class=if outcome.is_completed { "checklist-row done" } else { "checklist-row" }
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            id.with_value(|week_id| store_toggle_outcome(&store, week_id, &outcome_id));
                                        }
                                    >
                                        <span class="checkbox">{if outcome.is_completed { "✓" } else { "" }}</span>
                                        <span class="checklist-text">{outcome.text}</span>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
