//! Status Selector Components
//!
//! Button rows on the back of task and report cards.

use leptos::prelude::*;
use roadmap_core::domain::ItemStatus;

/// Task status options
pub const TASK_STATUSES: &[(ItemStatus, &str)] = &[
    (ItemStatus::InProgress, "В процессе"),
    (ItemStatus::Done, "Готово"),
    (ItemStatus::NotDone, "Отмена"),
];

/// CSS modifier for a status
pub fn status_class(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::ToDo => "todo",
        ItemStatus::InProgress => "in-progress",
        ItemStatus::Done => "done",
        ItemStatus::NotDone => "not-done",
    }
}

/// Status buttons for tasks
#[component]
pub fn StatusSelector(
    #[prop(into)] current: Signal<ItemStatus>,
    #[prop(into)] on_change: Callback<ItemStatus>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">"Статус"</label>
            <div class="status-selector">
                {TASK_STATUSES.iter().map(|&(status, label)| {
                    let is_selected = move || current.get() == status;
                    view! {
                        <button
                            class=move || if is_selected() {
                                format!("status-btn {} active", status_class(status))
                            } else {
                                "status-btn".to_string()
                            }
                            on:click=move |_| on_change.run(status)
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// On-time / late buttons for reports; `on_select` receives "late"
#[component]
pub fn ReportTimingSelector(
    #[prop(into)] status: Signal<ItemStatus>,
    #[prop(into)] is_late: Signal<bool>,
    #[prop(into)] on_select: Callback<bool>,
) -> impl IntoView {
    let done = move || status.get() == ItemStatus::Done;

    view! {
        <div class="field">
            <label class="field-label">"Статус сдачи"</label>
            <div class="status-selector">
                <button
                    class=move || if done() && !is_late.get() { "status-btn done active" } else { "status-btn" }
                    on:click=move |_| on_select.run(false)
                >
                    "Вовремя"
                </button>
                <button
                    class=move || if done() && is_late.get() { "status-btn not-done active" } else { "status-btn" }
                    on:click=move |_| on_select.run(true)
                >
                    "С опозданием"
                </button>
            </div>
        </div>
    }
}
