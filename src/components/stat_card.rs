//! Stat Card Component
//!
//! One summary metric with its day/value input row in reality mode.

use leptos::prelude::*;
use roadmap_core::domain::{MetricKey, MetricTotals};
use roadmap_core::format::format_metric;
use roadmap_core::input::MetricForm;
use roadmap_core::view_state::DataMode;

use crate::context::use_app_context;
use crate::store::{store_add_metric, use_app_store};

/// Static text of a stat card
pub struct StatCardInfo {
    pub key: MetricKey,
    pub label: &'static str,
    pub expectation_sub: &'static str,
    pub reality_sub: &'static str,
}

pub const STAT_CARDS: &[StatCardInfo] = &[
    StatCardInfo {
        key: MetricKey::Visits,
        label: "Total Visits",
        expectation_sub: "+12% vs yesterday",
        reality_sub: "Live Traffic",
    },
    StatCardInfo {
        key: MetricKey::Connects,
        label: "Wallet Connects",
        expectation_sub: "11.2% Conversion",
        reality_sub: "On-chain interactions",
    },
    StatCardInfo {
        key: MetricKey::Actions,
        label: "First Actions",
        expectation_sub: "47% from Connect",
        reality_sub: "Conversions",
    },
    StatCardInfo {
        key: MetricKey::Tvl,
        label: "Estimated TVL",
        expectation_sub: "Goal: $500k",
        reality_sub: "Goal: $500k",
    },
];

#[component]
pub fn StatCard(
    info: &'static StatCardInfo,
    #[prop(into)] totals: Signal<MetricTotals>,
    form: RwSignal<MetricForm>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let key = info.key;
    let reality = move || ctx.data_mode.get() == DataMode::Reality;

    // `update` always notifies, so rejected keystrokes snap back to the stored text
    let on_day = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| {
            f.set_day(key, &text);
        });
    };
    let on_value = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| {
            f.set_value(key, &text);
        });
    };
    let on_add = move |_| {
        let mut submission = None;
        form.update(|f| submission = f.submit(key));
        if let Some(submission) = submission {
            store_add_metric(&store, submission);
        }
    };

    view! {
        <div class=move || if reality() { "stat-card reality" } else { "stat-card" }>
            <div class="stat-label">{info.label}</div>
            <div class="stat-value">{move || format_metric(key, totals.get().get(key))}</div>
            <div class="stat-sub">
                {move || if reality() { info.reality_sub } else { info.expectation_sub }}
            </div>

            <Show when=reality>
                <div class="stat-input">
                    <div class="stat-input-labels">
                        <label>"Day"</label>
                        <label>"Value"</label>
                    </div>
                    <div class="stat-input-row">
                        <input
                            type="text"
                            class="day-input"
                            prop:value=move || form.with(|f| f.draft(key).day.clone())
                            on:input=on_day
                        />
                        <input
                            type="text"
                            class="value-input"
                            placeholder="Add..."
                            prop:value=move || form.with(|f| f.draft(key).value.clone())
                            on:input=on_value
                        />
                        <button class="add-btn" title="Add to Day" on:click=on_add>"+"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
