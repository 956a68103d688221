//! Roadmap Card Component
//!
//! Flip card for one item. The front shows the plan; the back edits status
//! and notes (edit mode) or shows the report with reactions (read mode).

use leptos::prelude::*;
use roadmap_core::domain::{ItemPatch, ItemStatus, ItemType, LateTransition, Reaction};
use roadmap_core::view_state::{CardMode, CardView};

use crate::components::{ReactionBar, ReportTimingSelector, StatusSelector};
use crate::components::status_selector::status_class;
use crate::markdown::render_report;
use crate::store::{
    store_submit_report, store_toggle_reaction, store_update_card_view, store_update_item,
    use_app_store, AppStateStoreFields,
};

#[component]
pub fn RoadmapCard(item_id: String) -> impl IntoView {
    let store = use_app_store();

    // Immutable fields are read once
    let Some(initial) = store.roadmap().read_untracked().find_item(&item_id).cloned() else {
        log::warn!("card for unknown item '{}'", item_id);
        return ().into_any();
    };

    let id = StoredValue::new(item_id);
    let item_type = initial.item_type;
    let is_task = item_type == ItemType::Task;
    let is_report = item_type == ItemType::Report;
    let can_flip = item_type.can_flip();

    let fallback = initial.clone();
    let item = Memo::new(move |_| {
        id.with_value(|id| store.roadmap().read().find_item(id).cloned())
            .unwrap_or_else(|| fallback.clone())
    });
    let card = Memo::new(move |_| id.with_value(|id| store.card_views().read().get(id)));
    let mode = Memo::new(move |_| card.get().mode);

    let update = move |patch: ItemPatch| store_update_item(&store, &id.get_value(), &patch);
    let move_card = move |f: fn(CardView, bool) -> CardView| {
        store_update_card_view(&store, &id.get_value(), |view| f(view, can_flip));
    };

    let on_status = Callback::new(move |status: ItemStatus| update(ItemPatch::status(status)));
    let on_timing = Callback::new(move |late: bool| store_submit_report(&store, &id.get_value(), late));
    let on_react = Callback::new(move |reaction: Reaction| {
        store_toggle_reaction(&store, &id.get_value(), reaction)
    });

    let status = Signal::derive(move || item.with(|i| i.status));
    let is_late = Signal::derive(move || item.with(|i| i.is_late));
    let reaction = Signal::derive(move || item.with(|i| i.reaction));
    let late_report = Signal::derive(move || item.with(|i| i.is_late_report()));

    // Front side pieces
    let deadline = initial.deadline.clone().map(|deadline| view! {
        <span class="card-deadline">{deadline}</span>
    });
    let owner = initial.owner_short().map(|owner| owner.to_string()).map(|owner| view! {
        <span class="card-owner">{owner}</span>
    });
    let status_badge = move || {
        if is_report {
            return None;
        }
        let status = status.get();
        status.badge().map(|badge| view! {
            <span class=format!("status-badge {}", status_class(status))>{badge}</span>
        })
    };
    let timing_badge = move || {
        (is_report && status.get() == ItemStatus::Done).then(|| {
            if late_report.get() {
                view! { <span class="status-badge not-done">"Опоздание"</span> }.into_any()
            } else {
                view! { <span class="status-badge done">"Вовремя"</span> }.into_any()
            }
        })
    };
    let view_button = can_flip.then(|| view! {
        <button
            class=move || if item.with(|i| i.report.is_some()) { "view-report-btn has-report" } else { "view-report-btn" }
            title="Читать отчет"
            on:click=move |ev| {
                ev.stop_propagation();
                move_card(CardView::view_report);
            }
        >
            "Отчет"
            {move || reaction.get().map(|r| view! { <span class="reaction-mark">{r.emoji()}</span> })}
        </button>
    });

    // Back side, edit mode
    let (notes_label, notes_placeholder) = if is_report {
        ("Содержание отчета", "Вставьте ссылку на отчет или краткое содержание...")
    } else {
        ("Заметки / Результат", "Комментарий к задаче...")
    };
    let edit_view = move || {
        let timing = is_report.then(|| view! {
            <ReportTimingSelector status=status is_late=is_late on_select=on_timing />
            <Show when=move || late_report.get()>
                <div class="late-duration">
                    <label class="field-label">"На сколько опоздали?"</label>
                    <input
                        type="text"
                        placeholder="Например: 2 дня"
                        prop:value=move || item.with(|i| i.late_duration.clone().unwrap_or_default())
                        on:input=move |ev| update(ItemPatch::late(LateTransition::SetLate {
                            duration: Some(event_target_value(&ev)),
                        }))
                    />
                </div>
            </Show>
        });

        view! {
            {is_task.then(|| view! { <StatusSelector current=status on_change=on_status /> })}
            {timing}
            <div class="field grow">
                <label class="field-label">{notes_label}</label>
                <textarea
                    class="report-textarea"
                    placeholder=notes_placeholder
                    prop:value=move || item.with(|i| i.report.clone().unwrap_or_default())
                    on:input=move |ev| update(ItemPatch::report(event_target_value(&ev)))
                ></textarea>
            </div>
        }
    };

    // Back side, read mode
    let read_view = move || {
        view! {
            <div class="field grow">
                <label class="field-label">"Отчет исполнителя"</label>
                {move || match item.with(|i| i.report.as_deref().map(render_report)) {
                    Some(html) => view! { <div class="report-content" inner_html=html></div> }.into_any(),
                    None => view! { <div class="report-content empty">"Отчет еще не добавлен..."</div> }.into_any(),
                }}
            </div>
            <ReactionBar current=reaction on_react=on_react />
        }
    };

    let back_title = move || match mode.get() {
        CardMode::Read => "Просмотр отчета",
        CardMode::Edit if is_task => "Управление задачей",
        CardMode::Edit => "Метрики отчета",
    };

    view! {
        <div
            class=move || {
                let reading = if card.get().is_reading() { " reading" } else { "" };
                format!("roadmap-card {}{}", item_type.as_str(), reading)
            }
            on:click=move |_| move_card(CardView::click_body)
        >
            <div class=move || if card.get().flipped { "card-inner flipped" } else { "card-inner" }>
                <div class="card-face card-front">
                    <div class="card-top">
                        <span class="card-type">{item_type.label()}</span>
                        {deadline}
                    </div>
                    <h3 class="card-title">{initial.title.clone()}</h3>
                    <p class="card-description">{initial.description.clone()}</p>
                    <div class="card-bottom">
                        {owner}
                        {view_button}
                        <div class="card-badges">
                            {status_badge}
                            {timing_badge}
                        </div>
                    </div>
                </div>

                <div class="card-face card-back" on:click=|ev| ev.stop_propagation()>
                    <div class="card-back-header">
                        <span>{back_title}</span>
                        <button
                            class="close-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                store_update_card_view(&store, &id.get_value(), CardView::close);
                            }
                        >
                            "↺"
                        </button>
                    </div>
                    <div class="card-back-body">
                        {move || match mode.get() {
                            CardMode::Edit => edit_view().into_any(),
                            CardMode::Read => read_view().into_any(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
    .into_any()
}
