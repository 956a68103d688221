//! Reaction Bar Component
//!
//! Client feedback buttons shown while reading a report.

use leptos::prelude::*;
use roadmap_core::domain::Reaction;

fn reaction_title(reaction: Reaction) -> &'static str {
    match reaction {
        Reaction::Happy => "Радостный",
        Reaction::Like => "Палец вверх",
        Reaction::Sad => "Грустный",
    }
}

#[component]
pub fn ReactionBar(
    #[prop(into)] current: Signal<Option<Reaction>>,
    #[prop(into)] on_react: Callback<Reaction>,
) -> impl IntoView {
    view! {
        <div class="reaction-bar">
            <label class="field-label">"Ваша реакция"</label>
            <div class="reaction-buttons">
                {Reaction::ALL.iter().map(|&reaction| {
                    view! {
                        <button
                            class=move || if current.get() == Some(reaction) { "reaction-btn active" } else { "reaction-btn" }
                            title=reaction_title(reaction)
                            on:click=move |_| on_react.run(reaction)
                        >
                            {reaction.emoji()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
