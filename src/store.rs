//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The roadmap and
//! the metrics history are replaced wholesale on every update, so readers
//! only ever see a complete previous or next tree.

use leptos::prelude::*;
use reactive_stores::Store;
use roadmap_core::domain::{ItemPatch, Reaction};
use roadmap_core::input::Submission;
use roadmap_core::view_state::{CardView, CardViews};
use roadmap_core::{Catalogue, MetricsHistory, Roadmap};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Weeks, cards and outcome checklists
    pub roadmap: Roadmap,
    /// Manually entered daily metrics (reality mode)
    pub history: MetricsHistory,
    /// Flip state of each card, keyed by item id
    pub card_views: CardViews,
}

impl AppState {
    pub fn new(catalogue: &Catalogue) -> Self {
        Self {
            roadmap: catalogue.roadmap(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Swap in the roadmap produced by `f`
fn replace_roadmap(store: &AppStore, f: impl FnOnce(&Roadmap) -> Roadmap) {
    let field = store.roadmap();
    let mut roadmap = field.write();
    *roadmap = f(&*roadmap);
}

/// Merge field changes into an item by ID
pub fn store_update_item(store: &AppStore, item_id: &str, patch: &ItemPatch) {
    replace_roadmap(store, |roadmap| roadmap.update_item(item_id, patch));
}

/// Apply a reaction to an item, clearing it when already set
pub fn store_toggle_reaction(store: &AppStore, item_id: &str, reaction: Reaction) {
    replace_roadmap(store, |roadmap| roadmap.toggle_reaction(item_id, reaction));
}

/// Mark a report as delivered, on time or late
pub fn store_submit_report(store: &AppStore, item_id: &str, late: bool) {
    replace_roadmap(store, |roadmap| {
        if late {
            roadmap.submit_late(item_id)
        } else {
            roadmap.submit_on_time(item_id)
        }
    });
}

/// Flip one outcome of one week
pub fn store_toggle_outcome(store: &AppStore, week_id: &str, outcome_id: &str) {
    replace_roadmap(store, |roadmap| roadmap.toggle_outcome(week_id, outcome_id));
}

/// Record a parsed dashboard submission in the history
pub fn store_add_metric(store: &AppStore, submission: Submission) {
    let field = store.history();
    let mut history = field.write();
    *history = history.add_metric(submission.key, submission.day_number, submission.amount);
}

/// Move a card's flip state
pub fn store_update_card_view(store: &AppStore, item_id: &str, f: impl FnOnce(CardView) -> CardView) {
    store.card_views().write().update(item_id, f);
}
