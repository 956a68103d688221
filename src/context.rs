//! Application Context
//!
//! Shared view switches and seed data provided via Leptos Context API.

use std::sync::Arc;
use leptos::prelude::*;
use roadmap_core::view_state::{DataMode, ViewMode};
use roadmap_core::Catalogue;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Roadmap or dashboard - read
    pub view: ReadSignal<ViewMode>,
    /// Roadmap or dashboard - write
    set_view: WriteSignal<ViewMode>,
    /// Expectation or reality numbers - read
    pub data_mode: ReadSignal<DataMode>,
    /// Expectation or reality numbers - write
    set_data_mode: WriteSignal<DataMode>,
    /// Seed catalogue (projection dataset, goals, expectation totals)
    catalogue: StoredValue<Arc<Catalogue>>,
}

impl AppContext {
    pub fn new(
        view: (ReadSignal<ViewMode>, WriteSignal<ViewMode>),
        data_mode: (ReadSignal<DataMode>, WriteSignal<DataMode>),
        catalogue: Arc<Catalogue>,
    ) -> Self {
        Self {
            view: view.0,
            set_view: view.1,
            data_mode: data_mode.0,
            set_data_mode: data_mode.1,
            catalogue: StoredValue::new(catalogue),
        }
    }

    pub fn show(&self, view: ViewMode) {
        self.set_view.set(view);
    }

    pub fn set_data_mode(&self, mode: DataMode) {
        self.set_data_mode.set(mode);
    }

    pub fn catalogue(&self) -> Arc<Catalogue> {
        self.catalogue.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
