//! Launch Roadmap Frontend Entry Point

mod context;
mod store;
mod components;
mod app;
mod markdown;

use app::App;
use leptos::prelude::*;

/// Console verbosity; `Debug` prints every state transition
const LOG_LEVEL: log::Level = log::Level::Info;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", e).into());
    }
    mount_to_body(App);
}
