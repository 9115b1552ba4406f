use leptos::{mount_to_body, view};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::ConsoleConfig;
use crate::domain::logging::LogComponent;
use crate::domain::order_book::ORDER_SNAPSHOTS;

pub mod macros;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod format_utils;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

pub const PAGE_TITLE: &str = "Factor Dynamics";

/// Wires logging and the clock, checks the fixtures and mounts the page.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = ConsoleConfig::default();
    domain::logging::init_logger(Box::new(infrastructure::ConsoleLogger::new(config.min_log_level)));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider::new()));

    for snapshot in &ORDER_SNAPSHOTS {
        if let Err(e) = snapshot.validate() {
            log_error!(LogComponent::Domain("Fixtures"), "{}", e);
        }
    }

    gloo::utils::document().set_title(PAGE_TITLE);

    log_info!(
        LogComponent::Presentation("Initialize"),
        "🚀 Signal console mounting with {} snapshots",
        ORDER_SNAPSHOTS.len()
    );

    mount_to_body(move || view! { <App config=config /> });
}
