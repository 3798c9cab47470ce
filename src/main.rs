//! Chart Grid Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod layout;
mod logger;
mod models;
mod schedule;
mod visibility;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

/// Inline `<script type="application/json">` holding the widget config
const CONFIG_ELEMENT_ID: &str = "chart-grid-config";

/// Read the page's inline config, falling back to defaults
fn load_config() -> WidgetConfig {
    let json = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match json {
        Some(json) => WidgetConfig::from_json(&json).unwrap_or_else(|e| {
            logger::init(log::LevelFilter::Info);
            log::warn!("[APP] {}; using default config", e);
            WidgetConfig::default()
        }),
        None => WidgetConfig::default(),
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let config = load_config();
    logger::init(config.level_filter());
    mount_to_body(move || view! { <App config=config.clone() /> });
}
