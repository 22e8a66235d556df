//! ToolsAI Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod formatters;
mod hooks;
mod logger;
mod models;
mod store;

use app::App;
use collection_view::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = ApiConfig::from_env();
    logger::init(config.level_filter());
    log::info!("api base url: {}", config.base_url);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
