//! Bridge Admin Frontend Entry Point

mod api;
mod app;
mod backup;
mod components;
mod config;
mod dom;
mod error;
mod logging;
mod models;
mod node_data;
mod notify;
mod orders;
mod product_actions;
mod store;
mod sync;

use app::App;
use config::BridgeConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = BridgeConfig::from_document().unwrap_or_else(|err| {
        log::warn!("falling back to default config: {}", err);
        BridgeConfig::default()
    });
    log::set_max_level(config.log_level);
    log::info!("bridge admin starting, variant {:?}", config.tree_variant);

    mount_to_body(move || view! { <App config=config /> });
}
