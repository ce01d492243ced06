//! To-Do Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod enhance;
mod logger;
mod rows;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(logger::default_level());

    let config = config::load();

    // Server-rendered list: wire its buttons instead of mounting the app
    if enhance::HostMode::detect() == enhance::HostMode::ServerRendered {
        if let Err(e) = enhance::bind(config) {
            log::error!("[APP] Could not bind server-rendered rows: {}", e);
        }
        return;
    }

    mount_to_body(move || view! { <App config=config /> });
}
