//! Motion To-Do Frontend Entry Point

mod app;
mod class_names;
mod components;
mod config;
mod context;
mod layout;
mod motion;
mod presence;
mod store;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;
use tracing::Level;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    let logger = match rolling_logger::init_logger("MotionTodo", level, rolling_logger::DEFAULT_CAPACITY) {
        Ok(handle) => Some(handle),
        Err(e) => {
            web_sys::console::warn_1(&format!("logger not installed: {}", e).into());
            None
        }
    };

    let config = WidgetConfig::load();
    mount_to_body(move || view! { <App config=config.clone() logger=logger.clone() /> });
}
