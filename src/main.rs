mod app;
mod core;
mod features;
mod logging;
mod models;
mod pages;

use leptos::prelude::*;

use crate::app::{App, ConfigErrorView};
use crate::core::config::{BoardConfig, DEFAULT_LOG_FILTER};

fn main() {
    console_error_panic_hook::set_once();

    match BoardConfig::embedded() {
        Ok(config) => {
            logging::init(&config.log_filter);
            tracing::info!(
                columns = config.columns.len(),
                tasks = config.tasks.len(),
                "board config loaded"
            );
            leptos::mount::mount_to_body(move || view! { <App config=config /> });
        }
        Err(error) => {
            logging::init(DEFAULT_LOG_FILTER);
            tracing::error!(%error, "invalid board config");
            leptos::mount::mount_to_body(move || view! { <ConfigErrorView error=error /> });
        }
    }
}
