use leptos::prelude::*;

use crate::core::{BoardConfig, ConfigError};
use crate::pages::Kanban;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    view! {
        <main class="app">
            <Kanban config=config />
        </main>
    }
}

/// Rendered instead of the board when the embedded configuration is unusable.
#[component]
pub fn ConfigErrorView(error: ConfigError) -> impl IntoView {
    view! {
        <main class="app">
            <div class="config-error">
                <h1>"Board unavailable"</h1>
                <p>{error.to_string()}</p>
            </div>
        </main>
    }
}
