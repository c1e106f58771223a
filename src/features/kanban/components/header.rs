use leptos::prelude::*;

#[component]
pub fn KanbanHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <div class="kanban-header-left">
                <h1>{title}</h1>
                {subtitle.map(|text| view! { <p class="kanban-subtitle">{text}</p> })}
            </div>
        </header>
    }
}
