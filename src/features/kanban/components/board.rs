use leptos::prelude::*;

use super::{DragOverlay, KanbanColumn};
use crate::features::kanban::hooks::{use_board, use_drag};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_board();
    let drag = use_drag();

    view! {
        <div class="kanban-board" class:drag-active=move || drag.is_dragging()>
            {store
                .columns()
                .into_iter()
                .map(|column| view! { <KanbanColumn column=column /> })
                .collect_view()}
        </div>
        <DragOverlay />
    }
}
