use leptos::prelude::*;

use super::TaskCard;
use crate::features::kanban::hooks::{use_board, use_drag};
use crate::models::Column;

#[component]
pub fn KanbanColumn(#[prop(into)] column: Column) -> impl IntoView {
    let store = use_board();
    let drag = use_drag();

    let column_id = column.id.clone();
    let count_id = column.id.clone();
    let tasks_id = column.id.clone();
    let hover_id = column.id.clone();

    view! {
        <div
            class="kanban-column"
            class:drop-target=move || drag.is_over(&hover_id)
            data-drop-id=column.id.clone()
        >
            <div class=format!("column-header {}", column.color.css_class())>
                <h3>{column.title.clone()}</h3>
                <span class="task-count">{move || store.task_count(&count_id)}</span>
            </div>
            <div class="column-content">
                <button
                    class="btn-secondary add-task-btn"
                    on:click=move |_| {
                        store.add_task(&column_id);
                    }
                >
                    "+ Add task"
                </button>
                <div class="column-tasks">
                    <For
                        each=move || store.tasks_in_column(&tasks_id)
                        key=|task| task.id.clone()
                        let:task
                    >
                        <TaskCard task=task />
                    </For>
                </div>
            </div>
        </div>
    }
}
