use leptos::prelude::*;

use crate::features::kanban::hooks::use_drag;
use crate::features::kanban::services::PointerPosition;
use crate::models::Task;

// Card content, shared by the in-column card and the drag overlay
#[component]
pub fn TaskCardBody(#[prop(into)] task: Task) -> impl IntoView {
    let description = task.description.clone();
    let initial = task.assignee_initial();
    let assignee = task.assignee.clone().unwrap_or_default();

    view! {
        <div class="task-card-body">
            <h4 class="task-title">{task.title.clone()}</h4>
            {description.map(|text| view! { <p class="task-description">{text}</p> })}
            <div class="task-meta">
                <span class=format!("priority-badge {}", task.priority.css_class())>
                    {task.priority.as_str()}
                </span>
                {initial.map(|c| view! {
                    <span class="assignee-avatar" title=assignee>{c.to_string()}</span>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn TaskCard(#[prop(into)] task: Task) -> impl IntoView {
    let drag = use_drag();

    let active_id = task.id.clone();
    let hover_id = task.id.clone();
    let press_id = task.id.clone();
    let drop_id = task.id.clone();

    view! {
        <div
            class="task-card"
            class:dragging=move || drag.is_active(&active_id)
            class:drop-target=move || drag.is_over(&hover_id)
            data-drop-id=drop_id
        >
            <span
                class="drag-handle"
                title="Drag to move"
                on:pointerdown=move |ev: leptos::ev::PointerEvent| {
                    if ev.button() != 0 {
                        return;
                    }
                    ev.prevent_default();
                    let at = PointerPosition::new(ev.client_x() as f64, ev.client_y() as f64);
                    drag.press(press_id.clone(), at);
                }
            >
                "⋮⋮"
            </span>
            <TaskCardBody task=task />
        </div>
    }
}
