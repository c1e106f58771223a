use leptos::prelude::*;

use super::TaskCardBody;
use crate::features::kanban::hooks::use_drag;

/// Floating copy of the dragged card that follows the pointer.
#[component]
pub fn DragOverlay() -> impl IntoView {
    let drag = use_drag();

    move || {
        drag.active_task().map(|task| {
            view! {
                <div
                    class="task-card drag-overlay"
                    style:left=move || format!("{}px", drag.pointer().x)
                    style:top=move || format!("{}px", drag.pointer().y)
                >
                    <TaskCardBody task=task />
                </div>
            }
        })
    }
}
