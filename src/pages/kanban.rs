use leptos::ev;
use leptos::prelude::*;

use crate::core::BoardConfig;
use crate::features::kanban::{
    drop_id_at, provide_board, provide_drag, KanbanBoard, KanbanHeader, PointerPosition,
    PointerSensor,
};

fn pointer_position(ev: &ev::PointerEvent) -> PointerPosition {
    PointerPosition::new(ev.client_x() as f64, ev.client_y() as f64)
}

#[component]
pub fn Kanban(config: BoardConfig) -> impl IntoView {
    let title = config.title.clone();
    let subtitle = config.subtitle.clone();
    let sensor = PointerSensor::new(config.activation_distance);

    let store = provide_board(config.into_board());
    let drag = provide_drag(store, sensor);

    // Gesture tracking is window-wide so a drag keeps following the pointer
    // after it leaves the card it started on.
    let on_move = window_event_listener(ev::pointermove, move |ev| {
        let at = pointer_position(&ev);
        let hit = if ev.buttons() != 0 { drop_id_at(at) } else { None };
        drag.motion(at, hit);
    });
    let on_up = window_event_listener(ev::pointerup, move |ev| {
        drag.release(drop_id_at(pointer_position(&ev)));
    });
    let on_cancel = window_event_listener(ev::pointercancel, move |_| drag.cancel());
    let on_key = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            drag.cancel();
        }
    });
    on_cleanup(move || {
        on_move.remove();
        on_up.remove();
        on_cancel.remove();
        on_key.remove();
    });

    view! {
        <div class="kanban-page">
            <KanbanHeader title=title subtitle=subtitle />
            <KanbanBoard />
        </div>
    }
}
