use leptos::prelude::*;
use tracing::debug;

use super::use_board::BoardStore;
use crate::features::kanban::services::{
    dispatch, DragEvent, DragState, DropTarget, GesturePhase, PointerPosition, PointerSensor,
};
use crate::models::Task;

/// Drag session for the board: pointer gesture tracking plus the drag state
/// machine, wired to the board store.
#[derive(Clone, Copy)]
pub struct DragHook {
    store: BoardStore,
    sensor: PointerSensor,
    phase: RwSignal<GesturePhase>,
    state: RwSignal<DragState>,
    pointer: RwSignal<PointerPosition>,
}

impl DragHook {
    pub fn new(store: BoardStore, sensor: PointerSensor) -> Self {
        Self {
            store,
            sensor,
            phase: RwSignal::new(GesturePhase::Released),
            state: RwSignal::new(DragState::Idle),
            pointer: RwSignal::new(PointerPosition::default()),
        }
    }

    /// Pointer went down on a card's grip.
    pub fn press(&self, task_id: String, at: PointerPosition) {
        let sensor = self.sensor;
        self.phase.update(|phase| sensor.press(phase, task_id, at));
    }

    /// Pointer moved anywhere in the window; `hit` is the drop id under it.
    pub fn motion(&self, at: PointerPosition, hit: Option<String>) {
        let sensor = self.sensor;
        let events = self
            .phase
            .try_update(|phase| sensor.motion(phase, at, hit))
            .unwrap_or_default();
        for event in events {
            self.dispatch(event);
        }
        if self.state.with_untracked(DragState::is_dragging) {
            self.pointer.set(at);
        }
    }

    pub fn release(&self, hit: Option<String>) {
        let sensor = self.sensor;
        if let Some(event) = self.phase.try_update(|phase| sensor.release(phase, hit)).flatten() {
            self.dispatch(event);
        }
    }

    pub fn cancel(&self) {
        let sensor = self.sensor;
        if let Some(event) = self.phase.try_update(|phase| sensor.cancel(phase)).flatten() {
            self.dispatch(event);
        }
    }

    pub fn dispatch(&self, event: DragEvent) {
        let current = self.state.get_untracked();
        let Some(next) = self.store.apply(|board| dispatch(current, event, board)) else {
            debug!("drag event dropped: board store disposed");
            return;
        };
        self.state.maybe_update(|state| {
            if *state == next {
                return false;
            }
            *state = next;
            true
        });
    }

    pub fn is_dragging(&self) -> bool {
        self.state.with(DragState::is_dragging)
    }

    pub fn is_active(&self, task_id: &str) -> bool {
        self.state.with(|state| state.active_id() == Some(task_id))
    }

    /// Whether the pointer currently hovers the column or card with this drop id.
    pub fn is_over(&self, drop_id: &str) -> bool {
        self.state.with(|state| match state.over() {
            Some(DropTarget::Column(id)) | Some(DropTarget::Task(id)) => id == drop_id,
            None => false,
        })
    }

    /// The task being dragged, for the overlay card.
    pub fn active_task(&self) -> Option<Task> {
        let active = self.state.with(|state| state.active_id().map(str::to_string))?;
        self.store.task(&active)
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer.get()
    }
}

/// Drop id of the nearest `data-drop-id` element under the pointer.
pub fn drop_id_at(at: PointerPosition) -> Option<String> {
    let element = document().element_from_point(at.x as f32, at.y as f32)?;
    let target = element.closest("[data-drop-id]").ok().flatten()?;
    target.get_attribute("data-drop-id")
}

pub fn provide_drag(store: BoardStore, sensor: PointerSensor) -> DragHook {
    let drag = DragHook::new(store, sensor);
    provide_context(drag);
    drag
}

pub fn use_drag() -> DragHook {
    expect_context::<DragHook>()
}
