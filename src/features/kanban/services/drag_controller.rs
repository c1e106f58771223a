use tracing::debug;

use crate::models::Board;

/// What the pointer is currently hovering during a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Empty area of a column.
    Column(String),
    /// Another card.
    Task(String),
}

impl DropTarget {
    /// Column ids win over task ids when a drop id could name either.
    pub fn resolve(board: &Board, id: &str) -> Option<Self> {
        if board.column(id).is_some() {
            Some(DropTarget::Column(id.to_string()))
        } else if board.task(id).is_some() {
            Some(DropTarget::Task(id.to_string()))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        active: String,
        over: Option<DropTarget>,
    },
}

impl DragState {
    pub fn active_id(&self) -> Option<&str> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { active, .. } => Some(active),
        }
    }

    pub fn over(&self) -> Option<&DropTarget> {
        match self {
            DragState::Dragging { over, .. } => over.as_ref(),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Drag lifecycle events. Target ids are raw drop ids as found under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start { task_id: String, over: Option<String> },
    Over(Option<String>),
    End(Option<String>),
    Cancel,
}

/// Advances the drag state machine by one event, applying board mutations.
///
/// Column changes are applied eagerly while hovering; the sequence reorder is
/// applied once, on drop. A cancel clears the session but keeps any column
/// change already made.
pub fn dispatch(state: DragState, event: DragEvent, board: &mut Board) -> DragState {
    match (state, event) {
        (DragState::Idle, DragEvent::Start { task_id, over }) => {
            if board.task(&task_id).is_none() {
                debug!(task_id = %task_id, "drag start ignored: unknown task");
                return DragState::Idle;
            }
            let over = over.and_then(|id| DropTarget::resolve(board, &id));
            debug!(task_id = %task_id, ?over, "drag started");
            DragState::Dragging { active: task_id, over }
        }

        (DragState::Dragging { active, .. }, DragEvent::Over(target)) => {
            let over = target.and_then(|id| DropTarget::resolve(board, &id));
            if let Some(DropTarget::Column(column_id)) = &over {
                board.move_task_to_column(&active, column_id);
            }
            DragState::Dragging { active, over }
        }

        (DragState::Dragging { active, .. }, DragEvent::End(target)) => {
            match target {
                Some(target_id) if target_id != active && board.task(&target_id).is_some() => {
                    board.reorder_task(&active, &target_id);
                }
                _ => debug!(task_id = %active, "drag ended without a task target"),
            }
            DragState::Idle
        }

        (DragState::Dragging { active, .. }, DragEvent::Cancel) => {
            debug!(task_id = %active, "drag cancelled");
            DragState::Idle
        }

        (state @ DragState::Dragging { .. }, DragEvent::Start { task_id, .. }) => {
            debug!(task_id = %task_id, "drag start ignored: gesture already in progress");
            state
        }

        (DragState::Idle, event) => {
            debug!(?event, "drag event ignored while idle");
            DragState::Idle
        }
    }
}
