pub mod board;
pub mod column;
pub mod drag_overlay;
pub mod header;
pub mod task_card;

pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use drag_overlay::DragOverlay;
pub use header::KanbanHeader;
pub use task_card::{TaskCard, TaskCardBody};
