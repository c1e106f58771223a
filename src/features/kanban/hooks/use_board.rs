use leptos::prelude::*;

use crate::models::{Board, Column, Task};

/// Reactive handle on the board. The board itself lives in a signal and is
/// only mutated through its own operations, so every change goes through
/// [`BoardStore::apply`].
#[derive(Clone, Copy)]
pub struct BoardStore {
    board: RwSignal<Board>,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self { board: RwSignal::new(board) }
    }

    /// Runs `op` against the board, notifying subscribers only when the
    /// board's revision moved. `None` once the store has been disposed.
    pub fn apply<R>(&self, op: impl FnOnce(&mut Board) -> R) -> Option<R> {
        self.board.try_maybe_update(|board| {
            let before = board.revision();
            let result = op(board);
            (board.revision() != before, result)
        })
    }

    pub fn columns(&self) -> Vec<Column> {
        self.board.with_untracked(|board| board.columns().to_vec())
    }

    pub fn task(&self, task_id: &str) -> Option<Task> {
        self.board.with(|board| board.task(task_id).cloned())
    }

    pub fn tasks_in_column(&self, column_id: &str) -> Vec<Task> {
        self.board
            .with(|board| board.tasks_in_column(column_id).cloned().collect())
    }

    pub fn task_count(&self, column_id: &str) -> usize {
        self.board.with(|board| board.tasks_in_column(column_id).count())
    }

    pub fn add_task(&self, column_id: &str) -> Option<String> {
        self.apply(|board| board.add_task(column_id))
    }
}

pub fn provide_board(board: Board) -> BoardStore {
    let store = BoardStore::new(board);
    provide_context(store);
    store
}

pub fn use_board() -> BoardStore {
    expect_context::<BoardStore>()
}
