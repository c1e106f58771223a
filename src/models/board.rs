use tracing::debug;

use super::{Column, Task, TaskIdGenerator, TaskTemplate};

/// The whole board: the fixed columns plus the ordered task sequence.
///
/// Sequence order is render order within each column and is what
/// [`Board::reorder_task`] rearranges. Columns do not own their tasks; a task
/// belongs to whichever column its `column_id` names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    template: TaskTemplate,
    ids: TaskIdGenerator,
    revision: u64,
}

impl Board {
    pub fn new(columns: Vec<Column>, tasks: Vec<Task>, template: TaskTemplate) -> Self {
        Self {
            columns,
            tasks,
            template,
            ids: TaskIdGenerator::default(),
            revision: 0,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Every task in board order, across columns.
    #[cfg(test)]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    fn position(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }

    /// Bumped on every mutation that actually changed something.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Tasks of one column in sequence order. Evaluated lazily on each call.
    pub fn tasks_in_column<'a>(&'a self, column_id: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| t.column_id == column_id)
    }

    /// Appends a placeholder task to `column_id` and returns its id.
    ///
    /// The column is not checked; passing an unknown id leaves an orphaned task.
    pub fn add_task(&mut self, column_id: &str) -> String {
        let tasks = &self.tasks;
        let id = self.ids.next_id(|candidate| tasks.iter().any(|t| t.id == candidate));
        self.tasks.push(self.template.instantiate(id.clone(), column_id.to_string()));
        self.revision += 1;
        debug!(task_id = %id, column_id, "task added");
        id
    }

    /// Reassigns a task's column without touching its sequence position.
    /// Returns whether anything changed.
    pub fn move_task_to_column(&mut self, task_id: &str, column_id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            debug!(task_id, "move ignored: unknown task");
            return false;
        };
        if task.column_id == column_id {
            return false;
        }
        debug!(task_id, from = %task.column_id, to = column_id, "task moved to column");
        task.column_id = column_id.to_string();
        self.revision += 1;
        true
    }

    /// Moves `task_id` to the sequence slot `target_task_id` occupied before
    /// the move, adopting the target's column. Returns whether anything changed.
    pub fn reorder_task(&mut self, task_id: &str, target_task_id: &str) -> bool {
        if task_id == target_task_id {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(task_id), self.position(target_task_id)) else {
            debug!(task_id, target_task_id, "reorder ignored: unknown task");
            return false;
        };
        if from == to {
            return false;
        }

        let target_column = self.tasks[to].column_id.clone();
        let mut task = self.tasks.remove(from);
        task.column_id = target_column;
        self.tasks.insert(to, task);
        self.revision += 1;
        debug!(task_id, target_task_id, from, to, "task reordered");
        true
    }
}

#[cfg(test)]
pub(crate) fn seed_board() -> Board {
    crate::core::config::BoardConfig::embedded()
        .expect("embedded board config is valid")
        .into_board()
}
