use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::models::{Board, Column, Task, TaskTemplate};

const EMBEDDED_CONFIG: &str = include_str!("../../board.json");

pub const DEFAULT_LOG_FILTER: &str = "kanban_board=info";
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 8.0;

fn default_title() -> String {
    "Project Board".to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_activation_distance() -> f64 {
    DEFAULT_ACTIVATION_DISTANCE
}

/// Static board setup: columns, seed tasks and the knobs around them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Pointer travel in CSS pixels before a press on a card turns into a drag.
    #[serde(default = "default_activation_distance")]
    pub activation_distance: f64,
    #[serde(default)]
    pub new_task: TaskTemplate,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl BoardConfig {
    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(ConfigError::InvalidActivationDistance(self.activation_distance));
        }

        let mut column_ids = HashSet::new();
        for column in &self.columns {
            if !column_ids.insert(column.id.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.id.clone()));
            }
        }

        let mut task_ids = HashSet::new();
        for task in &self.tasks {
            if !task_ids.insert(task.id.as_str()) {
                return Err(ConfigError::DuplicateTask(task.id.clone()));
            }
            if !column_ids.contains(task.column_id.as_str()) {
                return Err(ConfigError::UnknownColumn {
                    task_id: task.id.clone(),
                    column_id: task.column_id.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn into_board(self) -> Board {
        Board::new(self.columns, self.tasks, self.new_task)
    }
}
