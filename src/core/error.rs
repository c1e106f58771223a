use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse board config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("board config defines no columns")]
    NoColumns,

    #[error("duplicate column id `{0}`")]
    DuplicateColumn(String),

    #[error("duplicate task id `{0}`")]
    DuplicateTask(String),

    #[error("task `{task_id}` references unknown column `{column_id}`")]
    UnknownColumn { task_id: String, column_id: String },

    #[error("activation distance must be a non-negative number, got {0}")]
    InvalidActivationDistance(f64),
}
