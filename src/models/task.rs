use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Priority::Low => "priority-low",
            Priority::Medium => "priority-medium",
            Priority::High => "priority-high",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assignee: Option<String>,
    pub column_id: String,
}

impl Task {
    /// First character of the assignee, shown in the avatar bubble.
    pub fn assignee_initial(&self) -> Option<char> {
        self.assignee.as_deref().and_then(|name| name.chars().next())
    }
}

/// Placeholder field values for tasks created from the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskTemplate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assignee: Option<String>,
}

impl Default for TaskTemplate {
    fn default() -> Self {
        Self {
            title: "New task".to_string(),
            description: Some("Click to edit the task description".to_string()),
            priority: Priority::Medium,
            assignee: Some("Unassigned".to_string()),
        }
    }
}

impl TaskTemplate {
    pub fn instantiate(&self, id: String, column_id: String) -> Task {
        Task {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            assignee: self.assignee.clone(),
            column_id,
        }
    }
}

/// Millisecond-clock task ids, bumped forward so two tasks created within the
/// same millisecond (or a clock step backwards) still get distinct ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskIdGenerator {
    last: i64,
}

impl TaskIdGenerator {
    pub fn next_id(&mut self, is_taken: impl Fn(&str) -> bool) -> String {
        self.next_id_at(Utc::now().timestamp_millis(), is_taken)
    }

    pub fn next_id_at(&mut self, now_millis: i64, is_taken: impl Fn(&str) -> bool) -> String {
        let mut candidate = now_millis.max(self.last + 1);
        while is_taken(&candidate.to_string()) {
            candidate += 1;
        }
        self.last = candidate;
        candidate.to_string()
    }
}
