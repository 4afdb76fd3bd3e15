use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tasklane_core::TasklaneError;

use crate::task::{Task, TaskId};

/// The four fixed column buckets. Columns are never created or destroyed
/// at runtime; their order is fixed for rendering and default placement.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnId {
    #[default]
    #[serde(rename = "notStarted")]
    NotStarted,
    #[serde(rename = "inProgress")]
    InProgress,
    #[serde(rename = "blocked")]
    Blocked,
    #[serde(rename = "done")]
    Done,
}

impl ColumnId {
    pub const ALL: [ColumnId; 4] = [
        ColumnId::NotStarted,
        ColumnId::InProgress,
        ColumnId::Blocked,
        ColumnId::Done,
    ];

    /// Wire name, matching the stored document keys.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnId::NotStarted => "notStarted",
            ColumnId::InProgress => "inProgress",
            ColumnId::Blocked => "blocked",
            ColumnId::Done => "done",
        }
    }

    /// Display label for the column.
    pub fn title(self) -> &'static str {
        match self {
            ColumnId::NotStarted => "Not Started",
            ColumnId::InProgress => "In Progress",
            ColumnId::Blocked => "Blocked",
            ColumnId::Done => "Done",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = TasklaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| TasklaneError::Validation(format!("unknown column id: {s}")))
    }
}

/// One of the four task buckets. Tasks are `Arc`-shared so a board
/// snapshot and its successor share every task the mutation did not touch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub id: ColumnId,
    #[serde(default)]
    pub title: String,
    pub tasks: Vec<Arc<Task>>,
}

impl Column {
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn task_index(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == task_id)
    }

    pub fn contains_task(&self, task_id: TaskId) -> bool {
        self.task_index(task_id).is_some()
    }
}
