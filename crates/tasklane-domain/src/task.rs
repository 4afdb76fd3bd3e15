use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tasklane_core::{TasklaneError, TasklaneResult};
use uuid::Uuid;

use crate::column::ColumnId;

pub type TaskId = Uuid;
pub type SubtaskId = Uuid;

/// A checklist item owned by a task. Insertion order is display and
/// completion order; there is no independent lifecycle outside the task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    #[serde(default = "Uuid::new_v4")]
    pub id: SubtaskId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Subtask {
    pub fn new(text: impl Into<String>) -> TasklaneResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(TasklaneError::Validation(
                "subtask text must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// A unit of work belonging to exactly one column. The id is stable across
/// moves and edits. Field defaults keep tasks from older or hand-edited
/// documents loadable; unknown columns fall back to Not Started and are
/// corrected against list membership on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default = "Uuid::new_v4")]
    pub id: TaskId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub column_id: ColumnId,
}

impl Task {
    /// Create a task for a column. Blank titles are rejected here, at the
    /// authoring boundary, so the board store never sees them.
    pub fn new(column_id: ColumnId, title: impl Into<String>) -> TasklaneResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TasklaneError::Validation(
                "task title must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            due_date: None,
            subtasks: Vec::new(),
            column_id,
        })
    }

    pub fn update_title(&mut self, title: impl Into<String>) -> TasklaneResult<()> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TasklaneError::Validation(
                "task title must not be empty".to_string(),
            ));
        }
        self.title = title;
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
    }

    pub fn add_subtask(&mut self, subtask: Subtask) {
        self.subtasks.push(subtask);
    }

    pub fn remove_subtask(&mut self, subtask_id: SubtaskId) -> bool {
        let before = self.subtasks.len();
        self.subtasks.retain(|subtask| subtask.id != subtask_id);
        self.subtasks.len() != before
    }

    /// Flip the completion flag of the named subtask. Returns false when
    /// the subtask is not part of this task.
    pub fn toggle_subtask(&mut self, subtask_id: SubtaskId) -> bool {
        if let Some(subtask) = self.subtasks.iter_mut().find(|s| s.id == subtask_id) {
            subtask.toggle();
            true
        } else {
            false
        }
    }
}
