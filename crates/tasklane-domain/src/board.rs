//! The board aggregate and its mutation mechanics.
//!
//! The board holds the four fixed columns; the ordered position of a task
//! within its column's list is the only ordering signal. Two invariants
//! hold for every reachable board: a task's `column_id` equals the id of
//! the column physically holding it, and each task id appears in exactly
//! one column.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::column::{Column, ColumnId};
use crate::task::{Subtask, SubtaskId, Task, TaskId};

/// Where a moved task lands in the destination list. This is the
/// drop-position union passed to the move operation: a specific task to
/// land in front of, an explicit index, or the end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Before(TaskId),
    Index(usize),
    End,
}

/// The complete board: all four columns, always present. Serializes to a
/// map of the four column wire names, matching the stored document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    not_started: Column,
    in_progress: Column,
    blocked: Column,
    done: Column,
}

impl Board {
    /// An empty board with all four columns.
    pub fn new() -> Self {
        Self {
            not_started: Column::new(ColumnId::NotStarted),
            in_progress: Column::new(ColumnId::InProgress),
            blocked: Column::new(ColumnId::Blocked),
            done: Column::new(ColumnId::Done),
        }
    }

    /// The factory-default board used whenever no stored board is usable:
    /// a fixed set of example tasks spread across the four columns.
    pub fn seed() -> Self {
        let now = Utc::now();
        let mut board = Self::new();

        board.not_started.tasks.push(Arc::new(Task {
            id: Uuid::new_v4(),
            title: "Grocery Shopping".to_string(),
            description: Some("Buy milk, eggs, bread, and cheese.".to_string()),
            due_date: Some(now + Duration::days(2)),
            subtasks: vec![
                Subtask {
                    id: Uuid::new_v4(),
                    text: "Buy Milk".to_string(),
                    completed: false,
                },
                Subtask {
                    id: Uuid::new_v4(),
                    text: "Buy Eggs".to_string(),
                    completed: true,
                },
            ],
            column_id: ColumnId::NotStarted,
        }));
        board.not_started.tasks.push(Arc::new(Task {
            id: Uuid::new_v4(),
            title: "Book Doctor Appointment".to_string(),
            description: Some("Annual check-up.".to_string()),
            due_date: None,
            subtasks: Vec::new(),
            column_id: ColumnId::NotStarted,
        }));
        board.in_progress.tasks.push(Arc::new(Task {
            id: Uuid::new_v4(),
            title: "Develop Kanban Feature".to_string(),
            description: Some("Implement drag and drop functionality.".to_string()),
            due_date: Some(now),
            subtasks: Vec::new(),
            column_id: ColumnId::InProgress,
        }));
        board.blocked.tasks.push(Arc::new(Task {
            id: Uuid::new_v4(),
            title: "Taxes".to_string(),
            description: Some("File annual tax returns.".to_string()),
            due_date: Some(now - Duration::days(5)),
            subtasks: vec![
                Subtask {
                    id: Uuid::new_v4(),
                    text: "Collect W2 forms".to_string(),
                    completed: true,
                },
                Subtask {
                    id: Uuid::new_v4(),
                    text: "Find accountant".to_string(),
                    completed: false,
                },
                Subtask {
                    id: Uuid::new_v4(),
                    text: "Submit forms".to_string(),
                    completed: false,
                },
            ],
            column_id: ColumnId::Blocked,
        }));
        board.done.tasks.push(Arc::new(Task {
            id: Uuid::new_v4(),
            title: "Deploy Project v1.0".to_string(),
            description: Some("Push to production server.".to_string()),
            due_date: None,
            subtasks: Vec::new(),
            column_id: ColumnId::Done,
        }));

        board
    }

    /// Shape check for a freshly deserialized document: all four column
    /// keys present, each with a list-shaped `tasks` field. Individual
    /// task fields are not checked; they load leniently with defaults.
    /// A document failing this check is discarded wholesale.
    pub fn validate(value: &Value) -> bool {
        ColumnId::ALL.iter().all(|column_id| {
            value
                .get(column_id.as_str())
                .and_then(|column| column.get("tasks"))
                .map(Value::is_array)
                .unwrap_or(false)
        })
    }

    /// Repair a loaded board so the column-membership invariants hold:
    /// column slots get their fixed id (and a title when blank), every
    /// task's `column_id` is forced to its containing column, and a task
    /// id appearing in more than one column keeps only its first
    /// occurrence in column order.
    pub fn normalize(&mut self) {
        let mut seen: HashSet<TaskId> = HashSet::new();
        for column_id in ColumnId::ALL {
            let column = self.column_mut(column_id);
            column.id = column_id;
            if column.title.trim().is_empty() {
                column.title = column_id.title().to_string();
            }
            column.tasks.retain(|task| seen.insert(task.id));
            for task in &mut column.tasks {
                if task.column_id != column_id {
                    Arc::make_mut(task).column_id = column_id;
                }
            }
        }
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        match id {
            ColumnId::NotStarted => &self.not_started,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Blocked => &self.blocked,
            ColumnId::Done => &self.done,
        }
    }

    fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        match id {
            ColumnId::NotStarted => &mut self.not_started,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Blocked => &mut self.blocked,
            ColumnId::Done => &mut self.done,
        }
    }

    /// All columns in their fixed display order.
    pub fn columns(&self) -> [&Column; 4] {
        [&self.not_started, &self.in_progress, &self.blocked, &self.done]
    }

    /// Find which column holds a task and at what index.
    pub fn locate_task(&self, task_id: TaskId) -> Option<(ColumnId, usize)> {
        for column_id in ColumnId::ALL {
            if let Some(index) = self.column(column_id).task_index(task_id) {
                return Some((column_id, index));
            }
        }
        None
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Arc<Task>> {
        let (column_id, index) = self.locate_task(task_id)?;
        Some(&self.column(column_id).tasks[index])
    }

    /// All tasks across all columns, in column then list order.
    pub fn tasks(&self) -> impl Iterator<Item = &Arc<Task>> {
        self.columns().into_iter().flat_map(|column| column.tasks.iter())
    }

    /// Insert-or-replace a task in the column named by its `column_id`.
    /// Serves both create and edit, including edits that change column:
    /// already in the target column means replace in place (position
    /// preserved); anywhere else means remove there and append to the
    /// target; absent means append.
    pub fn upsert_task(&mut self, task: Task) {
        let target = task.column_id;
        if let Some(index) = self.column(target).task_index(task.id) {
            self.column_mut(target).tasks[index] = Arc::new(task);
            return;
        }
        self.remove_task(task.id);
        self.column_mut(target).tasks.push(Arc::new(task));
    }

    /// Remove a task from whichever column holds it. Returns the removed
    /// task, or `None` when no column holds it.
    pub fn remove_task(&mut self, task_id: TaskId) -> Option<Arc<Task>> {
        for column_id in ColumnId::ALL {
            let column = self.column_mut(column_id);
            if let Some(index) = column.task_index(task_id) {
                return Some(column.tasks.remove(index));
            }
        }
        None
    }

    /// Flip the completion flag of a subtask. Returns false (unchanged
    /// board) when either id is unknown.
    pub fn toggle_subtask(&mut self, task_id: TaskId, subtask_id: SubtaskId) -> bool {
        let Some((column_id, index)) = self.locate_task(task_id) else {
            return false;
        };
        let task = Arc::make_mut(&mut self.column_mut(column_id).tasks[index]);
        task.toggle_subtask(subtask_id)
    }

    /// Move a task to a destination column and position, updating its
    /// `column_id` to match. Within a single column this is the stable
    /// reorder of [`Board::reorder_task`]. A `Before` target not found in
    /// the destination falls back to appending, as does an out-of-range
    /// index. Returns false when nothing changed.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        destination: ColumnId,
        position: InsertPosition,
    ) -> bool {
        let Some((source, _)) = self.locate_task(task_id) else {
            return false;
        };
        if source == destination {
            return self.reorder_task(destination, task_id, position);
        }

        let Some(mut task) = self.remove_task(task_id) else {
            return false;
        };
        Arc::make_mut(&mut task).column_id = destination;

        let column = self.column_mut(destination);
        let index = match position {
            InsertPosition::Before(dest) => {
                column.task_index(dest).unwrap_or(column.tasks.len())
            }
            InsertPosition::Index(index) => index.min(column.tasks.len()),
            InsertPosition::End => column.tasks.len(),
        };
        column.tasks.insert(index, task);
        true
    }

    /// Stable reorder within one column: the task ends up immediately
    /// preceding the `Before` target (or at the last position for `End`),
    /// with all other tasks keeping their relative order. No-ops, returning
    /// false: the task is not in this column, the target task is not in
    /// this column, the task is its own target, or the order is unchanged.
    pub fn reorder_task(
        &mut self,
        column_id: ColumnId,
        task_id: TaskId,
        position: InsertPosition,
    ) -> bool {
        if let InsertPosition::Before(dest) = position {
            if dest == task_id {
                return false;
            }
        }
        let column = self.column_mut(column_id);
        let Some(old_index) = column.task_index(task_id) else {
            return false;
        };
        let new_index = match position {
            InsertPosition::Before(dest) => {
                let Some(dest_index) = column.task_index(dest) else {
                    return false;
                };
                // The destination sits one slot earlier once the moved
                // task is taken out of the list.
                if dest_index > old_index {
                    dest_index - 1
                } else {
                    dest_index
                }
            }
            InsertPosition::Index(index) => index.min(column.tasks.len() - 1),
            InsertPosition::End => column.tasks.len() - 1,
        };
        if new_index == old_index {
            return false;
        }
        let task = column.tasks.remove(old_index);
        column.tasks.insert(new_index, task);
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
