//! Drop-target resolution for drag gestures.
//!
//! Gesture identifiers arrive as plain strings from whatever input layer
//! the embedder uses. An `over` id names either one of the four fixed
//! columns (dropping on a column container or its empty area) or a task
//! (dropping on top of it). Resolution never fails loudly; an id that
//! matches neither simply yields `None` and the gesture is discarded.

use uuid::Uuid;

use crate::board::Board;
use crate::column::ColumnId;
use crate::task::TaskId;

/// What a gesture's `over` identifier resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// A column container, or the empty area of a column.
    Column(ColumnId),
    /// A specific task, along with the column currently holding it.
    Task { column_id: ColumnId, task_id: TaskId },
}

impl DropTarget {
    /// The column the drop lands in, whichever shape the target took.
    pub fn column_id(self) -> ColumnId {
        match self {
            DropTarget::Column(column_id) => column_id,
            DropTarget::Task { column_id, .. } => column_id,
        }
    }
}

/// Resolve a raw gesture identifier against the board. Fixed column ids
/// take precedence; anything else is treated as a task id and searched
/// across all columns.
pub fn resolve_drop_target(board: &Board, over_id: &str) -> Option<DropTarget> {
    if let Ok(column_id) = over_id.parse::<ColumnId>() {
        return Some(DropTarget::Column(column_id));
    }
    let task_id = Uuid::parse_str(over_id).ok()?;
    let (column_id, _) = board.locate_task(task_id)?;
    Some(DropTarget::Task { column_id, task_id })
}
