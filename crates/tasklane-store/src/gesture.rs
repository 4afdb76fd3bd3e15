//! The drag gesture state machine.
//!
//! Two phases: a start that captures the active (floating) task, and an
//! end that commits a move or reorder. Identifiers arrive as plain strings
//! so the interpreter stays decoupled from any input-device abstraction
//! and testable without simulating pointer events. Gesture target
//! resolution races with the embedder's live visual tree, so every
//! resolution failure degrades to a silent no-op on the unchanged board.

use std::sync::Arc;
use tasklane_domain::{resolve_drop_target, Board, ColumnId, DropTarget, InsertPosition, Task, TaskId};
use uuid::Uuid;

use crate::store::BoardStore;

#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    task_id: TaskId,
    source_column: ColumnId,
}

/// Interprets drag gestures into board store operations.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture: capture the dragged task and its source column.
    /// Returns the task for presentational feedback (the floating card),
    /// or `None` when the id does not name a task on the board.
    pub fn on_drag_start(&mut self, store: &BoardStore, item_id: &str) -> Option<Arc<Task>> {
        self.active = None;
        let task_id = Uuid::parse_str(item_id).ok()?;
        let (source_column, _) = store.board().locate_task(task_id)?;
        self.active = Some(ActiveDrag {
            task_id,
            source_column,
        });
        store.board().task(task_id).cloned()
    }

    /// End a gesture. `over_id` of `None` means the drop landed outside
    /// every valid target: the active task is cleared and nothing moves.
    /// Otherwise the target resolves to a column (append) or a task
    /// (insert before it), and the store commits a cross-column move or a
    /// same-column reorder. Returns the board snapshot to render,
    /// unchanged whenever resolution fails.
    pub fn on_drag_end(
        &mut self,
        store: &mut BoardStore,
        active_id: &str,
        over_id: Option<&str>,
    ) -> Arc<Board> {
        self.active = None;

        let Some(over_id) = over_id else {
            return store.snapshot();
        };
        let Ok(task_id) = Uuid::parse_str(active_id) else {
            tracing::debug!("Discarding drag end: unparseable active id {active_id:?}");
            return store.snapshot();
        };
        let Some((source_column, _)) = store.board().locate_task(task_id) else {
            tracing::debug!("Discarding drag end: no task {task_id} on the board");
            return store.snapshot();
        };
        let Some(target) = resolve_drop_target(store.board(), over_id) else {
            tracing::debug!("Discarding drag end: unresolved target {over_id:?}");
            return store.snapshot();
        };

        if source_column != target.column_id() {
            let position = match target {
                DropTarget::Task {
                    task_id: over_task, ..
                } => InsertPosition::Before(over_task),
                DropTarget::Column(_) => InsertPosition::End,
            };
            store.move_task(task_id, target.column_id(), position)
        } else {
            let position = match target {
                DropTarget::Task {
                    task_id: over_task, ..
                } => {
                    if over_task == task_id {
                        // dropped onto itself
                        return store.snapshot();
                    }
                    InsertPosition::Before(over_task)
                }
                DropTarget::Column(_) => InsertPosition::End,
            };
            store.reorder_within_column(source_column, task_id, position)
        }
    }

    /// The task captured by an in-flight gesture, if any.
    pub fn active_task_id(&self) -> Option<TaskId> {
        self.active.map(|active| active.task_id)
    }

    /// The column the in-flight gesture started from.
    pub fn active_source_column(&self) -> Option<ColumnId> {
        self.active.map(|active| active.source_column)
    }

    /// Clear the floating task without a drop; the embedder calls this on
    /// its own gesture-cancellation path. An abandoned gesture otherwise
    /// simply never reaches `on_drag_end`.
    pub fn clear_active(&mut self) {
        self.active = None;
    }
}
