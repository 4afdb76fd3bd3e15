use std::sync::Arc;
use tasklane_domain::{Board, ColumnId, InsertPosition, SubtaskId, Task, TaskId};
use tasklane_persistence::BoardRepository;

/// Owns the authoritative board for the lifetime of a session.
///
/// Every mutation replaces the board atomically and hands back the new
/// snapshot; snapshots taken earlier keep the state they were taken from.
/// Each operation that actually changes state triggers exactly one save on
/// the repository — a fire-and-forget side effect, never a blocking one.
pub struct BoardStore {
    board: Arc<Board>,
    repository: Box<dyn BoardRepository>,
}

impl BoardStore {
    /// Open a session: load the stored board (or the seed fallback) from
    /// the repository.
    pub fn open(repository: Box<dyn BoardRepository>) -> Self {
        let board = Arc::new(repository.load());
        Self { board, repository }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current board as a shared snapshot for rendering.
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Create a task in a column. The task's `column_id` is forced to the
    /// named column; placement follows upsert semantics (a fresh id lands
    /// at the end of the column).
    pub fn add_task(&mut self, column_id: ColumnId, mut task: Task) -> Arc<Board> {
        task.column_id = column_id;
        self.upsert_task(task)
    }

    /// Save an edited task, identity preserved. An edit that changes
    /// `column_id` moves the task to the end of its new column.
    pub fn edit_task(&mut self, task: Task) -> Arc<Board> {
        self.upsert_task(task)
    }

    /// Insert-or-replace by task id; the create and edit paths both land
    /// here. Always commits: an edit yields a new authoritative board even
    /// when every field matches.
    pub fn upsert_task(&mut self, task: Task) -> Arc<Board> {
        Arc::make_mut(&mut self.board).upsert_task(task);
        self.commit();
        self.snapshot()
    }

    /// Remove a task wherever it lives. Unknown ids are a silent no-op.
    pub fn delete_task(&mut self, task_id: TaskId) -> Arc<Board> {
        if self.board.locate_task(task_id).is_none() {
            return self.snapshot();
        }
        Arc::make_mut(&mut self.board).remove_task(task_id);
        self.commit();
        self.snapshot()
    }

    /// Flip a subtask's completion flag. Unknown ids are a silent no-op.
    pub fn toggle_subtask(&mut self, task_id: TaskId, subtask_id: SubtaskId) -> Arc<Board> {
        if Arc::make_mut(&mut self.board).toggle_subtask(task_id, subtask_id) {
            self.commit();
        }
        self.snapshot()
    }

    /// Move a task to a destination column and position; same-column moves
    /// reorder in place. Resolution failures leave the board unchanged.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        destination: ColumnId,
        position: InsertPosition,
    ) -> Arc<Board> {
        if Arc::make_mut(&mut self.board).move_task(task_id, destination, position) {
            self.commit();
        }
        self.snapshot()
    }

    /// Reorder a task within one column, preserving every other task's
    /// relative order.
    pub fn reorder_within_column(
        &mut self,
        column_id: ColumnId,
        task_id: TaskId,
        position: InsertPosition,
    ) -> Arc<Board> {
        if Arc::make_mut(&mut self.board).reorder_task(column_id, task_id, position) {
            self.commit();
        }
        self.snapshot()
    }

    fn commit(&self) {
        self.repository.save(&self.board);
    }
}
