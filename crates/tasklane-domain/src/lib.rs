pub mod board;
pub mod column;
pub mod drag;
pub mod task;

pub use board::{Board, InsertPosition};
pub use column::{Column, ColumnId};
pub use drag::{resolve_drop_target, DropTarget};
pub use task::{Subtask, SubtaskId, Task, TaskId};
