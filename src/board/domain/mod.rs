//! Domain model for the kanban board.
//!
//! The board domain models tasks, the three status columns that order
//! them, and the pure operations that derive successor boards, keeping
//! all infrastructure concerns outside of the domain boundary.

mod board;
mod column;
mod deadline;
mod error;
mod ids;
mod priority;
mod status;
mod task;

pub use board::{Board, ColumnView, CreatedTask, RemovedTask, UpdatedTask};
pub use column::{Column, ColumnSet};
pub use deadline::{
    DUE_SOON_WINDOW_DAYS, DeadlineClass, classify_deadline, format_deadline, is_overdue,
    show_overdue_badge,
};
pub use error::{BoardError, ConsistencyViolation, ParsePriorityError, ParseStatusError};
pub use ids::TaskId;
pub use priority::Priority;
pub use status::Status;
pub use task::{DEFAULT_TASK_TITLE, Task, TaskDraft, TaskPatch};
