//! Error types for board operations and parsing.

use super::{Status, TaskId};
use thiserror::Error;

/// Errors returned by board mutation operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The referenced task does not exist on the board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Error returned while parsing status values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing priority values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Invariant violations reported by board consistency checks.
///
/// Operations never produce these on their own; they guard against
/// hand-built or deserialized board values that arrive broken.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsistencyViolation {
    /// A column lists an identifier with no task record behind it.
    #[error("column {column} lists unknown task {id}")]
    UnknownTaskId {
        /// Column carrying the dangling entry.
        column: Status,
        /// The dangling identifier.
        id: TaskId,
    },

    /// A task sits in a column that does not match its status.
    #[error("task {id} has status {status} but is listed in column {column}")]
    StatusMismatch {
        /// The misfiled task.
        id: TaskId,
        /// Status recorded on the task itself.
        status: Status,
        /// Column actually listing the task.
        column: Status,
    },

    /// A task is listed in no column, or in more than one place.
    #[error("task {id} appears in {count} column entries, expected exactly one")]
    MembershipCount {
        /// The task with bad membership.
        id: TaskId,
        /// Number of column entries found.
        count: usize,
    },

    /// The column order does not name each status exactly once.
    #[error("column order must list each status exactly once")]
    InvalidColumnOrder,
}
