//! Board aggregate root and its mutation operations.

use std::collections::HashMap;

use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::{
    BoardError, Column, ColumnSet, ConsistencyViolation, Status, Task, TaskDraft, TaskId,
    TaskPatch,
};

/// The whole board: task records, the three columns ordering them, and the
/// column display order.
///
/// Operations never mutate in place. Each one derives a successor board
/// and returns it inside an outcome value, leaving the receiver untouched;
/// a failed operation therefore cannot leave a board half-changed.
///
/// # Examples
///
/// ```rust
/// use mockable::DefaultClock;
/// use tasklight::board::domain::{Board, Status, TaskDraft};
///
/// let board = Board::new();
/// let created = board.create_task(
///     TaskDraft::new().with_title("Write release notes"),
///     &DefaultClock,
/// );
/// let column = created.board.column(Status::Todo);
/// assert_eq!(column.task_ids().last(), Some(&created.task_id));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tasks: HashMap<TaskId, Task>,
    columns: ColumnSet,
    column_order: Vec<Status>,
}

impl Board {
    /// Creates an empty board with the three default columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            columns: ColumnSet::new(),
            column_order: Status::ALL.to_vec(),
        }
    }

    /// Adds a task directly, appending it to the column matching its
    /// status.
    ///
    /// A task already stored under the same identifier is replaced, and
    /// its previous column entry dropped first.
    #[must_use]
    pub fn with_task(mut self, task: Task) -> Self {
        if let Some(previous) = self.tasks.remove(task.id()) {
            self.columns.get_mut(previous.status()).remove(task.id());
        }
        self.columns.get_mut(task.status()).push(task.id().clone());
        self.tasks.insert(task.id().clone(), task);
        self
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Iterates all task records in no particular order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the column holding the given status.
    #[must_use]
    pub const fn column(&self, status: Status) -> &Column {
        self.columns.get(status)
    }

    /// Returns the statuses in display order.
    #[must_use]
    pub fn column_order(&self) -> &[Status] {
        &self.column_order
    }

    /// Returns the columns in display order, each paired with its tasks
    /// resolved top to bottom.
    #[must_use]
    pub fn columns(&self) -> Vec<ColumnView<'_>> {
        self.column_order
            .iter()
            .map(|status| {
                let column = self.columns.get(*status);
                ColumnView {
                    id: column.id(),
                    title: column.title(),
                    tasks: column
                        .task_ids()
                        .iter()
                        .filter_map(|id| self.tasks.get(id))
                        .collect(),
                }
            })
            .collect()
    }

    /// Creates a task and appends it to the column matching its status.
    ///
    /// The identifier is freshly generated and re-rolled until it collides
    /// with nothing already on the board.
    #[must_use]
    pub fn create_task(&self, draft: TaskDraft, clock: &impl Clock) -> CreatedTask {
        let mut next = self.clone();
        let mut id = TaskId::generate();
        while next.tasks.contains_key(&id) {
            id = TaskId::generate();
        }

        let task = Task::with_id(id.clone(), draft, clock);
        let title = task.title().to_owned();
        let status = task.status();
        next.columns.get_mut(status).push(id.clone());
        next.tasks.insert(id.clone(), task);

        CreatedTask {
            board: next,
            task_id: id,
            title,
            status,
        }
    }

    /// Applies a patch to a task, relocating it when the patch changes its
    /// status.
    ///
    /// A relocated task always lands at the bottom of its new column. A
    /// patch whose status matches the current one moves nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when no task carries the
    /// identifier.
    pub fn update_task(&self, id: &TaskId, patch: TaskPatch) -> Result<UpdatedTask, BoardError> {
        let mut next = self.clone();
        let task = next
            .tasks
            .get_mut(id)
            .ok_or_else(|| BoardError::TaskNotFound(id.clone()))?;

        let previous_status = task.status();
        task.apply(patch);
        let status = task.status();
        let title = task.title().to_owned();

        if status != previous_status {
            next.columns.get_mut(previous_status).remove(id);
            next.columns.get_mut(status).push(id.clone());
        }

        Ok(UpdatedTask {
            board: next,
            title,
            previous_status,
            status,
        })
    }

    /// Moves a task to the given column, appending it at the bottom.
    ///
    /// Moving a task to the column it already occupies produces a board
    /// equal to the receiver.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when no task carries the
    /// identifier.
    pub fn move_task(&self, id: &TaskId, destination: Status) -> Result<UpdatedTask, BoardError> {
        self.update_task(id, TaskPatch::new().with_status(destination))
    }

    /// Deletes a task and its column entry.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when no task carries the
    /// identifier.
    pub fn delete_task(&self, id: &TaskId) -> Result<RemovedTask, BoardError> {
        let mut next = self.clone();
        let task = next
            .tasks
            .remove(id)
            .ok_or_else(|| BoardError::TaskNotFound(id.clone()))?;
        next.columns.get_mut(task.status()).remove(id);

        Ok(RemovedTask {
            board: next,
            title: task.title().to_owned(),
            status: task.status(),
        })
    }

    /// Checks the structural invariants tying tasks, columns, and column
    /// order together.
    ///
    /// Boards built through the operations above always pass. The check
    /// exists for boards arriving from outside, such as deserialized
    /// snapshots.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConsistencyViolation`] found.
    pub fn verify_consistency(&self) -> Result<(), ConsistencyViolation> {
        self.verify_column_order()?;
        self.verify_column_entries()?;
        self.verify_membership_counts()
    }

    fn verify_column_order(&self) -> Result<(), ConsistencyViolation> {
        let well_formed = self.column_order.len() == Status::ALL.len()
            && Status::ALL.iter().all(|status| {
                self.column_order
                    .iter()
                    .filter(|entry| *entry == status)
                    .count()
                    == 1
            });
        if well_formed {
            Ok(())
        } else {
            Err(ConsistencyViolation::InvalidColumnOrder)
        }
    }

    fn verify_column_entries(&self) -> Result<(), ConsistencyViolation> {
        for column in self.columns.iter() {
            for id in column.task_ids() {
                let task =
                    self.tasks
                        .get(id)
                        .ok_or_else(|| ConsistencyViolation::UnknownTaskId {
                            column: column.id(),
                            id: id.clone(),
                        })?;
                if task.status() != column.id() {
                    return Err(ConsistencyViolation::StatusMismatch {
                        id: id.clone(),
                        status: task.status(),
                        column: column.id(),
                    });
                }
            }
        }
        Ok(())
    }

    fn verify_membership_counts(&self) -> Result<(), ConsistencyViolation> {
        for id in self.tasks.keys() {
            let count: usize = self
                .columns
                .iter()
                .map(|column| {
                    column
                        .task_ids()
                        .iter()
                        .filter(|entry| *entry == id)
                        .count()
                })
                .sum();
            if count != 1 {
                return Err(ConsistencyViolation::MembershipCount {
                    id: id.clone(),
                    count,
                });
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A column paired with its resolved tasks, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    /// Status the column holds.
    pub id: Status,
    /// Column heading.
    pub title: &'a str,
    /// Tasks in column order, top to bottom.
    pub tasks: Vec<&'a Task>,
}

/// Outcome of creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTask {
    /// Board with the new task appended to its column.
    pub board: Board,
    /// Identifier assigned to the new task.
    pub task_id: TaskId,
    /// Title the task ended up with after defaulting.
    pub title: String,
    /// Column the task landed in.
    pub status: Status,
}

/// Outcome of updating or moving a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedTask {
    /// Board with the change applied.
    pub board: Board,
    /// Title of the task after the change.
    pub title: String,
    /// Column the task occupied before the change.
    pub previous_status: Status,
    /// Column the task occupies now.
    pub status: Status,
}

impl UpdatedTask {
    /// Returns `true` when the change relocated the task between columns.
    #[must_use]
    pub fn changed_column(&self) -> bool {
        self.previous_status != self.status
    }
}

/// Outcome of deleting a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedTask {
    /// Board with the task and its column entry removed.
    pub board: Board,
    /// Title the task carried.
    pub title: String,
    /// Column the task was removed from.
    pub status: Status,
}
