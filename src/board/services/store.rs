//! Board service tying mutations to notifications and logging.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info};

use crate::board::domain::{
    Board, BoardError, CreatedTask, RemovedTask, Status, TaskDraft, TaskId, TaskPatch, UpdatedTask,
};
use crate::board::ports::notifier::{BoardNotification, Notifier};

/// Owns the live board and applies mutations to it.
///
/// Each operation derives a successor board, installs it, raises the
/// matching [`BoardNotification`], and logs the outcome. A failed
/// operation installs nothing and notifies nobody, so callers always
/// observe either the previous board or the fully updated one.
pub struct BoardService<C, N>
where
    C: Clock,
    N: Notifier,
{
    board: Board,
    clock: Arc<C>,
    notifier: Arc<N>,
}

impl<C, N> BoardService<C, N>
where
    C: Clock,
    N: Notifier,
{
    /// Creates a service owning the given starting board.
    #[must_use]
    pub const fn new(board: Board, clock: Arc<C>, notifier: Arc<N>) -> Self {
        Self {
            board,
            clock,
            notifier,
        }
    }

    /// Returns the live board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Creates a task and appends it to the column matching its status.
    ///
    /// Returns the updated board together with the identifier assigned to
    /// the new task.
    pub fn create_task(&mut self, draft: TaskDraft) -> (&Board, TaskId) {
        debug!(
            "Creating task (title {:?}, status {:?})",
            draft.title(),
            draft.status()
        );
        let CreatedTask {
            board,
            task_id,
            title,
            status,
        } = self.board.create_task(draft, &*self.clock);
        self.board = board;
        info!("Created task {} in {}", task_id, status);
        self.notifier.notify(&BoardNotification::Created { title });
        (&self.board, task_id)
    }

    /// Edits a task in place, relocating it when the edit changes status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when no task carries the
    /// identifier; the board is left untouched.
    pub fn update_task(&mut self, id: &TaskId, patch: TaskPatch) -> Result<&Board, BoardError> {
        debug!("Updating task {}", id);
        let UpdatedTask {
            board,
            title,
            previous_status,
            status,
        } = self.board.update_task(id, patch)?;
        self.board = board;
        info!("Updated task {} ({} -> {})", id, previous_status, status);
        self.notifier.notify(&BoardNotification::Updated { title });
        Ok(&self.board)
    }

    /// Moves a task to the given column, appending it at the bottom.
    ///
    /// Moving a task to the column it already occupies changes nothing and
    /// raises no notification.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when no task carries the
    /// identifier; the board is left untouched.
    pub fn move_task(&mut self, id: &TaskId, destination: Status) -> Result<&Board, BoardError> {
        debug!("Moving task {} to {}", id, destination);
        let outcome = self.board.move_task(id, destination)?;
        let moved = outcome.changed_column();
        let UpdatedTask {
            board,
            title,
            previous_status,
            status,
        } = outcome;
        self.board = board;
        if moved {
            info!("Moved task {} from {} to {}", id, previous_status, status);
            self.notifier.notify(&BoardNotification::Moved {
                title,
                destination: status,
            });
        }
        Ok(&self.board)
    }

    /// Deletes a task and its column entry.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when no task carries the
    /// identifier; the board is left untouched.
    pub fn delete_task(&mut self, id: &TaskId) -> Result<&Board, BoardError> {
        debug!("Deleting task {}", id);
        let RemovedTask {
            board,
            title,
            status,
        } = self.board.delete_task(id)?;
        self.board = board;
        info!("Deleted task {} from {}", id, status);
        self.notifier.notify(&BoardNotification::Deleted { title });
        Ok(&self.board)
    }
}
