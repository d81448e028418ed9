//! Notification port surfacing board changes to the user.

use crate::board::domain::Status;

/// User-facing note raised after a successful board mutation.
///
/// Each variant carries the facts the presentation layer needs; the
/// rendered wording comes from [`BoardNotification::message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardNotification {
    /// A task was created.
    Created {
        /// Title of the new task.
        title: String,
    },
    /// A task was edited in place.
    Updated {
        /// Title of the task after the edit.
        title: String,
    },
    /// A task moved between columns.
    Moved {
        /// Title of the moved task.
        title: String,
        /// Column the task landed in.
        destination: Status,
    },
    /// A task was deleted.
    Deleted {
        /// Title the task carried before deletion.
        title: String,
    },
}

impl BoardNotification {
    /// Renders the toast line shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Created { .. } => "Task created successfully".to_owned(),
            Self::Updated { .. } => "Task updated successfully".to_owned(),
            Self::Moved { title, destination } => {
                let column = destination.display_name();
                format!("\"{title}\" moved to {column}")
            }
            Self::Deleted { .. } => "Task deleted successfully".to_owned(),
        }
    }

    /// Returns the task title the notification refers to.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Created { title }
            | Self::Updated { title }
            | Self::Moved { title, .. }
            | Self::Deleted { title } => title,
        }
    }
}

/// Receives notifications raised by the board service.
///
/// Implementations decide delivery: a UI adapter would raise toasts, the
/// in-memory adapter records notifications for inspection.
pub trait Notifier {
    /// Delivers one notification.
    fn notify(&self, notification: &BoardNotification);
}
