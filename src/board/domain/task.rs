//! Task aggregate and the request objects that create and modify it.

use super::{Priority, Status, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Title given to tasks created without one.
pub const DEFAULT_TASK_TITLE: &str = "New Task";

/// A single card on the board.
///
/// Identifier and creation timestamp are fixed at construction; every
/// other field can change through a [`TaskPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: Status,
    priority: Priority,
    deadline: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with a fresh random identifier.
    ///
    /// Fields absent from the draft take their defaults: the placeholder
    /// title, an empty description, [`Status::Todo`], [`Priority::Medium`],
    /// and a deadline of the current clock time. An empty title is treated
    /// as absent.
    #[must_use]
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Self {
        Self::with_id(TaskId::generate(), draft, clock)
    }

    /// Creates a task under a caller-supplied identifier.
    #[must_use]
    pub fn with_id(id: TaskId, draft: TaskDraft, clock: &impl Clock) -> Self {
        let now = clock.utc();
        Self {
            id,
            title: draft
                .title
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| DEFAULT_TASK_TITLE.to_owned()),
            description: draft.description.unwrap_or_default(),
            status: draft.status.unwrap_or_default(),
            priority: draft.priority.unwrap_or_default(),
            deadline: draft.deadline.unwrap_or(now),
            created_at: now,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies the populated fields of a patch, leaving the rest untouched.
    pub(crate) fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
    }
}

/// Field values for creating a task.
///
/// Every field is optional; defaults are documented on [`Task::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: Option<String>,
    description: Option<String>,
    status: Option<Status>,
    priority: Option<Priority>,
    deadline: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the destination column.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Returns the requested title, if the draft sets one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the requested column, if the draft sets one.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }
}

/// Partial update for an existing task.
///
/// Unset fields are left untouched. Identifier and creation timestamp are
/// not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    status: Option<Status>,
    priority: Option<Priority>,
    deadline: Option<DateTime<Utc>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a new status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets a new priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets a new deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Returns the requested status, if the patch sets one.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    /// Returns `true` when no field is populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.deadline.is_none()
    }
}
