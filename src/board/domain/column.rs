//! Columns and the fixed set of three that make up a board.

use super::{Status, TaskId};
use serde::{Deserialize, Serialize};

/// An ordered lane of task identifiers under one status.
///
/// Columns store identifiers only; task records live on the board and are
/// resolved at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: Status,
    title: String,
    task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column titled with the status display name.
    #[must_use]
    pub fn new(id: Status) -> Self {
        Self {
            id,
            title: id.display_name().to_owned(),
            task_ids: Vec::new(),
        }
    }

    /// Returns the status this column holds.
    #[must_use]
    pub const fn id(&self) -> Status {
        self.id
    }

    /// Returns the column heading.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ordered task identifiers, top to bottom.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns `true` when the identifier is listed in this column.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.task_ids.contains(id)
    }

    /// Appends an identifier at the bottom of the column.
    pub(crate) fn push(&mut self, id: TaskId) {
        self.task_ids.push(id);
    }

    /// Drops an identifier, preserving the order of the rest.
    ///
    /// Absent identifiers are ignored.
    pub(crate) fn remove(&mut self, id: &TaskId) {
        self.task_ids.retain(|entry| entry != id);
    }
}

/// The fixed set of three columns every board carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSet {
    todo: Column,
    inprogress: Column,
    done: Column,
}

impl ColumnSet {
    /// Creates three empty columns with their default headings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            todo: Column::new(Status::Todo),
            inprogress: Column::new(Status::InProgress),
            done: Column::new(Status::Done),
        }
    }

    /// Returns the column holding the given status.
    #[must_use]
    pub const fn get(&self, status: Status) -> &Column {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.inprogress,
            Status::Done => &self.done,
        }
    }

    /// Returns the column holding the given status for mutation.
    pub(crate) const fn get_mut(&mut self, status: Status) -> &mut Column {
        match status {
            Status::Todo => &mut self.todo,
            Status::InProgress => &mut self.inprogress,
            Status::Done => &mut self.done,
        }
    }

    /// Iterates the columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.into_iter()
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a Column;
    type IntoIter = std::array::IntoIter<&'a Column, 3>;

    fn into_iter(self) -> Self::IntoIter {
        [&self.todo, &self.inprogress, &self.done].into_iter()
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self::new()
    }
}
