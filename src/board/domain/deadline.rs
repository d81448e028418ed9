//! Deadline classification and display formatting.
//!
//! Hosts colour and label deadlines from the pure helpers here; nothing in
//! this module reads the wall clock, so rendering stays deterministic
//! under test.

use super::{Status, Task};
use chrono::{DateTime, TimeDelta, Utc};

/// Days ahead of now still considered "due soon".
pub const DUE_SOON_WINDOW_DAYS: i64 = 14;

/// Urgency bucket for a deadline, in decreasing severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeadlineClass {
    /// The deadline instant has already passed.
    Overdue,
    /// The deadline falls on the current calendar day.
    DueToday,
    /// The deadline falls within the due-soon window.
    DueSoon,
    /// The deadline is further out.
    Later,
}

/// Returns `true` when the deadline instant is strictly before `now`.
#[must_use]
pub fn is_overdue(deadline: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    deadline < now
}

/// Buckets a deadline relative to `now`.
///
/// Severity wins ties: a deadline earlier today is [`DeadlineClass::Overdue`],
/// not [`DeadlineClass::DueToday`], and a deadline later today is
/// [`DeadlineClass::DueToday`] even though it also sits inside the
/// due-soon window.
#[must_use]
pub fn classify_deadline(deadline: DateTime<Utc>, now: DateTime<Utc>) -> DeadlineClass {
    if is_overdue(deadline, now) {
        return DeadlineClass::Overdue;
    }
    if deadline.date_naive() == now.date_naive() {
        return DeadlineClass::DueToday;
    }
    let window_end = now.checked_add_signed(TimeDelta::days(DUE_SOON_WINDOW_DAYS));
    if window_end.is_some_and(|end| deadline < end) {
        return DeadlineClass::DueSoon;
    }
    DeadlineClass::Later
}

/// Formats a deadline for display relative to `now`.
///
/// Same-day deadlines render as `Today`, next-day ones as `Tomorrow`, and
/// everything else as a full date such as `Mar 5, 2026`.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use tasklight::board::domain::format_deadline;
///
/// let now = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).single().expect("valid");
/// let deadline = Utc.with_ymd_and_hms(2026, 3, 5, 17, 0, 0).single().expect("valid");
/// assert_eq!(format_deadline(deadline, now), "Tomorrow");
/// ```
#[must_use]
pub fn format_deadline(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let deadline_day = deadline.date_naive();
    let today = now.date_naive();
    if deadline_day == today {
        return "Today".to_owned();
    }
    if today.succ_opt() == Some(deadline_day) {
        return "Tomorrow".to_owned();
    }
    deadline.format("%b %-d, %Y").to_string()
}

/// Returns `true` when a task should carry an overdue badge.
///
/// Completed tasks never carry the badge, however late they finished.
#[must_use]
pub fn show_overdue_badge(task: &Task, now: DateTime<Utc>) -> bool {
    task.status() != Status::Done && is_overdue(task.deadline(), now)
}
