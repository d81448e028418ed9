//! Starter board shipped with the application.

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

use super::domain::{Board, Priority, Status, Task, TaskDraft, TaskId};

struct SeedTask {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    status: Status,
    priority: Priority,
    deadline_offset_days: i64,
}

const SEED_TASKS: [SeedTask; 7] = [
    SeedTask {
        id: "task-1",
        title: "Design new dashboard layout",
        description: "Create wireframes and mockups for the new analytics dashboard",
        status: Status::Todo,
        priority: Priority::High,
        deadline_offset_days: 5,
    },
    SeedTask {
        id: "task-2",
        title: "Update user documentation",
        description: "Update the user guide with new features from the latest release",
        status: Status::Todo,
        priority: Priority::Medium,
        deadline_offset_days: 7,
    },
    SeedTask {
        id: "task-3",
        title: "Research competitor features",
        description: "Analyze top 3 competitors and create a feature comparison report",
        status: Status::Todo,
        priority: Priority::Low,
        deadline_offset_days: 10,
    },
    SeedTask {
        id: "task-4",
        title: "Implement authentication flow",
        description: "Develop and test the new OAuth integration",
        status: Status::InProgress,
        priority: Priority::High,
        deadline_offset_days: 3,
    },
    SeedTask {
        id: "task-5",
        title: "Optimize database queries",
        description: "Review and optimize slow-performing database queries",
        status: Status::InProgress,
        priority: Priority::Medium,
        deadline_offset_days: 4,
    },
    SeedTask {
        id: "task-6",
        title: "Setup CI/CD pipeline",
        description: "Configure automated testing and deployment workflow",
        status: Status::Done,
        priority: Priority::High,
        deadline_offset_days: -2,
    },
    SeedTask {
        id: "task-7",
        title: "Create onboarding email sequence",
        description: "Design and write copy for the 5-email onboarding sequence",
        status: Status::Done,
        priority: Priority::Medium,
        deadline_offset_days: -5,
    },
];

/// Builds the seven-task starter board the application opens with.
///
/// Deadlines are laid out relative to the clock's current time so the
/// board always opens with a spread of urgencies, including two completed
/// tasks whose deadlines have already passed.
#[must_use]
pub fn initial_board(clock: &impl Clock) -> Board {
    let now = clock.utc();
    let mut board = Board::new();
    for seed in &SEED_TASKS {
        let draft = TaskDraft::new()
            .with_title(seed.title)
            .with_description(seed.description)
            .with_status(seed.status)
            .with_priority(seed.priority)
            .with_deadline(days_from(now, seed.deadline_offset_days));
        board = board.with_task(Task::with_id(TaskId::new(seed.id), draft, clock));
    }
    board
}

/// Returns `now` shifted by whole days, falling back to `now` on overflow.
fn days_from(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    TimeDelta::try_days(days)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(now)
}
