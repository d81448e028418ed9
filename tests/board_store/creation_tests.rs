//! Integration tests for task creation over the starter board.

use crate::board_store::helpers::{
    TestService, column_ids, notifier, seeded_service, service, test_instant,
};
use rstest::rstest;
use tasklight::board::{
    adapters::memory::RecordingNotifier,
    domain::{DEFAULT_TASK_TITLE, Priority, Status, TaskDraft},
    ports::notifier::BoardNotification,
};

#[rstest]
fn create_with_explicit_fields_lands_in_the_requested_column(mut service: TestService) {
    let draft = TaskDraft::new()
        .with_title("Prepare demo script")
        .with_status(Status::InProgress)
        .with_priority(Priority::High);

    let (board, task_id) = service.create_task(draft);

    assert_eq!(
        column_ids(board, Status::InProgress),
        vec!["task-4", "task-5", task_id.as_str()]
    );
    assert_eq!(board.task_count(), 8);
}

#[rstest]
fn create_with_an_empty_draft_applies_every_default(notifier: RecordingNotifier) {
    let mut service = seeded_service(&notifier);

    let (board, task_id) = service.create_task(TaskDraft::new());

    let task = board.task(&task_id).expect("created task present");
    assert_eq!(task.title(), DEFAULT_TASK_TITLE);
    assert_eq!(task.description(), "");
    assert_eq!(task.status(), Status::Todo);
    assert_eq!(task.priority(), Priority::Medium);
    assert_eq!(task.deadline(), test_instant());
    assert_eq!(task.created_at(), test_instant());
    assert_eq!(
        column_ids(board, Status::Todo),
        vec!["task-1", "task-2", "task-3", task_id.as_str()]
    );
    assert_eq!(
        notifier.last(),
        Some(BoardNotification::Created {
            title: DEFAULT_TASK_TITLE.to_owned()
        })
    );
}

#[rstest]
fn create_assigns_an_identifier_unused_on_the_board(mut service: TestService) {
    let before: Vec<String> = service
        .board()
        .tasks()
        .map(|task| task.id().to_string())
        .collect();

    let (_, task_id) = service.create_task(TaskDraft::new().with_title("Fresh"));

    assert!(!before.contains(&task_id.to_string()));
    assert!(service.board().task(&task_id).is_some());
}

#[rstest]
fn created_task_appears_in_the_rendered_columns(mut service: TestService) {
    let (_, task_id) = service.create_task(
        TaskDraft::new()
            .with_title("Review retention metrics")
            .with_status(Status::Done),
    );

    let views = service.board().columns();
    let done_titles: Vec<&str> = views
        .iter()
        .find(|view| view.id == Status::Done)
        .map(|view| view.tasks.iter().map(|task| task.title()).collect())
        .unwrap_or_default();

    assert_eq!(
        done_titles,
        vec![
            "Setup CI/CD pipeline",
            "Create onboarding email sequence",
            "Review retention metrics",
        ]
    );
    assert!(service.board().task(&task_id).is_some());
}
