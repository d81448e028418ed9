//! Integration tests for drag-style moves between columns.

use crate::board_store::helpers::{
    TestService, column_ids, notifier, seeded_service, service,
};
use rstest::rstest;
use tasklight::board::{
    adapters::memory::RecordingNotifier,
    domain::{BoardError, Status, TaskId},
    ports::notifier::BoardNotification,
};

#[rstest]
fn move_appends_at_the_bottom_of_the_destination(notifier: RecordingNotifier) {
    let mut service = seeded_service(&notifier);
    let id = TaskId::new("task-1");

    let board = service.move_task(&id, Status::Done).expect("move succeeds");

    assert_eq!(column_ids(board, Status::Todo), vec!["task-2", "task-3"]);
    assert_eq!(
        column_ids(board, Status::Done),
        vec!["task-6", "task-7", "task-1"]
    );
    let task = board.task(&id).expect("task present");
    assert_eq!(task.status(), Status::Done);
    let messages: Vec<String> = notifier
        .sent()
        .iter()
        .map(BoardNotification::message)
        .collect();
    assert_eq!(
        messages,
        vec!["\"Design new dashboard layout\" moved to Done"]
    );
}

#[rstest]
#[case::to_todo(Status::Todo, &["task-1", "task-2", "task-3", "task-7"])]
#[case::to_in_progress(Status::InProgress, &["task-4", "task-5", "task-7"])]
fn move_lands_last_in_the_destination_column(
    mut service: TestService,
    #[case] destination: Status,
    #[case] expected: &[&str],
) {
    let id = TaskId::new("task-7");

    let board = service.move_task(&id, destination).expect("move succeeds");

    assert_eq!(column_ids(board, destination), expected);
}

#[rstest]
fn move_to_the_current_column_is_silent(notifier: RecordingNotifier) {
    let mut service = seeded_service(&notifier);
    let id = TaskId::new("task-4");
    let before = service.board().clone();

    let board = service
        .move_task(&id, Status::InProgress)
        .expect("move succeeds");

    assert_eq!(board, &before);
    assert!(notifier.sent().is_empty());
}

#[rstest]
fn sequential_moves_preserve_the_order_of_bystanders(mut service: TestService) {
    service
        .move_task(&TaskId::new("task-4"), Status::Done)
        .expect("first move succeeds");
    service
        .move_task(&TaskId::new("task-2"), Status::InProgress)
        .expect("second move succeeds");

    let board = service.board();
    assert_eq!(column_ids(board, Status::Todo), vec!["task-1", "task-3"]);
    assert_eq!(
        column_ids(board, Status::InProgress),
        vec!["task-5", "task-2"]
    );
    assert_eq!(
        column_ids(board, Status::Done),
        vec!["task-6", "task-7", "task-4"]
    );
    board.verify_consistency().expect("board stays consistent");
}

#[rstest]
fn move_with_unknown_identifier_changes_nothing(notifier: RecordingNotifier) {
    let mut service = seeded_service(&notifier);
    let ghost = TaskId::new("task-42");
    let before = service.board().clone();

    let result = service.move_task(&ghost, Status::Done);

    assert_eq!(result.unwrap_err(), BoardError::TaskNotFound(ghost));
    assert_eq!(service.board(), &before);
    assert!(notifier.sent().is_empty());
}
