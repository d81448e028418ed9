//! Integration tests for deleting tasks from the starter board.

use crate::board_store::helpers::{
    TestService, column_ids, notifier, seeded_service, service,
};
use rstest::rstest;
use tasklight::board::{
    adapters::memory::RecordingNotifier,
    domain::{BoardError, Status, TaskDraft, TaskId},
    ports::notifier::BoardNotification,
};

#[rstest]
fn delete_removes_the_record_and_the_column_entry(notifier: RecordingNotifier) {
    let mut service = seeded_service(&notifier);
    let id = TaskId::new("task-5");

    let board = service.delete_task(&id).expect("delete succeeds");

    assert_eq!(board.task_count(), 6);
    assert!(board.task(&id).is_none());
    assert_eq!(column_ids(board, Status::InProgress), vec!["task-4"]);
    assert_eq!(
        notifier.last(),
        Some(BoardNotification::Deleted {
            title: "Optimize database queries".to_owned()
        })
    );
}

#[rstest]
fn delete_with_unknown_identifier_changes_nothing(notifier: RecordingNotifier) {
    let mut service = seeded_service(&notifier);
    let ghost = TaskId::new("task-99");
    let before = service.board().clone();

    let result = service.delete_task(&ghost);

    assert_eq!(result.unwrap_err(), BoardError::TaskNotFound(ghost));
    assert_eq!(service.board(), &before);
    assert!(notifier.sent().is_empty());
}

#[rstest]
fn create_after_delete_does_not_reuse_the_identifier(mut service: TestService) {
    let removed = TaskId::new("task-5");
    service.delete_task(&removed).expect("delete succeeds");

    let (board, task_id) = service.create_task(TaskDraft::new().with_title("Replacement"));

    assert_ne!(task_id, removed);
    assert!(board.task(&removed).is_none());
    assert!(board.task(&task_id).is_some());
}

#[rstest]
fn deleting_every_task_leaves_empty_columns(mut service: TestService) {
    let ids: Vec<TaskId> = service
        .board()
        .tasks()
        .map(|task| task.id().clone())
        .collect();

    for id in &ids {
        service.delete_task(id).expect("delete succeeds");
    }

    let board = service.board();
    assert_eq!(board.task_count(), 0);
    for status in Status::ALL {
        assert!(board.column(status).task_ids().is_empty());
    }
    board.verify_consistency().expect("empty board is consistent");
}
