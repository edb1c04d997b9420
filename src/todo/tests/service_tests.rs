//! Service orchestration tests over the in-memory repository.

use crate::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{TodoDomainError, TodoId},
    services::{TodoService, TodoServiceError},
};
use chrono::Utc;
use rstest::{fixture, rstest};
use std::collections::HashSet;
use std::sync::Arc;

type TestService = TodoService<InMemoryTodoRepository>;

#[fixture]
fn service() -> TestService {
    TodoService::new(Arc::new(InMemoryTodoRepository::new()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_todo_returns_incomplete_record_with_bounded_timestamp(service: TestService) {
    let before = Utc::now();
    let created = service
        .create_todo("Buy milk")
        .await
        .expect("creation should succeed");
    let after = Utc::now();

    assert_eq!(created.description(), "Buy milk");
    assert!(!created.completed());
    assert!(created.id().into_inner() > 0);
    assert!(created.created_at() >= before);
    assert!(created.created_at() <= after);
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test(flavor = "multi_thread")]
async fn create_todo_rejects_blank_description(service: TestService, #[case] raw: &str) {
    let result = service.create_todo(raw).await;
    assert!(matches!(
        result,
        Err(TodoServiceError::Validation(
            TodoDomainError::EmptyDescription
        ))
    ));

    // Validation fails before the store is touched.
    let listed = service.list_todos().await.expect("list should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_todo_keeps_long_descriptions_verbatim(service: TestService) {
    let long = "This is a very long todo description that should be handled properly \
                by the store and the service without any truncation or rewriting";
    let created = service
        .create_todo(long)
        .await
        .expect("creation should succeed");
    assert_eq!(created.description(), long);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_descriptions_create_distinct_records(service: TestService) {
    let first = service
        .create_todo("Water the plants")
        .await
        .expect("creation should succeed");
    let second = service
        .create_todo("Water the plants")
        .await
        .expect("creation should succeed");

    assert_ne!(first.id(), second.id());
    let listed = service.list_todos().await.expect("list should succeed");
    assert_eq!(listed.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_todos_returns_creations_in_order(service: TestService) {
    for text in ["A", "B", "C"] {
        service
            .create_todo(text)
            .await
            .expect("creation should succeed");
    }

    let listed = service.list_todos().await.expect("list should succeed");
    let descriptions: Vec<&str> = listed.iter().map(|todo| todo.description()).collect();
    assert_eq!(descriptions, vec!["A", "B", "C"]);

    let ids: HashSet<TodoId> = listed.iter().map(|todo| todo.id()).collect();
    assert_eq!(ids.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_todos_on_an_empty_store_yields_nothing(service: TestService) {
    let listed = service.list_todos().await.expect("list should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_completion_round_trip_preserves_creation_fields(service: TestService) {
    let created = service
        .create_todo("Buy milk")
        .await
        .expect("creation should succeed");

    let completed = service
        .update_completion(created.id(), true)
        .await
        .expect("update should succeed");
    assert!(completed.completed());
    assert_eq!(completed.description(), "Buy milk");
    assert_eq!(completed.created_at(), created.created_at());

    let reverted = service
        .update_completion(created.id(), false)
        .await
        .expect("update should succeed");
    assert!(!reverted.completed());
    assert_eq!(reverted.created_at(), created.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_completion_rejects_unknown_id(service: TestService) {
    let result = service.update_completion(TodoId::new(4242), true).await;

    assert!(matches!(
        result,
        Err(TodoServiceError::NotFound(id)) if id == TodoId::new(4242)
    ));
    let Err(err) = result else {
        return;
    };
    assert_eq!(err.to_string(), "todo with id 4242 not found");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_todo_removes_exactly_the_target(service: TestService) {
    let first = service
        .create_todo("First")
        .await
        .expect("creation should succeed");
    let second = service
        .create_todo("Second")
        .await
        .expect("creation should succeed");
    let third = service
        .create_todo("Third")
        .await
        .expect("creation should succeed");

    let outcome = service
        .delete_todo(second.id())
        .await
        .expect("delete should succeed");
    assert!(outcome.success);

    let listed = service.list_todos().await.expect("list should succeed");
    assert_eq!(listed, vec![first, third]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_todo_reports_failure_without_error_for_missing_ids(service: TestService) {
    let created = service
        .create_todo("Ephemeral")
        .await
        .expect("creation should succeed");

    let first_delete = service
        .delete_todo(created.id())
        .await
        .expect("delete should succeed");
    assert!(first_delete.success);

    // A second delete of the same id and a delete of an id that never
    // existed are indistinguishable: both report success = false.
    let second_delete = service
        .delete_todo(created.id())
        .await
        .expect("delete should succeed");
    assert!(!second_delete.success);

    let unknown_delete = service
        .delete_todo(TodoId::new(9999))
        .await
        .expect("delete should succeed");
    assert!(!unknown_delete.success);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn single_record_lifecycle_scenario(service: TestService) {
    service
        .create_todo("Buy milk")
        .await
        .expect("creation should succeed");

    let listed = service.list_todos().await.expect("list should succeed");
    let only = listed.first().expect("one record should be present");
    assert_eq!(listed.len(), 1);
    assert_eq!(only.description(), "Buy milk");
    assert!(!only.completed());

    service
        .update_completion(only.id(), true)
        .await
        .expect("update should succeed");
    let after_toggle = service.list_todos().await.expect("list should succeed");
    let toggled = after_toggle.first().expect("one record should be present");
    assert!(toggled.completed());
    assert_eq!(toggled.description(), "Buy milk");

    let outcome = service
        .delete_todo(toggled.id())
        .await
        .expect("delete should succeed");
    assert!(outcome.success);
    let after_delete = service.list_todos().await.expect("list should succeed");
    assert!(after_delete.is_empty());
}
