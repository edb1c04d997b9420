//! Round-trip tests driving the real router over the in-memory store.

use crate::api::build_router;
use crate::client::{HttpTodoApi, TodoApi, TodoApiError};
use crate::todo::{
    adapters::memory::InMemoryTodoRepository, domain::TodoId, services::TodoService,
};
use rstest::rstest;
use serde_json::json;
use tokio::net::TcpListener;

/// Serves the API over an in-memory store on an ephemeral port and returns
/// a client pointed at it.
async fn spawn_api() -> HttpTodoApi {
    let service = TodoService::new(std::sync::Arc::new(InMemoryTodoRepository::new()));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("listener should have an address");
    let router = build_router(service);
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("server should run");
    });
    HttpTodoApi::new(format!("http://{addr}"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_and_list_round_trip() {
    let api = spawn_api().await;

    let created = api
        .create_todo("Buy milk".to_owned())
        .await
        .expect("creation should succeed");
    assert_eq!(created.description(), "Buy milk");
    assert!(!created.completed());

    let listed = api.get_todos().await.expect("list should succeed");
    assert_eq!(listed, vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_description_with_client_error() {
    let api = spawn_api().await;

    let result = api.create_todo("   ".to_owned()).await;
    assert!(matches!(
        result,
        Err(TodoApiError::Rejected { status: 400, ref message })
            if message == "todo description must not be empty"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_completion_round_trip() {
    let api = spawn_api().await;

    let created = api
        .create_todo("Water the plants".to_owned())
        .await
        .expect("creation should succeed");
    let updated = api
        .update_todo_completion(created.id(), true)
        .await
        .expect("update should succeed");

    assert!(updated.completed());
    assert_eq!(updated.description(), "Water the plants");
    assert_eq!(updated.created_at(), created.created_at());

    let listed = api.get_todos().await.expect("list should succeed");
    assert_eq!(listed, vec![updated]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_completion_of_unknown_id_is_not_found() {
    let api = spawn_api().await;

    let result = api.update_todo_completion(TodoId::new(4242), true).await;
    assert!(matches!(
        result,
        Err(TodoApiError::Rejected { status: 404, ref message })
            if message == "todo with id 4242 not found"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_success_then_failure_without_error() {
    let api = spawn_api().await;

    let created = api
        .create_todo("Ephemeral".to_owned())
        .await
        .expect("creation should succeed");

    let first = api
        .delete_todo(created.id())
        .await
        .expect("delete should succeed");
    assert!(first.success);

    let second = api
        .delete_todo(created.id())
        .await
        .expect("delete should succeed");
    assert!(!second.success);

    let listed = api.get_todos().await.expect("list should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn three_creates_list_in_order_and_deleting_the_middle_keeps_the_rest() {
    let api = spawn_api().await;

    let mut created = Vec::new();
    for text in ["A", "B", "C"] {
        created.push(
            api.create_todo(text.to_owned())
                .await
                .expect("creation should succeed"),
        );
    }
    let ids: Vec<TodoId> = created.iter().map(|todo| todo.id()).collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().zip(ids.iter().skip(1)).all(|(a, b)| a < b));

    let middle = created.get(1).expect("three records were created");
    let outcome = api
        .delete_todo(middle.id())
        .await
        .expect("delete should succeed");
    assert!(outcome.success);

    let listed = api.get_todos().await.expect("list should succeed");
    let descriptions: Vec<&str> = listed.iter().map(|todo| todo.description()).collect();
    assert_eq!(descriptions, vec!["A", "C"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mistyped_payload_is_a_client_error() {
    let api = spawn_api().await;
    let http = reqwest::Client::new();

    // `description` must be a string.
    let base = api
        .create_todo("probe".to_owned())
        .await
        .expect("creation should succeed");
    let mistyped_body = http
        .post(format!("{}/api/todos", api.base_url()))
        .json(&json!({ "description": 42 }))
        .send()
        .await
        .expect("request should complete");
    assert!(mistyped_body.status().is_client_error());

    // A non-integer path id never reaches the service.
    let mistyped_path = http
        .patch(format!(
            "{}/api/todos/not-a-number/completion",
            api.base_url()
        ))
        .json(&json!({ "completed": true }))
        .send()
        .await
        .expect("request should complete");
    assert!(mistyped_path.status().is_client_error());

    // The mistyped calls changed nothing.
    let listed = api.get_todos().await.expect("list should succeed");
    assert_eq!(listed, vec![base]);
}
