//! Integration tests for the API client against a stub HTTP server.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use paperdesk_client::{ApiClient, ApiError, DOWNLOAD_FILE_NAME};
use serde::{Deserialize, Serialize};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Project {
    name: String,
    papers: Vec<String>,
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url(server.uri())
}

#[tokio::test]
async fn get_decodes_a_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/project/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "name": "p1", "papers": [] }
        ])))
        .mount(&server)
        .await;

    let projects: Vec<Project> = client_for(&server).get("project/list").await.unwrap();

    assert_eq!(
        projects,
        vec![Project {
            name: "p1".to_string(),
            papers: vec![],
        }]
    );
}

#[tokio::test]
async fn get_with_encodes_the_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/project/get"))
        .and(query_param("id", "attention is all you need"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(
            { "name": "attention is all you need", "papers": [] }
        )))
        .mount(&server)
        .await;

    let project: Project = client_for(&server)
        .get_with("project/get", &[("id", "attention is all you need")])
        .await
        .unwrap();

    assert_eq!(project.name, "attention is all you need");
}

#[tokio::test]
async fn post_sends_a_json_body() {
    let server = MockServer::start().await;
    let created = Project {
        name: "p2".to_string(),
        papers: vec![],
    };
    Mock::given(method("POST"))
        .and(path("/project/create"))
        .and(body_json(&created))
        .respond_with(ResponseTemplate::new(200).set_body_json(&created))
        .mount(&server)
        .await;

    let response: Project = client_for(&server)
        .post("project/create", &created)
        .await
        .unwrap();

    assert_eq!(response, created);
}

#[tokio::test]
async fn non_success_status_surfaces_code_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/project/list"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database on fire"))
        .mount(&server)
        .await;

    let result: Result<Vec<Project>, ApiError> = client_for(&server).get("project/list").await;

    match result {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database on fire");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn garbled_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/project/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result: Result<Vec<Project>, ApiError> = client_for(&server).get("project/list").await;

    assert!(matches!(result, Err(ApiError::DecodeFailed(_))));
}

#[tokio::test]
async fn refused_connection_is_a_request_error() {
    // Port 1 is never listening.
    let client = ApiClient::with_base_url("http://127.0.0.1:1".to_string());

    let result: Result<Vec<Project>, ApiError> = client.get("project/list").await;

    assert!(matches!(result, Err(ApiError::RequestFailed(_))));
}

#[tokio::test]
async fn download_streams_the_body_to_tune_jsonl() {
    let server = MockServer::start().await;
    let body = "{\"prompt\":\"a\"}\n{\"prompt\":\"b\"}\n";
    Mock::given(method("GET"))
        .and(path("/paper/dataset"))
        .and(query_param("project", "p1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let written = client_for(&server)
        .download_to_dir("paper/dataset", &[("project", "p1")], dir.path())
        .await
        .unwrap();

    assert_eq!(written, dir.path().join(DOWNLOAD_FILE_NAME));
    assert_eq!(std::fs::read_to_string(&written).unwrap(), body);
}

#[tokio::test]
async fn download_failure_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/paper/dataset"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such project"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let result = client_for(&server)
        .download_to_dir("paper/dataset", &[("project", "gone")], dir.path())
        .await;

    assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    assert!(!dir.path().join(DOWNLOAD_FILE_NAME).exists());
}
