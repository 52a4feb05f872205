use std::sync::Arc;

use tokio::time::Duration;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use image_upload_queue::{
    AddOutcome, AppError, HttpTransport, QueuedFile, UploadQueue, UploadTransport,
};

fn queued_file(name: &str, bytes: Vec<u8>) -> QueuedFile {
    let mut queue = UploadQueue::new();
    let size = bytes.len() as u64;
    let outcome = queue.try_add(name, size, Arc::new(bytes));
    assert!(matches!(outcome, AddOutcome::Added(_)));
    queue.snapshot().remove(0)
}

#[tokio::test]
async fn test_multipart_form_carries_expected_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"cat.jpg\""))
        .and(body_string_contains("name=\"filename\""))
        .and(body_string_contains("name=\"filesize\""))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let transport =
        HttpTransport::new(format!("{}/upload", server.uri()), Duration::from_secs(5)).unwrap();

    let file = queued_file("cat.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0]);
    let status = transport.upload(&file).await.unwrap();

    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_status_codes_pass_through_unmapped() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/created"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let transport =
        HttpTransport::new(format!("{}/created", server.uri()), Duration::from_secs(5)).unwrap();
    let file = queued_file("dog.png", vec![1, 2, 3]);
    assert_eq!(transport.upload(&file).await.unwrap(), 201);
}

#[tokio::test]
async fn test_server_error_status_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri(), Duration::from_secs(5)).unwrap();
    let file = queued_file("dog.png", vec![1, 2, 3]);

    // A reachable endpoint answering 5xx is reported as a status, not Err
    assert_eq!(transport.upload(&file).await.unwrap(), 500);
}

#[tokio::test]
async fn test_unreachable_endpoint_surfaces_network_error() {
    // Port 1 is expected to refuse connections
    let transport =
        HttpTransport::new("http://127.0.0.1:1/upload", Duration::from_secs(1)).unwrap();
    let file = queued_file("dog.png", vec![1, 2, 3]);

    let result = transport.upload(&file).await;
    assert!(matches!(result, Err(AppError::Network(_))));
}
