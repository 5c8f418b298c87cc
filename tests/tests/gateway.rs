use domain::{BackendError, ClientError, RagBackend, SelectedFile};
use infrastructure::rag_client::RagClient;
use serde_json::json;
use tests::{unreachable_base_url, MockRagServer};

#[tokio::test]
async fn index_sends_one_request_with_content_field() {
    let server = MockRagServer::start().await;
    server.reply(
        "/rag/index",
        200,
        json!({"status": "indexed", "detail": {"chunks": 1}}),
    );

    let resp = server
        .client()
        .submit_index("FastAPI test document")
        .await
        .unwrap();
    assert_eq!(resp.answer_text(), None);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/rag/index");
    assert_eq!(
        requests[0].text("content").as_deref(),
        Some("FastAPI test document")
    );
}

#[tokio::test]
async fn query_decodes_answer_and_context() {
    let server = MockRagServer::start().await;
    server.reply(
        "/rag/query",
        200,
        json!({
            "answer": "Retrieval-Augmented Generation...",
            "context_used": ["doc1 excerpt", "doc2 excerpt"]
        }),
    );

    let resp = server.client().submit_query("What is RAG?").await.unwrap();
    assert_eq!(resp.answer_text(), Some("Retrieval-Augmented Generation..."));
    assert_eq!(resp.context(), ["doc1 excerpt", "doc2 excerpt"]);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/rag/query");
    assert_eq!(requests[0].text("query").as_deref(), Some("What is RAG?"));
}

#[tokio::test]
async fn upload_sends_file_part_and_decodes_preview() {
    let server = MockRagServer::start().await;
    server.reply(
        "/rag/upload",
        200,
        json!({
            "filename": "notes.txt",
            "total_chunks": 4,
            "sample_chunks": ["first chunk", "second chunk"]
        }),
    );

    let file = SelectedFile::new("notes.txt", b"first chunk second chunk".to_vec());
    let preview = server.client().submit_upload(&file).await.unwrap();
    assert_eq!(preview.filename, "notes.txt");
    assert_eq!(preview.total_chunks, 4);
    assert_eq!(preview.sample_chunks, ["first chunk", "second chunk"]);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let part = requests[0].field("file").unwrap();
    assert_eq!(part.file_name.as_deref(), Some("notes.txt"));
    assert_eq!(part.data, b"first chunk second chunk");
}

#[tokio::test]
async fn upload_error_body_is_rejected() {
    let server = MockRagServer::start().await;
    server.reply(
        "/rag/upload",
        200,
        json!({"error": "Unsupported file format. Please upload .pdf or .txt"}),
    );

    let file = SelectedFile::new("slides.pptx", b"PK".to_vec());
    let err = server.client().submit_upload(&file).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Backend(BackendError::Rejected(
            "Unsupported file format. Please upload .pdf or .txt".into()
        ))
    );
}

#[tokio::test]
async fn preview_with_more_samples_than_chunks_is_invalid() {
    let server = MockRagServer::start().await;
    server.reply(
        "/rag/upload",
        200,
        json!({"filename": "a.txt", "total_chunks": 1, "sample_chunks": ["a", "b"]}),
    );

    let file = SelectedFile::new("a.txt", b"ab".to_vec());
    let err = server.client().submit_upload(&file).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Backend(BackendError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn non_success_status_is_backend_error() {
    let server = MockRagServer::start().await;
    server.reply("/rag/query", 500, json!({"detail": "qdrant unavailable"}));

    let err = server.client().submit_query("anything").await.unwrap_err();
    match err {
        ClientError::Backend(BackendError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("qdrant unavailable"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn network_failure_is_transport_error() {
    let client = RagClient::new(unreachable_base_url());
    let err = client.submit_query("anyone there?").await.unwrap_err();
    assert!(matches!(err, ClientError::Backend(BackendError::Transport(_))));
}

#[tokio::test]
async fn success_status_with_wrong_shape_is_invalid_response() {
    let server = MockRagServer::start().await;
    server.reply("/rag/upload", 200, json!({"status": "ok"}));

    let file = SelectedFile::new("a.txt", b"a".to_vec());
    let err = server.client().submit_upload(&file).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Backend(BackendError::InvalidResponse(_))
    ));
    assert_eq!(server.requests().len(), 1);
}
