use docs_sync::{DocsSource, EntryKind, ListError};
use docs_sync_github::{GitHubDocsClient, GitHubDocsConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, token: Option<&str>) -> GitHubDocsConfig {
    GitHubDocsConfig {
        owner: "test-owner".into(),
        repo: "test-repo".into(),
        branch: "main".into(),
        token: token.map(|s| s.into()),
        api_base_url: Some(server.uri()),
    }
}

async fn mount_listing_fixture(server: &MockServer) {
    let fixture = include_str!("fixtures/contents_response.json");

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/docs/copilot"))
        .and(query_param("ref", "main"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(fixture, "application/json"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn list_parses_directory_entries() {
    let server = MockServer::start().await;
    mount_listing_fixture(&server).await;

    let client = GitHubDocsClient::new(config_for(&server, None));
    let entries = client.list("docs/copilot").await.unwrap();

    assert_eq!(entries.len(), 4);

    assert_eq!(entries[0].name, "getting-started.md");
    assert_eq!(entries[0].kind, EntryKind::File);
    assert_eq!(
        entries[0].download_url.as_deref(),
        Some("https://raw.githubusercontent.com/test-owner/test-repo/main/docs/copilot/getting-started.md")
    );

    assert_eq!(entries[1].name, "prompts.md");
    assert_eq!(entries[2].name, "notes.txt");

    let dir = &entries[3];
    assert_eq!(dir.name, "assets");
    assert_eq!(dir.kind, EntryKind::Dir);
    assert!(dir.download_url.is_none());
}

#[tokio::test]
async fn list_sends_api_headers_and_ref() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/docs/copilot"))
        .and(query_param("ref", "release-2024"))
        .and(header("User-Agent", "docs-sync"))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server, None);
    config.branch = "release-2024".into();

    let client = GitHubDocsClient::new(config);
    let entries = client.list("docs/copilot").await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn list_sends_token_header_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/docs/copilot"))
        .and(header("Authorization", "token s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = GitHubDocsClient::new(config_for(&server, Some("s3cret")));
    client.list("docs/copilot").await.unwrap();
}

#[tokio::test]
async fn list_404_carries_status_and_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/docs/copilot"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest/repos/contents"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = GitHubDocsClient::new(config_for(&server, None));
    let err = client.list("docs/copilot").await.unwrap_err();

    match err {
        ListError::Status {
            status,
            message,
            documentation_url,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message.as_deref(), Some("Not Found"));
            assert_eq!(
                documentation_url.as_deref(),
                Some("https://docs.github.com/rest/repos/contents")
            );
        }
        other => panic!("expected a status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn list_status_error_without_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/docs/copilot"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = GitHubDocsClient::new(config_for(&server, None));
    let err = client.list("docs/copilot").await.unwrap_err();

    match err {
        ListError::Status {
            status, message, ..
        } => {
            assert_eq!(status, 502);
            assert!(message.is_none());
        }
        other => panic!("expected a status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn list_rejects_single_file_response() {
    let server = MockServer::start().await;

    // Pointing the path at a file makes the contents API answer with one
    // object instead of an array.
    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/docs/copilot"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"name":"copilot","type":"file","download_url":"https://example.test/copilot"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = GitHubDocsClient::new(config_for(&server, None));
    let err = client.list("docs/copilot").await.unwrap_err();

    assert!(matches!(err, ListError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn list_rejects_undecodable_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/test-owner/test-repo/contents/docs/copilot"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = GitHubDocsClient::new(config_for(&server, None));
    let err = client.list("docs/copilot").await.unwrap_err();

    assert!(matches!(err, ListError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn list_surfaces_network_errors() {
    // Nothing is listening here.
    let config = GitHubDocsConfig {
        owner: "test-owner".into(),
        repo: "test-repo".into(),
        branch: "main".into(),
        token: None,
        api_base_url: Some("http://127.0.0.1:1".into()),
    };

    let client = GitHubDocsClient::new(config);
    let err = client.list("docs/copilot").await.unwrap_err();

    assert!(matches!(err, ListError::Network(_)));
}
