//! Workspace integration tests against a mocked Cybozu tenant.

use std::io::Write;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use cybozu_api::client::{
    AuthOptions, ConnectionConfig, CybozuClient, ErrorKind, HEADER_CYBOZU_API_TOKEN,
    HEADER_CYBOZU_AUTHORIZATION,
};
use cybozu_api::kintone::KintoneApi;
use cybozu_api::user::{CsvKind, UserApi};
use wiremock::matchers::{body_partial_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn password_config() -> ConnectionConfig {
    ConnectionConfig::builder()
        .domain("cybozu.com")
        .subdomain("test")
        .login("test@example.com")
        .password("password")
        .build()
        .unwrap()
}

fn client_for(server: &MockServer) -> CybozuClient {
    CybozuClient::new(password_config())
        .unwrap()
        .with_base_url(server.uri())
}

#[test]
fn missing_option_matrix() {
    // (builder, option the error must name)
    let cases: Vec<(cybozu_api::client::ConnectionConfigBuilder, &str)> = vec![
        (
            ConnectionConfig::builder().subdomain("test").login("a").password("b"),
            "domain",
        ),
        (
            ConnectionConfig::builder().domain("cybozu.com").login("a").password("b"),
            "subdomain",
        ),
        (
            ConnectionConfig::builder().domain("cybozu.com").subdomain("test").password("b"),
            "login",
        ),
        (
            ConnectionConfig::builder().domain("cybozu.com").subdomain("test").login("a"),
            "password",
        ),
        (
            ConnectionConfig::builder()
                .domain("cybozu.com")
                .subdomain("test")
                .use_api_token(true),
            "token",
        ),
        (
            ConnectionConfig::builder()
                .domain("cybozu.com")
                .subdomain("test")
                .login("a")
                .password("b")
                .use_basic(true),
            "basic_login",
        ),
        (
            ConnectionConfig::builder()
                .domain("cybozu.com")
                .subdomain("test")
                .login("a")
                .password("b")
                .use_client_cert(true),
            "cert_file",
        ),
    ];

    for (builder, option) in cases {
        let err = builder.build().unwrap_err();
        assert!(err.is_missing_option(), "expected missing option: {option}");
        assert_eq!(err.to_string(), format!("Missing required option: {option}"));
    }
}

#[tokio::test]
async fn password_auth_header_on_the_wire() {
    let server = MockServer::start().await;
    let expected = BASE64.encode("test@example.com:password");
    Mock::given(method("GET"))
        .and(path("/k/v1/records.json"))
        .and(header(HEADER_CYBOZU_AUTHORIZATION, expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "records": [], "totalCount": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = KintoneApi::new(client_for(&server));
    api.records().get(1, "", None, false).await.unwrap();
}

#[tokio::test]
async fn token_mode_sends_token_header_only() {
    let server = MockServer::start().await;
    // A lingering password header means the auth modes leaked into each other.
    Mock::given(method("GET"))
        .and(path("/k/v1/records.json"))
        .and(header_exists(HEADER_CYBOZU_AUTHORIZATION))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/k/v1/records.json"))
        .and(header(HEADER_CYBOZU_API_TOKEN, "secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "records": [], "totalCount": null
        })))
        .mount(&server)
        .await;

    let config = ConnectionConfig::builder()
        .domain("cybozu.com")
        .subdomain("test")
        .login("test@example.com")
        .password("password")
        .use_api_token(true)
        .token("secret-token")
        .build()
        .unwrap();
    let client = CybozuClient::new(config).unwrap().with_base_url(server.uri());
    let api = KintoneApi::new(client);
    api.records().get(1, "", None, false).await.unwrap();
}

#[tokio::test]
async fn change_auth_options_swaps_headers_atomically() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cb/version/"))
        .and(header_exists(HEADER_CYBOZU_AUTHORIZATION))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cb/version/"))
        .and(header(HEADER_CYBOZU_API_TOKEN, "rotated-token"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client
        .change_auth_options(AuthOptions::api_token("rotated-token"))
        .unwrap();
    client.connection_test().await.unwrap();
}

#[tokio::test]
async fn failed_auth_change_keeps_previous_credentials() {
    let server = MockServer::start().await;
    let expected = BASE64.encode("test@example.com:password");
    Mock::given(method("GET"))
        .and(path("/cb/version/"))
        .and(header(HEADER_CYBOZU_AUTHORIZATION, expected.as_str()))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    // Token mode without a token fails validation and must not be applied.
    let mut options = AuthOptions::default();
    options.use_api_token = Some(true);
    let err = client.change_auth_options(options).unwrap_err();
    assert!(err.is_missing_option());

    client.connection_test().await.unwrap();
}

#[tokio::test]
async fn connection_test_status_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cb/version/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).connection_test().await.unwrap_err();
    assert!(err.is_auth_error());
    assert!(matches!(err.kind, ErrorKind::FailedAuth { status: 401 }));

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cb/version/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = client_for(&server).connection_test().await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Http { status: 500, .. }));
}

#[tokio::test]
async fn connection_test_with_basic_auth_layer() {
    let server = MockServer::start().await;
    let basic = format!("Basic {}", BASE64.encode("basic_user:basic_pass"));
    Mock::given(method("GET"))
        .and(path("/cb/version/"))
        .and(header("Authorization", basic.as_str()))
        .and(header_exists(HEADER_CYBOZU_AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = ConnectionConfig::builder()
        .domain("cybozu.com")
        .subdomain("test")
        .login("test@example.com")
        .password("password")
        .use_basic(true)
        .basic_auth("basic_user", "basic_pass")
        .build()
        .unwrap();
    let client = CybozuClient::new(config).unwrap().with_base_url(server.uri());
    client.connection_test().await.unwrap();
}

#[tokio::test]
async fn kintone_records_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/k/v1/records.json"))
        .and(body_partial_json(serde_json::json!({"app": 7})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ids": ["1"], "revisions": ["1"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/k/v1/records.json"))
        .and(query_param("app", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "records": [{"title": {"type": "SINGLE_LINE_TEXT", "value": "hello"}}],
            "totalCount": "1"
        })))
        .mount(&server)
        .await;

    let api = KintoneApi::new(client_for(&server));
    let record = serde_json::json!({"title": {"value": "hello"}});
    let created = api.records().post(7, &[record]).await.unwrap();
    assert_eq!(created.ids, vec!["1"]);

    let fetched = api.records().get(7, "", None, true).await.unwrap();
    assert_eq!(fetched.records[0]["title"]["value"], "hello");
    assert_eq!(fetched.total_count.as_deref(), Some("1"));
}

#[tokio::test]
async fn csv_export_import_flow() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/csv/user.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("code,name\nuser1,User One\n"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/file.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "fileKey": "upload-key"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/csv/user.json"))
        .and(body_partial_json(serde_json::json!({"fileKey": "upload-key"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "9"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/csv/result.json"))
        .and(query_param("id", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "done": true, "success": true, "errors": []
        })))
        .mount(&server)
        .await;

    let api = UserApi::new(client_for(&server));

    let export = api.csv().get(CsvKind::User).await.unwrap();
    assert!(export.contains("user1"));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{export}").unwrap();

    let task = api.csv().post(CsvKind::User, file.path()).await.unwrap();
    assert_eq!(task, "9");

    let status = api.csv().result(&task).await.unwrap();
    assert!(status.done && status.success);
}
