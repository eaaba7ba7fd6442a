use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::cookie::Jar;
use serde::Deserialize;
use webfetch::net::{ClientTransport, Connectivity, JarCookies};
use webfetch::{ContentType, FetchError, Fetcher, Header, Method};

struct AlwaysOnline;

#[async_trait]
impl Connectivity for AlwaysOnline {
    async fn is_reachable(&self) -> bool {
        true
    }
}

/// A fetcher wired to the real reqwest transport, with the reachability
/// probe stubbed out so tests never depend on the host's network.
fn fetcher() -> Fetcher {
    let jar = Arc::new(Jar::default());
    let client = Client::builder()
        .cookie_provider(jar.clone())
        .build()
        .unwrap();

    Fetcher::with_parts(
        Arc::new(ClientTransport::new(client)),
        Arc::new(AlwaysOnline),
        Arc::new(JarCookies::new(jar)),
    )
}

#[tokio::test]
async fn test_get_success_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/item")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name": "test", "value": 42}"#)
        .create_async()
        .await;

    let url = format!("{}/item", server.url()).parse().unwrap();
    let response = fetcher().get(url).await;

    mock.assert_async().await;
    assert!(response.ok());
    assert_eq!(response.status(), 200);
    assert!(response.error().is_none());
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );

    #[derive(Deserialize)]
    struct Item {
        name: String,
        value: i32,
    }
    let item: Item = response.json().unwrap();
    assert_eq!(item.name, "test");
    assert_eq!(item.value, 42);
}

#[tokio::test]
async fn test_not_found_is_not_an_error_value() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body("gone")
        .expect(3)
        .create_async()
        .await;

    let url = format!("{}/missing", server.url()).parse().unwrap();
    let response = fetcher().get(url).await;

    // Non-2xx consumes all three attempts and is delivered as-is.
    mock.assert_async().await;
    assert!(!response.ok());
    assert_eq!(response.status(), 404);
    assert!(response.error().is_none());
    assert_eq!(response.text(), Some("gone".to_string()));
}

#[tokio::test]
async fn test_post_sends_headers_and_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/submit")
        .match_header("content-type", "application/json")
        .match_header("authorization", "Bearer tok")
        .match_body(r#"{"name":"a"}"#)
        .with_status(201)
        .create_async()
        .await;

    let headers = [
        Header::ContentType(ContentType::Json),
        Header::Authorization(webfetch::Authorization::Bearer, "tok".to_string()),
    ];
    let url = format!("{}/submit", server.url()).parse().unwrap();
    let response = fetcher()
        .fetch(url, &headers, Method::Post, Some(br#"{"name":"a"}"#.to_vec()))
        .await;

    mock.assert_async().await;
    assert!(response.ok());
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_duplicate_headers_last_one_reaches_the_wire() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/dup")
        .match_header("x-test", "2")
        .with_status(200)
        .create_async()
        .await;

    let headers = [
        Header::Custom("X-Test".to_string(), "1".to_string()),
        Header::Custom("X-Test".to_string(), "2".to_string()),
    ];
    let url = format!("{}/dup", server.url()).parse().unwrap();
    let response = fetcher().fetch(url, &headers, Method::Get, None).await;

    mock.assert_async().await;
    assert!(response.ok());
}

#[tokio::test]
async fn test_persistent_server_error_makes_exactly_three_calls() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/down")
        .with_status(500)
        .with_body("boom")
        .expect(3)
        .create_async()
        .await;

    let url = format!("{}/down", server.url()).parse().unwrap();
    let response = fetcher().get(url).await;

    mock.assert_async().await;
    assert_eq!(response.status(), 500);
    assert!(!response.ok());
    assert!(response.error().is_none());
}

#[tokio::test]
async fn test_cookies_set_by_the_server_are_visible() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/login")
        .with_status(200)
        .with_header("set-cookie", "session=abc123")
        .create_async()
        .await;

    let fetcher = fetcher();
    let url = format!("{}/login", server.url()).parse().unwrap();
    let response = fetcher.get(url).await;

    assert!(response.ok());
    let cookies = response.cookies(fetcher.cookie_store().as_ref());
    assert_eq!(cookies.get("session").unwrap(), "abc123");
}

#[tokio::test]
async fn test_fetch_str_accepts_a_url_string() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/str")
        .with_status(200)
        .create_async()
        .await;

    let response = fetcher()
        .fetch_str(&format!("{}/str", server.url()), &[], Method::Get, None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(response.ok());
}

#[tokio::test]
async fn test_fetch_str_rejects_a_malformed_url() {
    let result = fetcher().fetch_str("not a url", &[], Method::Get, None).await;
    assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
}

#[test]
fn test_fetch_blocking_end_to_end() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/sync")
        .with_status(200)
        .with_body("done")
        .create();

    let url = format!("{}/sync", server.url()).parse().unwrap();
    let response = fetcher().fetch_blocking(url, &[], Method::Get, None);

    mock.assert();
    assert!(response.ok());
    assert_eq!(response.text(), Some("done".to_string()));
}

#[test]
fn test_callback_delivery_from_a_blocking_caller() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/cb").with_status(200).create();

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (tx, rx) = std::sync::mpsc::channel();

    runtime.block_on(async {
        let url = format!("{}/cb", server.url()).parse().unwrap();
        fetcher().fetch_with_callback(url, &[], Method::Get, None, move |response| {
            tx.send(response.status()).unwrap();
        });
    });

    let status = rx.recv_timeout(std::time::Duration::from_secs(10)).unwrap();
    assert_eq!(status, 200);
}
