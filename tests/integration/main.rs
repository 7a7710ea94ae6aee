//! End-to-end tests of the HTTP surface.
//!
//! Requests are driven through the public router with `oneshot`, so no
//! socket is bound.

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::response::Response;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use lab_api::api::create_router;

async fn send(method: Method, uri: &str) -> Response {
    create_router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get(uri: &str) -> (StatusCode, HeaderMap, String) {
    let response = send(Method::GET, uri).await;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

fn assert_cors(headers: &HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        headers["access-control-allow-headers"],
        "Content-Type, Authorization"
    );
}

#[tokio::test]
async fn ping() {
    let (status, headers, body) = get("/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"pong","status":"healthy"}"#);
    assert_eq!(headers["content-type"], "application/json");
    assert_cors(&headers);
}

#[tokio::test]
async fn health() {
    let (status, _, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"service":"Go API with Gin","status":"running","version":"1.0.0"}"#
    );
}

#[tokio::test]
async fn user_echoes_any_segment() {
    for id in ["42", "abc", "-1", "0x1F", "john.doe"] {
        let (status, _, body) = get(&format!("/user/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            format!(r#"{{"user_id":"{id}","message":"User retrieved successfully"}}"#)
        );
    }
}

#[tokio::test]
async fn user_segment_is_percent_decoded() {
    let (_, _, body) = get("/user/john%20doe").await;
    assert_eq!(
        body,
        r#"{"user_id":"john doe","message":"User retrieved successfully"}"#
    );
}

#[tokio::test]
async fn search_without_q_is_bad_request() {
    let (status, headers, body) = get("/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Query parameter 'q' is required"}"#);
    assert_cors(&headers);
}

#[tokio::test]
async fn search_with_empty_q_is_bad_request() {
    let (status, _, body) = get("/search?q=&limit=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Query parameter 'q' is required"}"#);
}

#[tokio::test]
async fn search_defaults() {
    let (status, _, body) = get("/search?q=foo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"query":"foo","limit":"10","page":"1","results":[]}"#
    );
}

#[tokio::test]
async fn search_with_limit_and_page() {
    let (status, _, body) = get("/search?q=foo&limit=5&page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"query":"foo","limit":"5","page":"2","results":[]}"#);
}

#[tokio::test]
async fn search_empty_values_fall_back_to_defaults() {
    let (_, _, body) = get("/search?q=foo&limit=&page=").await;
    assert_eq!(
        body,
        r#"{"query":"foo","limit":"10","page":"1","results":[]}"#
    );
}

#[tokio::test]
async fn search_values_stay_strings() {
    let (_, _, body) = get("/search?q=a+b&limit=ten&page=007").await;
    assert_eq!(
        body,
        r#"{"query":"a b","limit":"ten","page":"007","results":[]}"#
    );
}

#[tokio::test]
async fn user_posts_with_filters() {
    let (status, _, body) = get("/user/42/posts?category=tech&sort=name").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"user_id":"42","category":"tech","sort":"name","posts":[]}"#
    );
}

#[tokio::test]
async fn user_posts_defaults() {
    let (status, _, body) = get("/user/42/posts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"user_id":"42","category":"all","sort":"date","posts":[]}"#
    );
}

#[tokio::test]
async fn options_preflight_on_any_path() {
    for uri in ["/ping", "/search", "/user/42/posts", "/does/not/exist"] {
        let response = send(Method::OPTIONS, uri).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT, "{uri}");
        assert_cors(response.headers());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn unknown_path_is_not_found_with_cors() {
    let (status, headers, _) = get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_cors(&headers);
}

#[tokio::test]
async fn wrong_method_keeps_cors_headers() {
    let response = send(Method::POST, "/ping").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_cors(response.headers());
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    for uri in [
        "/ping",
        "/health",
        "/user/7",
        "/search?q=x&page=3",
        "/search",
        "/user/7/posts?sort=title",
    ] {
        let first = get(uri).await;
        let second = get(uri).await;
        assert_eq!(first.0, second.0, "{uri}");
        assert_eq!(first.2, second.2, "{uri}");
    }
}

#[tokio::test]
async fn user_segment_with_invalid_utf8_is_echoed_lossily() {
    let (status, headers, body) = get("/user/%FF").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["content-type"], "application/json");

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "user_id": "\u{FFFD}",
            "message": "User retrieved successfully",
        })
    );
}

#[tokio::test]
async fn user_posts_with_invalid_utf8_segment_is_echoed_lossily() {
    let (status, _, body) = get("/user/%FF/posts?sort=name").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "user_id": "\u{FFFD}",
            "category": "all",
            "sort": "name",
            "posts": [],
        })
    );
}
