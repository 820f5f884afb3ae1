use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_outside_leptos_is_not_found() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
