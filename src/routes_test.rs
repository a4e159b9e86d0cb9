use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;

async fn get_status(uri: &str) -> (StatusCode, Option<String>) {
    let app: Router = service_routes();
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_owned());
    (response.status(), location)
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(get_status("/healthz").await, (StatusCode::OK, None));
}

#[tokio::test]
async fn login_path_redirects_to_root_view() {
    assert_eq!(
        get_status("/login").await,
        (StatusCode::TEMPORARY_REDIRECT, Some("/".to_owned()))
    );
}

#[tokio::test]
async fn unknown_service_path_is_not_found() {
    assert_eq!(get_status("/api/rooms").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn root_renders_login_view() {
    let options = LeptosOptions::builder().output_name("hostel-portal").build();
    let response = app(options)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Sign In"), "{html}");
    assert!(html.contains("STUDENT"), "{html}");
}
