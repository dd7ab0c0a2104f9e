#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use pantrycam::{AppState, Config};
use pantrycam_capture::{Analyzer, MockAnalyzer};
use tower::ServiceExt;

pub const BOUNDARY: &str = "pantrycam-test-boundary";

pub fn create_test_app() -> Router {
    create_test_app_with(Arc::new(MockAnalyzer::default()))
}

pub fn create_test_app_with(analyzer: Arc<dyn Analyzer>) -> Router {
    let config = Config::load(None).expect("Failed to load config");

    create_test_app_with_config(config, analyzer)
}

pub fn create_test_app_with_config(config: Config, analyzer: Arc<dyn Analyzer>) -> Router {
    pantrycam::app(AppState::new(config, analyzer))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: Router, uri: &str, form: String) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_image(
    app: Router,
    field: &str,
    file_name: &str,
    content_type: &str,
    data: &[u8],
) -> Response<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
