use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use pantrycam_capture::Analyzer;
use pantrycam_shared::handoff::{CAPTURE_ROUTE, PLANNING_ROUTE, SHOPPING_ROUTE};

use crate::assets::AssetsService;
use crate::template::{NotFoundTemplate, Template};

mod capture;
mod health;
mod planning;
mod shopping;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub analyzer: Arc<dyn Analyzer>,
}

impl AppState {
    pub fn new(config: crate::config::Config, analyzer: Arc<dyn Analyzer>) -> Self {
        Self { config, analyzer }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    let max_upload_bytes = app_state.config.capture.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health))
        .route(
            CAPTURE_ROUTE,
            get(capture::page)
                .post(capture::action)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(PLANNING_ROUTE, get(planning::page))
        .route(SHOPPING_ROUTE, get(shopping::page))
        .route("/lista/toggle/{index}", post(shopping::toggle))
        .route("/lista/reset", post(shopping::reset))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
