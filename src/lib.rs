pub mod assets;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::{AppState, router};

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Router with every middleware the server runs with.
pub fn app(state: AppState) -> axum::Router {
    router(state)
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
