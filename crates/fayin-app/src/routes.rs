use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppContext;

pub fn build_router(context: AppContext) -> Router {
    let static_dir = context.config.server.static_dir.clone();
    Router::new()
        .route("/", get(handlers::landing))
        .route("/results", get(handlers::results))
        .route("/api/search", get(handlers::api_search))
        .route("/api/audio/{label}", get(handlers::api_audio))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(context)
        .layer(TraceLayer::new_for_http())
}

/// Resolves on ctrl-c or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
