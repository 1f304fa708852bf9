use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{event, Level};

use crate::{error::Result, AppState, Asset, VERSION};

#[derive(Serialize)]
struct VersionInfo {
    version: &'static str,
}

async fn version_handler() -> Json<VersionInfo> {
    Json(VersionInfo { version: VERSION })
}

/// return an embedded frontend asset
async fn asset_handler(Path(path): Path<String>) -> Response {
    match Asset::get(&path) {
        Some(file) => (
            [(header::CONTENT_TYPE, file.metadata.mimetype().to_owned())],
            file.data,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn index(
    Extension(state): Extension<Arc<AppState>>,
) -> std::result::Result<Html<String>, StatusCode> {
    state.index.clone().map(Html).ok_or(StatusCode::NOT_FOUND)
}

pub(crate) fn router(app_state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/static/*path", get(asset_handler))
        .route("/api/version", get(version_handler));

    let app = if app_state.prefix == "/" {
        router
    } else {
        Router::new()
            .nest(app_state.prefix.as_str(), router.clone())
            .merge(router)
    };

    app.layer(
        TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)),
    )
    .layer(Extension(app_state))
}

pub(crate) async fn http_server(
    host: IpAddr,
    port: u16,
    app_state: Arc<AppState>,
    token: CancellationToken,
) -> Result<()> {
    let listener = TcpListener::bind(SocketAddr::from((host, port))).await?;
    event!(Level::INFO, "HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(app_state))
        .with_graceful_shutdown(async move { token.cancelled().await })
        .await?;

    event!(Level::INFO, "HTTP server stopped");

    Ok(())
}
