use crate::services::{Interactions, PageAssembler};
use axum::{
    Router,
    body::Body,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<PageAssembler>,
    pub static_dir: Option<PathBuf>,
}

pub fn pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/{*path}", get(page_handler))
}

async fn index_handler(
    State(state): State<AppState>,
    Query(interactions): Query<Interactions>,
) -> Html<String> {
    let page = state.assembler.assemble("/", &interactions).await;
    Html(page.html())
}

async fn page_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(interactions): Query<Interactions>,
    request: Request<Body>,
) -> Response {
    if !is_page_path(&path) {
        return serve_static(state.static_dir.as_ref(), request).await;
    }

    let page = state
        .assembler
        .assemble(&format!("/{}", path), &interactions)
        .await;
    Html(page.html()).into_response()
}

// pages are `.html` files or extension-less paths; anything else is an asset
pub fn is_page_path(path: &str) -> bool {
    let last = path.rsplit('/').next().unwrap_or(path);
    last.ends_with(".html") || !last.contains('.')
}

async fn serve_static(static_dir: Option<&PathBuf>, request: Request<Body>) -> Response {
    let Some(dir) = static_dir else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match ServeDir::new(dir).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("Static file service failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
