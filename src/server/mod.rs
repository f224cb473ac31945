//! HTTP server for the landing blog section, blog pages and a JSON API

mod error;

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

use crate::cms::CmsError;
use crate::templates::{self, PostCard, PostView};
use crate::Site;

/// Server state
struct ServerState {
    site: Site,
}

/// Build the router for a site
pub fn router(site: Site) -> Router {
    let state = Arc::new(ServerState { site });

    Router::new()
        .route("/", get(landing_handler))
        .route("/blog", get(index_handler))
        .route("/blog/:slug", get(post_handler))
        .route("/api/posts", get(api_posts_handler))
        .route("/api/posts/:slug", get(api_post_handler))
        .route("/api/slugs", get(api_slugs_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let app = router(site.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Response for a page whose CMS query failed
fn unavailable(err: CmsError) -> Response {
    tracing::error!("CMS query failed: {}", err);
    (
        StatusCode::BAD_GATEWAY,
        Html("<h1>Content is temporarily unavailable</h1>".to_string()),
    )
        .into_response()
}

async fn landing_handler(State(state): State<Arc<ServerState>>) -> Response {
    let site = &state.site;
    match site.posts.list_latest(site.config.blog.latest_limit).await {
        Ok(posts) => Html(templates::render_landing(&site.config, &posts)).into_response(),
        Err(e) => unavailable(e),
    }
}

async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    let site = &state.site;
    match site.posts.list_published().await {
        Ok(posts) => Html(templates::render_index(&site.config, &posts)).into_response(),
        Err(e) => unavailable(e),
    }
}

async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    let site = &state.site;
    match site.posts.get_by_slug(&slug).await {
        Ok(Some(post)) => Html(templates::render_post(&site.config, &post)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Html(templates::render_not_found(&site.config)),
        )
            .into_response(),
        Err(e) => unavailable(e),
    }
}

async fn api_posts_handler(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Vec<PostCard>>, ApiError> {
    let site = &state.site;
    let posts = site.posts.list_published().await?;
    Ok(Json(
        posts
            .iter()
            .map(|p| PostCard::new(p, &site.config))
            .collect(),
    ))
}

async fn api_post_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Result<Json<PostView>, ApiError> {
    let post = state
        .site
        .posts
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("post {:?}", slug)))?;
    Ok(Json(PostView::new(&post)))
}

async fn api_slugs_handler(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.site.posts.list_slugs().await?))
}
