//! HTTP server: page routes and static files

use anyhow::Result;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{ContentError, MarkdownRenderer, PostRepository};
use crate::layout::{self, NavigationMode, Rendered};
use crate::pages::{self, Fragment};
use crate::Site;

/// Set by htmx on every request it issues
pub const HX_REQUEST_HEADER: &str = "hx-request";
/// Set by htmx when restoring history it no longer has cached
pub const HX_HISTORY_RESTORE_HEADER: &str = "hx-history-restore-request";

/// Server state shared by all handlers
struct AppState {
    config: SiteConfig,
    repo: PostRepository,
    markdown: MarkdownRenderer,
}

/// Why a page could not be produced
#[derive(Debug, Error)]
enum PageError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("page task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl NavigationMode {
    /// Decide the mode from request headers. A history restore asks for a
    /// partial swap but needs the full document.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let is_set = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false)
        };

        if is_set(HX_REQUEST_HEADER) && !is_set(HX_HISTORY_RESTORE_HEADER) {
            NavigationMode::Partial
        } else {
            NavigationMode::Full
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for NavigationMode
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(NavigationMode::from_headers(&parts.headers))
    }
}

/// Build the application router for a site
pub fn build_router(site: &Site) -> Router {
    let state = Arc::new(AppState {
        config: site.config.clone(),
        repo: site.repository(),
        markdown: MarkdownRenderer::new(),
    });

    Router::new()
        .route("/", get(index))
        .route("/blog", get(blog))
        .route("/blog/:slug", get(blog_post))
        .nest_service("/static", ServeDir::new(&site.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let app = build_router(site);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    tracing::info!("Serving posts from {:?}", site.posts_dir);
    tracing::info!("Server running at http://{}:{}", ip, port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Home page with the most recent posts
async fn index(State(state): State<Arc<AppState>>, mode: NavigationMode) -> Response {
    let limit = state.config.recent_posts;
    let repo = state.repo.clone();

    let posts = match run_blocking(move || repo.list_posts(Some(limit))).await {
        Ok(posts) => posts,
        Err(e) => return error_page(&state.config, e, mode),
    };

    let content = pages::compose_home(&state.config, &posts);
    page(StatusCode::OK, layout::render(&state.config, content, "Home", mode, true))
}

/// Blog listing page
async fn blog(State(state): State<Arc<AppState>>, mode: NavigationMode) -> Response {
    let repo = state.repo.clone();

    let posts = match run_blocking(move || repo.list_posts(None)).await {
        Ok(posts) => posts,
        Err(e) => return error_page(&state.config, e, mode),
    };

    let content = pages::compose_blog_list(&posts);
    page(StatusCode::OK, layout::render(&state.config, content, "Blog", mode, true))
}

/// Individual blog post page
async fn blog_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    mode: NavigationMode,
) -> Response {
    let worker = Arc::clone(&state);
    let result = run_blocking(move || {
        let post = worker.repo.get_post(&slug)?;
        let content = pages::compose_blog_post(&post, &worker.markdown);
        Ok((post.title, content))
    })
    .await;

    match result {
        Ok((title, content)) => page(
            StatusCode::OK,
            layout::render(&state.config, content, &title, mode, true),
        ),
        Err(e) => error_page(&state.config, e, mode),
    }
}

/// Filesystem reads and markdown rendering stay off the async workers
async fn run_blocking<T, F>(f: F) -> Result<T, PageError>
where
    F: FnOnce() -> Result<T, ContentError> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await??)
}

/// Turn a failure into an error page inside the normal layout
fn error_page(config: &SiteConfig, err: PageError, mode: NavigationMode) -> Response {
    let (status, title, content): (StatusCode, &str, Fragment) = match &err {
        PageError::Content(ContentError::NotFound { slug }) => {
            tracing::debug!("No post named {:?}", slug);
            (StatusCode::NOT_FOUND, "Not Found", pages::compose_not_found())
        }
        PageError::Content(ContentError::InvalidSlug { slug }) => {
            tracing::warn!("Rejected post identifier {:?}", slug);
            (StatusCode::BAD_REQUEST, "Bad Request", pages::compose_bad_request())
        }
        _ => {
            tracing::error!("Failed to build page: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error",
                pages::compose_error(
                    "500 - Something Went Wrong",
                    "This page could not be rendered.",
                ),
            )
        }
    };

    page(status, layout::render(config, content, title, mode, true))
}

fn page(status: StatusCode, rendered: Rendered) -> Response {
    (
        status,
        [(header::VARY, "HX-Request")],
        Html(rendered.into_html()),
    )
        .into_response()
}
