//! HTTP router serving the landing page and its crawl files

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    extract::State,
    handler::Handler,
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use jurassic_core::Config;
use jurassic_generator::{HomePageRenderer, RobotsGenerator, SitemapGenerator, html::HtmlError};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Immutable state shared by all handlers.
#[derive(Debug)]
pub struct AppState {
    renderer: HomePageRenderer,
    robots: RobotsGenerator,
    sitemap: SitemapGenerator,
    static_dir: Option<PathBuf>,
}

impl AppState {
    /// Create the server state from configuration.
    pub fn new(config: Config) -> Self {
        let static_dir = config.server.static_dir.as_ref().map(PathBuf::from);
        Self {
            robots: RobotsGenerator::new(config.clone()),
            sitemap: SitemapGenerator::new(config.clone()),
            renderer: HomePageRenderer::new(config),
            static_dir,
        }
    }
}

/// Error rendering a page.
struct RenderFailure(HtmlError);

impl IntoResponse for RenderFailure {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

impl From<HtmlError> for RenderFailure {
    fn from(err: HtmlError) -> Self {
        Self(err)
    }
}

/// Create the application router.
///
/// Unmatched paths are served from the static directory when one is configured,
/// then fall back to the 404 page. `/robots.txt` is only routed while robots
/// generation is enabled, so a hand-written file in the static directory is
/// served otherwise.
pub fn create_router(state: Arc<AppState>) -> Router {
    let not_found = not_found_handler.with_state(state.clone());

    let mut router = Router::new()
        .route("/", get(home_handler))
        .route("/sitemap.xml", get(sitemap_handler));

    if state.robots.is_enabled() {
        router = router.route("/robots.txt", get(robots_handler));
    }

    let router = match &state.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir).not_found_service(not_found)),
        None => router.fallback_service(not_found),
    };

    router.with_state(state).layer(TraceLayer::new_for_http())
}

/// Render the landing page fresh for each request.
async fn home_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, RenderFailure> {
    let page = state.renderer.render()?;
    Ok(Html(page.html))
}

async fn robots_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.robots.render().unwrap_or_default(),
    )
}

async fn sitemap_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        state.sitemap.render(Utc::now()),
    )
}

async fn not_found_handler(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "no route");
    (StatusCode::NOT_FOUND, Html(state.renderer.render_not_found(uri.path()))).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::Request,
    };
    use chrono::{DateTime, Datelike};
    use tower::ServiceExt;

    use super::*;

    async fn get_path(router: Router, path: &str) -> (StatusCode, Option<String>, String) {
        let response = router
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    fn router(config: Config) -> Router {
        create_router(Arc::new(AppState::new(config)))
    }

    #[tokio::test]
    async fn test_home_route() {
        let (status, content_type, body) = get_path(router(Config::default()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains(
            "<title>Jurassic Words | Dinosaur Facts, Word Games, Printables for Kids</title>"
        ));
        assert!(body.contains(&format!("&copy; {} Jurassic Words", Utc::now().year())));
    }

    #[tokio::test]
    async fn test_each_request_gets_fresh_timestamp() {
        let (_, _, body) = get_path(router(Config::default()), "/").await;

        let marker = r#"<time datetime=""#;
        let start = body.find(marker).unwrap() + marker.len();
        let end = start + body[start..].find('"').unwrap();
        let stamp = DateTime::parse_from_rfc3339(&body[start..end]).unwrap();
        assert!(stamp.with_timezone(&Utc) <= Utc::now());
    }

    #[tokio::test]
    async fn test_robots_route() {
        let (status, content_type, body) = get_path(router(Config::default()), "/robots.txt").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        assert!(body.starts_with("User-agent: *"));
    }

    #[tokio::test]
    async fn test_robots_disabled_is_not_found() {
        let mut config = Config::default();
        config.robots.enabled = false;

        let (status, _, _) = get_path(router(config), "/robots.txt").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_robots_disabled_serves_static_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("robots.txt"), "User-agent: *\nDisallow: /\n").unwrap();

        let mut config = Config::default();
        config.robots.enabled = false;
        config.server.static_dir = Some(dir.path().to_string_lossy().to_string());

        let (status, _, body) = get_path(router(config), "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "User-agent: *\nDisallow: /\n");
    }

    #[tokio::test]
    async fn test_sitemap_route() {
        let (status, content_type, body) =
            get_path(router(Config::default()), "/sitemap.xml").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("application/xml"));
        assert!(body.contains("<loc>https://www.jurassicwords.com/</loc>"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (status, _, body) = get_path(router(Config::default()), "/velociraptors").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("/velociraptors"));
    }

    #[tokio::test]
    async fn test_static_dir_serves_assets() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("og-image.jpg"), b"not really a jpeg").unwrap();

        let mut config = Config::default();
        config.server.static_dir = Some(dir.path().to_string_lossy().to_string());

        let (status, _, body) = get_path(router(config.clone()), "/og-image.jpg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "not really a jpeg");

        let (status, _, _) = get_path(router(config), "/missing.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
