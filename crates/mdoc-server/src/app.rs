//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// `/static/` and `/api/` take precedence over documents of the same path.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index::get_index))
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/static/{*file}", get(static_files::serve_asset))
        .route("/{*path}", get(handlers::pages::get_page))
        .with_state(state);

    for layer in security::layers() {
        router = router.layer(layer);
    }

    router.layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{HeaderMap, Request, StatusCode, header};
    use mdoc_renderer::{DEFAULT_THEME, HtmlRenderer};
    use mdoc_site::Site;
    use mdoc_storage::{MockStorage, StorageErrorKind};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    fn router(storage: MockStorage) -> Router {
        let site = Site::new(
            Arc::new(storage),
            Arc::new(HtmlRenderer::new(DEFAULT_THEME).unwrap()),
        );
        create_router(Arc::new(AppState {
            site,
            title: "Team Docs".to_owned(),
        }))
    }

    fn corpus() -> MockStorage {
        MockStorage::new()
            .with_file("README.md", "# Readme\n\nSee [setup](guide/setup.md).")
            .with_file(
                "guide/setup.md",
                "---\ntitle: Setup Guide\nauthor: Jane\n---\n# Setup\n\nBack to [readme](../README.md).",
            )
            .with_file("guide/notes.md", "plain notes")
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_lists_corpus() {
        let (status, headers, body) = get(router(corpus()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=utf-8");
        assert!(body.contains("<title>Index - Team Docs</title>"));
        assert!(body.contains("<h1>File Index</h1>"));
        assert!(body.contains("<span class=\"folder\">guide</span>"));
        assert!(body.contains("<a href=\"/guide/setup\" class=\"file\">setup</a>"));
        assert!(body.contains("<a href=\"/README\" class=\"file\">README</a>"));
    }

    #[tokio::test]
    async fn test_document_page() {
        let (status, _, body) = get(router(corpus()), "/guide/setup").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Setup Guide - Team Docs</title>"));
        assert!(body.contains("<span class=\"current-path\">/guide/setup</span>"));
        assert!(body.contains("<p class=\"print-author\">Jane</p>"));
        assert!(body.contains("<h1 id=\"setup\">Setup</h1>"));
        assert!(body.contains("href=\"/README\""));
    }

    #[tokio::test]
    async fn test_document_title_defaults_to_file_name() {
        let (status, _, body) = get(router(corpus()), "/guide/notes").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>notes - Team Docs</title>"));
        assert!(!body.contains("print-author"));
    }

    #[tokio::test]
    async fn test_root_document_links() {
        let (_, _, body) = get(router(corpus()), "/README").await;

        assert!(body.contains("href=\"/guide/setup\""));
    }

    #[tokio::test]
    async fn test_missing_document_is_404() {
        let (status, _, body) = get(router(corpus()), "/guide/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "File not found");
    }

    #[tokio::test]
    async fn test_traversal_is_400() {
        let (status, _, _) = get(router(corpus()), "/guide/%2E%2E/%2E%2E/secret").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_utf8_still_renders() {
        let storage = MockStorage::new().with_file("bad.md", b"# caf\xe9\n\nok".to_vec());

        let (status, _, body) = get(router(storage), "/bad").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("caf\u{fffd}</h1>"));
        assert!(body.contains("<p>ok</p>"));
    }

    #[tokio::test]
    async fn test_scan_failure_is_500() {
        let storage = MockStorage::new().with_scan_failure(StorageErrorKind::PermissionDenied);

        let (status, _, body) = get(router(storage), "/").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("Error scanning directory: "));
    }

    #[tokio::test]
    async fn test_navigation_api() {
        let (status, headers, body) = get(router(corpus()), "/api/navigation").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tree": [
                    {
                        "kind": "directory",
                        "name": "guide",
                        "children": [
                            {"kind": "document", "name": "notes", "route": "/guide/notes"},
                            {"kind": "document", "name": "setup", "route": "/guide/setup"},
                        ],
                    },
                    {"kind": "document", "name": "README", "route": "/README"},
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_static_stylesheet() {
        let (status, headers, body) = get(router(corpus()), "/static/style.css").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/css; charset=utf-8");
        assert!(body.contains(".file-tree"));
    }

    #[tokio::test]
    async fn test_static_missing_is_404() {
        let (status, _, _) = get(router(corpus()), "/static/missing.css").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_security_headers_on_every_response() {
        for uri in ["/", "/guide/setup", "/guide/missing", "/static/style.css"] {
            let (_, headers, _) = get(router(corpus()), uri).await;

            assert_eq!(headers["x-content-type-options"], "nosniff", "{uri}");
            assert_eq!(headers["x-frame-options"], "DENY", "{uri}");
            assert!(headers.contains_key("content-security-policy"), "{uri}");
        }
    }
}
