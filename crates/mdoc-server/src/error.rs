//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mdoc_site::SiteError;

/// Server error type.
///
/// The `Display` text is the response body, so it never carries
/// filesystem paths for client-side failures.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No document at the requested path.
    #[error("File not found")]
    NotFound(String),

    /// Request path escapes the corpus or is otherwise malformed.
    #[error("Invalid path")]
    InvalidPath(String),

    /// Corpus scan failed while building the index or navigation.
    #[error("Error scanning directory: {0}")]
    Scan(SiteError),

    /// Document was found but could not be rendered.
    #[error("Error rendering markdown: {0}")]
    Render(SiteError),

    /// Blocking task panicked or was cancelled.
    #[error("Internal server error")]
    Task(#[from] tokio::task::JoinError),
}

impl ServerError {
    /// Classify a failure from rendering the document at `path`.
    pub(crate) fn from_render(path: &str, err: SiteError) -> Self {
        if err.is_not_found() {
            Self::NotFound(path.to_owned())
        } else if err.is_invalid_path() {
            Self::InvalidPath(path.to_owned())
        } else {
            Self::Render(err)
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::Scan(_) | Self::Render(_) | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::NotFound(path) => tracing::debug!(path = %path, "Document not found"),
            Self::InvalidPath(path) => tracing::debug!(path = %path, "Rejected request path"),
            Self::Scan(_) | Self::Render(_) | Self::Task(_) => {
                tracing::error!(error = %self, status = status.as_u16(), "Request failed");
            }
        }

        (status, self.to_string()).into_response()
    }
}
