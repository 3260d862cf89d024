//! Embedded static assets under `/static/`.

use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Handle GET /static/{file}.
pub(crate) async fn serve_asset(Path(file): Path<String>) -> Response {
    match mdoc_assets::get(&file) {
        Some(content) => (
            [(header::CONTENT_TYPE, mdoc_assets::content_type_for(&file))],
            content.into_owned(),
        )
            .into_response(),
        None => {
            tracing::debug!(file = %file, "Static asset not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
