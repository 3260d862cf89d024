//! Document pages.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;

use crate::error::ServerError;
use crate::handlers::blocking;
use crate::state::AppState;
use crate::templates;

/// Handle GET /{path}.
///
/// `path` is the URL path without leading slash and without extension,
/// e.g. `guide/setup` for `guide/setup.md`.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let worker = Arc::clone(&state);
    let page = blocking(move || {
        worker
            .site
            .render(&path)
            .map_err(|err| ServerError::from_render(&path, err))
    })
    .await?;

    tracing::debug!(path = %page.path, title = %page.title, "Served document");

    Ok(Html(templates::document_page(&state.title, &page)))
}
