//! Index page listing every document in the corpus.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::error::ServerError;
use crate::handlers::blocking;
use crate::state::AppState;
use crate::templates;

/// Handle GET /.
pub(crate) async fn get_index(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let worker = Arc::clone(&state);
    let tree_html = blocking(move || worker.site.index_html().map_err(ServerError::Scan)).await?;

    Ok(Html(templates::index_page(&state.title, &tree_html)))
}
