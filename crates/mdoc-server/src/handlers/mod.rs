//! HTTP request handlers.

pub(crate) mod index;
pub(crate) mod navigation;
pub(crate) mod pages;

use crate::error::ServerError;

/// Run filesystem-bound site work off the async executor.
pub(crate) async fn blocking<T, F>(work: F) -> Result<T, ServerError>
where
    F: FnOnce() -> Result<T, ServerError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await?
}
