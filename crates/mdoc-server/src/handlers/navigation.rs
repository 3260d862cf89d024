//! Navigation API endpoint.
//!
//! Returns the corpus tree as JSON for clients that build their own menus.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use mdoc_site::NavNode;
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::blocking;
use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Top-level nodes (children of the corpus root).
    tree: Vec<NavNode>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigationResponse>, ServerError> {
    let root = blocking(move || state.site.navigation().map_err(ServerError::Scan)).await?;

    Ok(Json(NavigationResponse {
        tree: root.into_children(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_response_serialization() {
        let response = NavigationResponse {
            tree: vec![NavNode::Document {
                name: "guide".to_owned(),
                route: "/guide".to_owned(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["tree"][0]["kind"], "document");
        assert_eq!(json["tree"][0]["name"], "guide");
        assert_eq!(json["tree"][0]["route"], "/guide");
    }
}
