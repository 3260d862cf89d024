//! HTTP server for mdoc.
//!
//! Serves a markdown corpus as a browsable site using axum:
//! - `/` renders the file index
//! - `/{path}` renders the document at `{path}.md`
//! - `/api/navigation` returns the navigation tree as JSON
//! - `/static/*` serves embedded assets
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use mdoc_server::{ServerConfig, run_server};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig {
//!     source_dir: PathBuf::from("docs"),
//!     ..ServerConfig::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (mdoc-server)
//!                        │
//!                        ├─► page handlers ──spawn_blocking──► Site (scan + render)
//!                        │
//!                        └─► static files (mdoc-assets)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;
mod templates;

use std::path::PathBuf;
use std::sync::Arc;

use mdoc_config::Config;
use mdoc_renderer::{DEFAULT_THEME, HtmlRenderer};
use mdoc_site::Site;
use mdoc_storage::FsStorage;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Markdown corpus root.
    pub source_dir: PathBuf,
    /// Site title shown in page chrome.
    pub title: String,
    /// Syntax highlighting theme.
    pub theme: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7331,
            source_dir: PathBuf::from("."),
            title: "mdoc".to_owned(),
            theme: DEFAULT_THEME.to_owned(),
        }
    }
}

impl From<&Config> for ServerConfig {
    fn from(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            source_dir: config.docs_resolved.source_dir.clone(),
            title: config.site.title.clone(),
            theme: config.render.theme.clone(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the theme is unknown, the address cannot be bound,
/// or the server fails while running.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let storage = Arc::new(FsStorage::new(config.source_dir.clone()));
    let renderer = Arc::new(HtmlRenderer::new(&config.theme)?);

    let state = Arc::new(AppState {
        site: Site::new(storage, renderer),
        title: config.title,
    });
    let app = app::create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        source_dir = %config.source_dir.display(),
        "Starting server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use mdoc_config::CliSettings;

    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("mdoc.toml");
        std::fs::write(
            &config_path,
            "[server]\nport = 9000\n[docs]\nsource_dir = \"docs\"\n[site]\ntitle = \"Handbook\"\n",
        )
        .unwrap();
        let settings = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            ..CliSettings::default()
        };
        let config = Config::load(Some(config_path.as_path()), Some(&settings)).unwrap();

        let server = ServerConfig::from(&config);

        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 9000);
        assert_eq!(server.source_dir, temp.path().join("docs"));
        assert_eq!(server.title, "Handbook");
        assert_eq!(server.theme, DEFAULT_THEME);
    }

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7331);
        assert_eq!(config.source_dir, Path::new("."));
    }
}
