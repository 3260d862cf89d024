//! `mdoc serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdoc_config::{CliSettings, Config};
use mdoc_server::{ServerConfig, run_server};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args, Debug)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover mdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long, env = "MDOC_DIR")]
    dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Site title (overrides config).
    #[arg(short, long)]
    title: Option<String>,

    /// Enable verbose output (request and render logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, the source directory is
    /// missing, or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        config.validate_source_dir()?;

        let server_config = ServerConfig::from(&config);
        Output::new().serving(
            &format!("http://{}:{}", server_config.host, server_config.port),
            &server_config.source_dir,
            &server_config.title,
        );

        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    }

    /// Collect flag overrides for the loaded configuration.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            host: self.host.clone(),
            port: self.port,
            source_dir: self.dir.clone(),
            title: self.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: ServeArgs,
    }

    fn parse(argv: &[&str]) -> ServeArgs {
        Harness::try_parse_from(std::iter::once("serve").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_cli_settings_from_flags() {
        let args = parse(&["--host", "0.0.0.0", "-p", "8080", "-d", "notes", "-t", "Notes"]);

        let settings = args.cli_settings();

        assert_eq!(settings.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(settings.port, Some(8080));
        assert_eq!(settings.source_dir.as_deref(), Some(Path::new("notes")));
        assert_eq!(settings.title.as_deref(), Some("Notes"));
    }

    #[test]
    fn test_cli_settings_empty_without_flags() {
        let args = parse(&["--config", "site/mdoc.toml"]);

        let settings = args.cli_settings();

        assert!(settings.host.is_none());
        assert!(settings.port.is_none());
        assert!(settings.title.is_none());
        assert_eq!(args.config.as_deref(), Some(Path::new("site/mdoc.toml")));
        assert!(!args.verbose);
    }
}
