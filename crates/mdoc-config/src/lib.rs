//! Configuration management for mdoc.
//!
//! Parses `mdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `site.title`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override site title.
    pub title: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdoc.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Site presentation configuration.
    pub site: SiteConfig,
    /// Markdown rendering configuration.
    pub render: RenderConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7331,
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Root directory of the markdown corpus.
    pub source_dir: PathBuf,
}

/// Site presentation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown in page headers and browser tabs.
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "mdoc".to_owned(),
        }
    }
}

/// Markdown rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Bundled syntax highlighting theme for fenced code.
    pub theme: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: mdoc_renderer::DEFAULT_THEME.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`MDOC_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdoc.toml` in current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(title) = &settings.title {
            self.site.title.clone_from(title);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            docs: DocsConfigRaw::default(),
            site: SiteConfig::default(),
            render: RenderConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.to_path_buf(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading. Does not touch the filesystem;
    /// see [`Config::validate_source_dir`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }
        require_non_empty(&self.render.theme, "render.theme")?;
        Ok(())
    }

    /// Check that the resolved source directory exists and is a directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the offending path.
    pub fn validate_source_dir(&self) -> Result<(), ConfigError> {
        let dir = &self.docs_resolved.source_dir;
        if !dir.exists() {
            return Err(ConfigError::Validation(format!(
                "directory '{}' does not exist",
                dir.display()
            )));
        }
        if !dir.is_dir() {
            return Err(ConfigError::Validation(format!(
                "'{}' is not a directory",
                dir.display()
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        Ok(())
    }

    /// Resolve relative paths against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let source_dir = self.docs.source_dir.as_deref().unwrap_or(".");
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(source_dir),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/srv/notes"));

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7331);
        assert_eq!(config.site.title, "mdoc");
        assert_eq!(config.render.theme, "base16-mocha.dark");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/srv/notes"));
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.server.port, 7331);
        assert_eq!(config.site.title, "mdoc");
        assert!(config.docs.source_dir.is_none());
    }

    #[test]
    fn test_parse_all_sections() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 8080

[docs]
source_dir = "wiki"

[site]
title = "Team Wiki"

[render]
theme = "InspiredGitHub"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site.title, "Team Wiki");
        assert_eq!(config.render.theme, "InspiredGitHub");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/project/wiki"));
    }

    #[test]
    fn test_resolve_paths_defaults_to_config_dir() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/project/."));
    }

    #[test]
    fn test_unknown_field_type_is_parse_error() {
        let result: Result<Config, _> = toml::from_str("[server]\nport = \"high\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn test_apply_cli_settings_overrides_only_given_fields() {
        let mut config = Config::default_with_base(Path::new("/base"));
        let settings = CliSettings {
            port: Some(9000),
            title: Some("Handbook".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&settings);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.site.title, "Handbook");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/base"));
    }

    #[test]
    fn test_apply_cli_settings_source_dir_and_host() {
        let mut config = Config::default_with_base(Path::new("/base"));
        let settings = CliSettings {
            host: Some("::1".to_owned()),
            source_dir: Some(PathBuf::from("/elsewhere")),
            ..Default::default()
        };

        config.apply_cli_settings(&settings);

        assert_eq!(config.server.host, "::1");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/elsewhere"));
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_validate_rejects_empty_host_and_theme() {
        let mut config = Config::default();
        config.server.host = "  ".to_owned();
        assert!(config.validate().unwrap_err().to_string().contains("server.host"));

        let mut config = Config::default();
        config.render.theme = String::new();
        assert!(config.validate().unwrap_err().to_string().contains("render.theme"));
    }

    #[test]
    fn test_validate_source_dir() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("file.md");
        fs::write(&file, "x").unwrap();

        let ok = Config::default_with_base(temp.path());
        assert!(ok.validate_source_dir().is_ok());

        let missing = Config::default_with_base(&temp.path().join("missing"));
        assert!(missing.validate_source_dir().unwrap_err().to_string().contains("does not exist"));

        let not_dir = Config::default_with_base(&file);
        assert!(not_dir.validate_source_dir().unwrap_err().to_string().contains("not a directory"));
    }

    #[test]
    fn test_load_explicit_missing_path() {
        let err = Config::load(Some(Path::new("/nonexistent/mdoc.toml")), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_and_expands() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("mdoc.toml");
        fs::write(
            &path,
            "[docs]\nsource_dir = \"docs\"\n[site]\ntitle = \"${MDOC_TEST_LOAD_UNSET:-Fallback}\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "Fallback");
        assert_eq!(config.docs_resolved.source_dir, temp.path().join("docs"));
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_applies_cli_settings_over_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("mdoc.toml");
        fs::write(&path, "[server]\nport = 8000\n").unwrap();
        let settings = CliSettings {
            port: Some(9100),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("mdoc.toml");
        fs::write(&path, "[server]\nport = 0\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_unset_env_var_is_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("mdoc.toml");
        fs::write(&path, "[server]\nhost = \"${MDOC_TEST_LOAD_HOST_UNSET}\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "server.host"));
    }
}
