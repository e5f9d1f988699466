//! Application configuration
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. a TOML file: `--config <FILE>`, else `roster.toml` if present
//! 3. `ROSTER_` environment variables, `__` between nested keys
//!    (`ROSTER_CONNECTION__DATABASE=hr.db`)

use config::{Config, ConfigError, Environment, File, FileFormat};
use roster_core::logging_facility::{Profile, DEFAULT_FILTER};
use roster_store::ConnectionOptions;
use serde::Deserialize;
use std::path::Path;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

const ENV_PREFIX: &str = "ROSTER";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub connection: ConnectionOptions,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub profile: Profile,
    /// Used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load the layered configuration
    ///
    /// # Errors
    /// Returns an error if an explicit file is missing, a file does not
    /// parse, or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.connection.database, "employeetracker.db");
        assert_eq!(config.connection.port, 3306);
        assert_eq!(config.logging.profile, Profile::Development);
        assert_eq!(config.logging.filter, DEFAULT_FILTER);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[connection]
database = "hr.db"
password = "hunter2"

[logging]
profile = "production"
"#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.connection.database, "hr.db");
        assert_eq!(config.connection.password.expose(), "hunter2");
        assert_eq!(config.connection.host, "localhost");
        assert_eq!(config.logging.profile, Profile::Production);
        assert_eq!(config.logging.filter, DEFAULT_FILTER);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/roster.toml"))).is_err());
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[connection]\nport = \"not a port\"").unwrap();

        assert!(AppConfig::load(Some(file.path())).is_err());
    }
}
