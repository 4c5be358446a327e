use std::path::PathBuf;
use std::str::FromStr;

/// File name of the store, placed next to the executable unless
/// `DATABASE_PATH` says otherwise.
pub const DEFAULT_DATABASE_FILE: &str = "store.db";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running the demo store locally.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite file holding the `products` table.
    pub database_path: PathBuf,
    /// Seed demo products into an empty store at startup (default: `true`).
    pub seed_on_start: bool,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `5000`                           |
    /// | `DATABASE_PATH`        | `store.db` next to the binary    |
    /// | `SEED_ON_START`        | `true`                           |
    /// | `CORS_ORIGINS`         | `http://localhost:5000`          |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", 5000u16, "a valid u16")?;

        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_database_path());

        let seed_on_start = parse_var("SEED_ON_START", true, "true or false")?;

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            database_path,
            seed_on_start,
            cors_origins,
        })
    }
}

/// `store.db` in the directory of the running executable, falling back to the
/// working directory when that cannot be determined.
pub fn default_database_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DATABASE_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE))
}

fn parse_var<T: FromStr>(
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_database_path_ends_with_store_file() {
        assert!(default_database_path().ends_with(DEFAULT_DATABASE_FILE));
    }

    #[test]
    fn invalid_value_names_the_variable() {
        let err = ConfigError::Invalid {
            var: "PORT",
            expected: "a valid u16",
            value: "eighty".into(),
        };
        assert_eq!(err.to_string(), "PORT must be a valid u16, got \"eighty\"");
    }
}
