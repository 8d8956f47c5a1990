//! Environment loading
//!
//! Runs before argument parsing so that values from a `.env` file feed the
//! `env = ...` fallbacks of the clap options.

use std::path::PathBuf;

pub const DEFAULT_DATABASE: &str = "libris.db";

/// Deployment environment, read from `APP_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Test,
    Production,
}

impl AppEnv {
    /// Anything other than `production` or `test` is treated as development
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("production") => AppEnv::Production,
            Some("test") => AppEnv::Test,
            _ => AppEnv::Development,
        }
    }

    pub fn current() -> Self {
        Self::parse(std::env::var("APP_ENV").ok().as_deref())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Test => "test",
            AppEnv::Production => "production",
        }
    }

    fn loads_dotenv(self) -> bool {
        self != AppEnv::Production
    }
}

/// What happened to the `.env` file
#[derive(Debug)]
pub enum EnvFile {
    Skipped(AppEnv),
    Loaded(PathBuf),
    NotFound,
    Invalid(String),
}

/// Load `.env` from the working directory or one of its parents
pub fn load_env(env: AppEnv) -> EnvFile {
    if !env.loads_dotenv() {
        return EnvFile::Skipped(env);
    }

    match dotenvy::dotenv() {
        Ok(path) => EnvFile::Loaded(path),
        Err(e) if e.not_found() => EnvFile::NotFound,
        Err(e) => EnvFile::Invalid(e.to_string()),
    }
}

/// Report the outcome of [`load_env`] once logging is up
pub fn log_env_file(env_file: &EnvFile) {
    match env_file {
        EnvFile::Skipped(env) => log::debug!("Skipping .env file in {} mode", env.as_str()),
        EnvFile::Loaded(path) => log::debug!("Loaded environment from {}", path.display()),
        EnvFile::NotFound => log::debug!("No .env file found"),
        EnvFile::Invalid(e) => log::warn!("Error loading .env file: {e}"),
    }
}

/// Accept a bare path or a `sqlite:` URL in `DB_URL`
pub fn database_path(value: &str) -> PathBuf {
    let path = value
        .strip_prefix("sqlite://")
        .or_else(|| value.strip_prefix("sqlite:"))
        .unwrap_or(value);
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_env_parse() {
        assert_eq!(AppEnv::parse(None), AppEnv::Development);
        assert_eq!(AppEnv::parse(Some("")), AppEnv::Development);
        assert_eq!(AppEnv::parse(Some("test")), AppEnv::Test);
        assert_eq!(AppEnv::parse(Some("production")), AppEnv::Production);
        assert_eq!(AppEnv::parse(Some("Production")), AppEnv::Development);
    }

    #[test]
    fn test_production_skips_dotenv() {
        assert!(matches!(
            load_env(AppEnv::Production),
            EnvFile::Skipped(AppEnv::Production)
        ));
    }

    #[test]
    fn test_database_path() {
        assert_eq!(database_path("libris.db"), PathBuf::from("libris.db"));
        assert_eq!(
            database_path("sqlite:///var/lib/libris.db"),
            PathBuf::from("/var/lib/libris.db")
        );
        assert_eq!(database_path("sqlite:data.db"), PathBuf::from("data.db"));
    }
}
