//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `PORT` (optional): HTTP server port, defaults to 5000
/// - `MONGO_URI` (optional): document database connection string
/// - `JWT_SECRET` (optional): only checked for presence
/// - `NODE_ENV` (optional): `development` exposes error details in 500 responses
/// - `UPLOADS_DIR` (optional): directory served at `/uploads`, defaults to `uploads`
/// - `CORS_ORIGINS` (optional): comma separated list of allowed origins
/// - `JSON_BODY_LIMIT` (optional): maximum JSON body size in bytes, defaults to 100 kB
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub mongo_uri: Option<String>,

    #[serde(default)]
    pub jwt_secret: Option<String>,

    #[serde(default)]
    pub node_env: Option<String>,

    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_json_body_limit")]
    pub json_body_limit: usize,
}

fn default_port() -> u16 {
    5000
}

fn default_uploads_dir() -> String {
    "uploads".to_string()
}

/// Frontend deployments allowed to call the API with credentials.
fn default_cors_origins() -> Vec<String> {
    vec![
        "https://share-my-ride-git-main-abhays-projects-cdb9056e.vercel.app".to_string(),
        "https://share-my-ride.vercel.app".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

fn default_json_body_limit() -> usize {
    100 * 1024
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed
    /// into the expected type (e.g., a non-numeric `PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        // Field names are converted automatically: mongo_uri -> MONGO_URI
        envy::from_env::<Config>()
    }

    /// Build configuration from explicit `KEY=value` pairs instead of the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        envy::from_iter(vars.into_iter().map(|(k, v)| (k.into(), v.into())))
    }

    /// Runtime environment derived from `NODE_ENV`.
    pub fn environment(&self) -> Environment {
        Environment::from_node_env(self.node_env.as_deref())
    }

    /// Whether a non-empty `JWT_SECRET` was provided.
    pub fn jwt_secret_configured(&self) -> bool {
        self.jwt_secret.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Deployment environment.
///
/// Only `Development` changes behavior: server error responses then carry
/// the underlying error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("development") => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_vars(Vec::<(String, String)>::new()).unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.mongo_uri, None);
        assert_eq!(config.uploads_dir, "uploads");
        assert_eq!(config.cors_origins.len(), 3);
        assert!(config.cors_origins.contains(&"http://localhost:5173".to_string()));
        assert_eq!(config.json_body_limit, 102_400);
        assert_eq!(config.environment(), Environment::Production);
        assert!(!config.jwt_secret_configured());
    }

    #[test]
    fn reads_values_from_variables() {
        let config = Config::from_vars([
            ("PORT", "8080"),
            ("MONGO_URI", "postgres://localhost/rideshare"),
            ("JWT_SECRET", "s3cret"),
            ("NODE_ENV", "development"),
            ("CORS_ORIGINS", "http://a.test,http://b.test"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.mongo_uri.as_deref(),
            Some("postgres://localhost/rideshare")
        );
        assert!(config.jwt_secret_configured());
        assert_eq!(config.environment(), Environment::Development);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(Config::from_vars([("PORT", "not-a-port")]).is_err());
    }

    #[test]
    fn only_exact_development_enables_development_mode() {
        assert_eq!(Environment::from_node_env(None), Environment::Production);
        assert_eq!(
            Environment::from_node_env(Some("production")),
            Environment::Production
        );
        assert_eq!(
            Environment::from_node_env(Some("Development")),
            Environment::Production
        );
        assert!(Environment::from_node_env(Some("development")).is_development());
    }

    #[test]
    fn empty_jwt_secret_counts_as_missing() {
        let config = Config::from_vars([("JWT_SECRET", "")]).unwrap();
        assert!(!config.jwt_secret_configured());
    }
}
