use anyhow::Context;
use config::{Config, Environment, File, FileFormat, Source};
use serde::Deserialize;
use statistics::DEFAULT_SCORE_FIELD;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseUrlConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatisticsConfig {
    /// Threshold key the win/draw/lose statistics are classified against.
    pub score_field: String,
}

/// Server configuration: a TOML file overlaid with `DASHBOARD_*` env vars,
/// e.g. `DASHBOARD_DATABASE_URL` or `DASHBOARD_SERVER_PORT`.
#[derive(Debug, Deserialize, Clone)]
pub struct DashboardContext {
    pub server: ServerConfig,
    pub database: DatabaseUrlConfig,
    pub statistics: StatisticsConfig,
}

impl DashboardContext {
    pub fn load_config(config_path: &str) -> anyhow::Result<Self> {
        Self::from_source(
            File::with_name(config_path)
                .format(FileFormat::Toml)
                .required(true),
        )
    }

    /// Loads from an in-memory TOML document instead of a file.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Self::from_source(File::from_str(content, FileFormat::Toml))
    }

    /// Every key has a default, so the file only needs what differs; an
    /// empty `database.url` selects the in-process store.
    fn from_source<S>(source: S) -> anyhow::Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("server.workers", 4_i64)?
            .set_default("database.url", "")?
            .set_default("statistics.score_field", DEFAULT_SCORE_FIELD)?
            .add_source(source)
            .add_source(
                Environment::with_prefix("DASHBOARD")
                    .try_parsing(true)
                    .separator("_"),
            )
            .build()
            .with_context(|| anyhow::anyhow!("Failed to load config"))?
            .try_deserialize()
            .with_context(|| anyhow::anyhow!("Failed to deserialize config"))
    }

    pub fn server_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }

    pub fn uses_database(&self) -> bool {
        !self.database.url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_load_bundled_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
        let ctx = DashboardContext::load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(ctx.statistics.score_field, "finalScore");
        assert_eq!(ctx.server_address().1, 5000);
        assert!(ctx.server.workers > 0);
    }

    #[test]
    fn test_defaults_fill_missing_keys() {
        let ctx = DashboardContext::from_toml("[server]\nport = 8080\n").unwrap();
        assert_eq!(ctx.server_address(), ("0.0.0.0".to_owned(), 8080));
        assert_eq!(ctx.server.workers, 4);
        assert_eq!(ctx.statistics.score_field, DEFAULT_SCORE_FIELD);
        assert!(!ctx.uses_database());
    }

    #[test]
    fn test_file_overrides_score_field() {
        let ctx = DashboardContext::from_toml(
            "[statistics]\nscore_field = \"elecPassRate\"\n[database]\nurl = \"postgres://localhost/dashboard\"\n",
        )
        .unwrap();
        assert_eq!(ctx.statistics.score_field, "elecPassRate");
        assert!(ctx.uses_database());
    }

    #[test]
    fn test_missing_config_file() {
        assert!(DashboardContext::load_config("does/not/exist").is_err());
    }
}
