use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. Empty means any origin.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Largest accepted image part, in bytes.
    pub max_image_size: u64,
}

impl StorageConfig {
    /// HTTP body limit for media routes: the image plus room for the scalar parts.
    pub fn body_limit(&self) -> usize {
        usize::try_from(self.max_image_size)
            .unwrap_or(usize::MAX)
            .saturating_add(FORM_OVERHEAD)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_image_size: DEFAULT_MAX_IMAGE_SIZE,
        }
    }
}

const DEFAULT_MAX_IMAGE_SIZE: u64 = 10 * 1024 * 1024; // 10 MiB
const FORM_OVERHEAD: usize = 1024 * 1024;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.cors.max_age", 3600)?
            .set_default("database.url", "sqlite://folio.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("storage.max_image_size", DEFAULT_MAX_IMAGE_SIZE)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., FOLIO__AUTH__JWT_SECRET)
            .add_source(Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
