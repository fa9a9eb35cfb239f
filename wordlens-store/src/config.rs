use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address to bind the server to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// MongoDB connection string
    #[serde(default = "default_mongodb_uri")]
    pub mongodb_uri: String,

    /// Database holding the translation collection
    #[serde(default = "default_database")]
    pub database: String,

    /// Collection receiving translation records
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Enable CORS for cross-origin requests
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_mongodb_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database() -> String {
    "translate-visualizer".to_string()
}

fn default_collection() -> String {
    "translations".to_string()
}

fn default_enable_cors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mongodb_uri: default_mongodb_uri(),
            database: default_database(),
            collection: default_collection(),
            enable_cors: default_enable_cors(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        Ok(config)
    }

    /// Load `config.toml` if present, defaults otherwise
    pub fn load() -> anyhow::Result<Self> {
        if std::path::Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else {
            Ok(Self::default())
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
