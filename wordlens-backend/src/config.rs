use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Configuration endpoint that hands out the third-party API keys
    #[serde(default = "default_credentials_url")]
    pub credentials_url: String,

    /// Base URL of the translation provider (detect lives at `<base>/detect`)
    #[serde(default = "default_translate_url")]
    pub translate_url: String,

    /// Search endpoint of the image provider
    #[serde(default = "default_images_url")]
    pub images_url: String,

    /// Store service endpoint receiving translation records
    #[serde(default = "default_store_url")]
    pub store_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5100
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_credentials_url() -> String {
    "https://my-extension-worker.ssv5593.workers.dev/api-keys".to_string()
}

fn default_translate_url() -> String {
    "https://translation.googleapis.com/language/translate/v2".to_string()
}

fn default_images_url() -> String {
    "https://api.pexels.com/v1/search".to_string()
}

fn default_store_url() -> String {
    "http://localhost:5000/store-translation".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            credentials_url: default_credentials_url(),
            translate_url: default_translate_url(),
            images_url: default_images_url(),
            store_url: default_store_url(),
        }
    }
}

impl BackendConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BackendConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `config.toml` next to the binary, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> anyhow::Result<Self> {
        if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            tracing::info!("No config.toml found, using default configuration");
            Ok(Self::default())
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
