use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub site: SiteConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default = "default_language")]
    pub default_language: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Filesystem root that asset buckets are created under.
    pub upload_dir: String,
    /// Public base address that stored names resolve against, e.g.
    /// `http://127.0.0.1:3000/uploads`.
    pub public_base_url: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_pool_size() -> u32 {
    10
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Run `vitrine init` first?",
                path.display(),
                e
            )
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.media.upload_dir.is_empty() {
            anyhow::bail!("media.upload_dir must not be empty");
        }
        if self.media.public_base_url.is_empty() {
            anyhow::bail!("media.public_base_url must not be empty");
        }
        Ok(())
    }

    pub fn default_with_title(title: &str) -> Self {
        Self {
            site: SiteConfig {
                title: title.to_string(),
                default_language: default_language(),
            },
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            database: DatabaseConfig {
                path: "data/vitrine.db".to_string(),
                pool_size: default_pool_size(),
            },
            media: MediaConfig {
                upload_dir: "uploads".to_string(),
                public_base_url: format!("http://{}:{}/uploads", default_host(), default_port()),
            },
        }
    }
}
