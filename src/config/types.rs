use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub tenor: TenorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImagesConfig {
    /// Directory where uploaded originals and derived assets are stored.
    /// Served publicly under `/static/images`.
    #[serde(default = "default_images_dir")]
    pub dir: PathBuf,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("static/images")
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            dir: default_images_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TenorConfig {
    /// Tenor API key. Overridden by the TENOR_API_KEY environment variable.
    /// GIF search is disabled when unset.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_tenor_base_url")]
    pub base_url: String,

    /// Result count used when the form does not specify one.
    #[serde(default = "default_tenor_limit")]
    pub default_limit: u8,
}

fn default_tenor_base_url() -> String {
    "https://api.tenor.com/v1".to_string()
}

fn default_tenor_limit() -> u8 {
    5
}

impl Default for TenorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_tenor_base_url(),
            default_limit: default_tenor_limit(),
        }
    }
}
