mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./filterbox.toml",
        "~/.config/filterbox/config.toml",
        "/etc/filterbox/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

/// Overlay environment variables on top of the file-based config.
///
/// TENOR_API_KEY wins over the `[tenor] api_key` file value.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = std::env::var("TENOR_API_KEY") {
        if !key.is_empty() {
            config.tenor.api_key = Some(key);
        }
    }
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.tenor.default_limit == 0 {
        anyhow::bail!("Tenor default_limit cannot be 0");
    }

    if let Some(ref key) = config.tenor.api_key {
        if key.trim().is_empty() {
            anyhow::bail!("Tenor api_key is set but empty");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.images.dir, std::path::PathBuf::from("static/images"));
        assert_eq!(config.tenor.base_url, "https://api.tenor.com/v1");
    }

    #[test]
    fn parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 3000

            [tenor]
            api_key = "abc123"
            default_limit = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.tenor.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.tenor.default_limit, 10);
    }

    #[test]
    fn zero_port_rejected() {
        let config: Config = toml::from_str("[server]\nport = 0\n").unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn zero_limit_rejected() {
        let config: Config = toml::from_str("[tenor]\ndefault_limit = 0\n").unwrap();
        assert!(validate_config(&config).is_err());
    }
}
