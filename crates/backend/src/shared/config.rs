use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Prefix of every `<name>.php` endpoint, without the trailing slash
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    pub dir: String,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
bind = "0.0.0.0:3000"

[upstream]
base_url = "http://127.0.0.1:8080/api"
timeout_secs = 30

[static_files]
dir = "dist"
"#;

impl Config {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server.bind '{}': {e}", self.server.bind))
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout_secs.max(1))
    }

    pub fn upstream_base(&self) -> &str {
        self.upstream.base_url.trim_end_matches('/')
    }
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to the embedded default
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            }
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.upstream.base_url.trim().is_empty() {
        anyhow::bail!("upstream.base_url must not be empty");
    }
    Ok(config)
}

/// Static files directory; relative paths resolve against the executable
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.static_files.dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join(dir)))
        .unwrap_or_else(|| dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.bind_addr().unwrap().port(), 3000);
        assert_eq!(config.upstream_timeout(), Duration::from_secs(30));
        assert_eq!(config.static_files.dir, "dist");
    }

    #[test]
    fn test_trailing_slash_and_default_timeout() {
        let config = parse_config(
            r#"
            [server]
            bind = "127.0.0.1:4000"
            [upstream]
            base_url = "https://pay.example.com/api/"
            [static_files]
            dir = "/srv/console"
            "#,
        )
        .unwrap();
        assert_eq!(config.upstream_base(), "https://pay.example.com/api");
        assert_eq!(config.upstream.timeout_secs, 30);
        assert_eq!(get_static_dir(&config), PathBuf::from("/srv/console"));
    }

    #[test]
    fn test_empty_upstream_is_rejected() {
        let err = parse_config(
            r#"
            [server]
            bind = "0.0.0.0:3000"
            [upstream]
            base_url = " "
            [static_files]
            dir = "dist"
            "#,
        );
        assert!(err.is_err());
    }
}
