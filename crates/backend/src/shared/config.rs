use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "TRAINING_CONFIG";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built frontend served for every unmatched path.
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreConfig {
    /// Insert the week days on start-up.
    #[serde(default)]
    pub seed_reference_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Generated on start-up when absent; tokens then die with the process.
    pub jwt_secret: Option<String>,
    pub token_lifetime_hours: i64,
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    pub username: String,
    pub password: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[store]
seed_reference_data = true

[auth]
token_lifetime_hours = 24

[[auth.users]]
username = "admin"
password = "admin123"
"#;

impl Config {
    pub fn embedded_default() -> anyhow::Result<Self> {
        Ok(toml::from_str(DEFAULT_CONFIG)?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Load configuration
///
/// Search order:
/// 1. The file named by `TRAINING_CONFIG`
/// 2. config.toml next to the executable
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        tracing::info!("Loading config from {}: {}", CONFIG_ENV, path);
        return read_config(PathBuf::from(path));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return read_config(config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    Config::embedded_default()
}

fn read_config(path: PathBuf) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = Config::embedded_default().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert!(config.auth.jwt_secret.is_none());
        assert_eq!(config.auth.users.len(), 1);
        assert_eq!(config.auth.users[0].username, "admin");
    }

    #[test]
    fn test_store_section_is_optional() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [auth]
            jwt_secret = "s3cret"
            token_lifetime_hours = 1
            "#,
        )
        .unwrap();
        assert!(!config.store.seed_reference_data);
        assert!(config.auth.users.is_empty());
        assert_eq!(config.auth.jwt_secret.as_deref(), Some("s3cret"));
    }
}
