use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub status: StatusConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusConfig {
    /// Local socket the watcher serves snapshots on.
    #[serde(default = "default_socket_path")]
    pub socket_path: String,
    /// "json" selects JSON rendering; any other value (or absent) selects HTML.
    #[serde(default)]
    pub response_content_type: Option<String>,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            response_content_type: None,
        }
    }
}

fn default_socket_path() -> String {
    "/tmp/watcher.sock".into()
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.status.socket_path.is_empty(),
            "status.socket_path must be non-empty"
        );
        Ok(())
    }
}
