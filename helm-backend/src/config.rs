use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory with the static control-panel files served at `/`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Enable CORS so the panel can be served from another origin
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_enable_cors() -> bool {
    true
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            static_dir: default_static_dir(),
            enable_cors: default_enable_cors(),
        }
    }
}

impl BackendConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path, e))?;

        let config: BackendConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &str) -> anyhow::Result<Self> {
        if std::path::Path::new(path).exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config: BackendConfig = toml::from_str("").unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.static_dir, "public");
        assert!(config.enable_cors);
    }

    #[test]
    fn test_partial_override() {
        let config: BackendConfig = toml::from_str("port = 8080\nlog_level = \"debug\"").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_server_address() {
        let config = BackendConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..BackendConfig::default()
        };
        assert_eq!(config.server_address(), "127.0.0.1:3000");
    }
}
