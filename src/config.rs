use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid PORT value: {0:?}")]
    InvalidPort(String),
}

/// How malformed `x` / `y` query parameters are reported.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Bad operands become NaN and the response is `200 {"result": null}`.
    #[default]
    Lenient,
    /// Bad operands are rejected with `400` and an error envelope.
    Strict,
}

impl InputPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            InputPolicy::Lenient => "lenient",
            InputPolicy::Strict => "strict",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    /// Directory for the rolling log file. Stdout only when unset.
    pub log_dir: Option<String>,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub input_policy: InputPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
            log_file: "arith_api.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            input_policy: InputPolicy::Lenient,
        }
    }
}

impl AppConfig {
    /// Load `<config_dir>/<env>.yaml`, falling back to defaults when the
    /// file does not exist.
    pub fn load(config_dir: impl AsRef<Path>, env: &str) -> Result<Self, ConfigError> {
        let path = config_dir.as_ref().join(format!("{}.yaml", env));
        if !path.exists() {
            return Ok(Self::default());
        }
        let display = path.display().to_string();
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Apply a `PORT` environment value on top of the loaded config.
    pub fn apply_port_env(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = value else {
            return Ok(());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        self.gateway.port = trimmed
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.gateway.host, self.gateway.port)
    }
}
