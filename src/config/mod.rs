//! Configuration management for reqinspect

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::transport::{AGENT_TRANSPORT_ID, DefaultTransportKind, PlatformTransport};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Execution environment the requests are sent from
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Transport selection
    #[serde(default)]
    pub transport: TransportConfig,

    /// YAML file with message overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_file: Option<PathBuf>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Platform capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Transport the platform falls back to (browser, native)
    #[serde(default)]
    pub default_transport: DefaultTransportKind,

    /// ID of the privileged agent transport
    #[serde(default = "default_agent_transport")]
    pub agent_transport: String,
}

fn default_agent_transport() -> String {
    AGENT_TRANSPORT_ID.to_string()
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            default_transport: DefaultTransportKind::default(),
            agent_transport: default_agent_transport(),
        }
    }
}

impl PlatformConfig {
    pub fn to_platform(&self) -> PlatformTransport {
        PlatformTransport {
            default_kind: self.default_transport,
            agent_transport_id: self.agent_transport.clone(),
        }
    }
}

/// Transport selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Active transport ID; the platform default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".reqinspect").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration from an optional override path
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Save configuration to an optional override path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }
}
