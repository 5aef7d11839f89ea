//! Configuration handling for Multitech
//!
//! Supports multitech.toml, .multitechrc, and environment variable overrides.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::core::ScaffoldResult;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where generated projects and template overrides live
    pub output: OutputConfig,

    /// Docker configuration
    pub docker: DockerConfig,

    /// Spring Initializr configuration
    pub spring: SpringConfig,

    /// Network configuration
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Folder, relative to the working directory, that receives every project
    pub root: String,

    /// Folder holding on-disk template overrides, laid out as
    /// `<dir>/<category-root>/<tech>/templates/<file>`
    pub templates_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerConfig {
    /// Shared bridge network joined by every generated container
    pub network: String,

    /// Subnet used when the shared network has to be created
    pub subnet: String,

    /// Default seconds to wait for a container to report healthy
    pub health_timeout: u64,

    /// Seconds between two health polls
    pub poll_interval: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Initializr archive endpoint
    pub url: String,

    /// Maven group id, also the package prefix
    pub group_id: String,

    pub java_version: String,

    pub boot_version: String,

    /// Comma separated Initializr dependency ids
    pub dependencies: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// HTTP timeout in seconds
    pub timeout: u64,
}

/// Shared bridge network the bundled compose files attach to
pub const DEFAULT_NETWORK: &str = "multitech-common-network";

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: "__GEN_PROJECTS".to_string(),
            templates_dir: None,
        }
    }
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_string(),
            subnet: "172.40.0.0/16".to_string(),
            health_timeout: 60,
            poll_interval: 3,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            url: "https://start.spring.io/starter.tgz".to_string(),
            group_id: "net.maquestiaux".to_string(),
            java_version: "21".to_string(),
            boot_version: "3.4.3".to_string(),
            dependencies: "web,devtools".to_string(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { timeout: 60 }
    }
}

impl Config {
    /// Load configuration from the working directory and apply env overrides
    pub fn load(dir: &Path) -> ScaffoldResult<Self> {
        let mut config = Config::default();

        let toml_path = dir.join("multitech.toml");
        if toml_path.exists() {
            let content = std::fs::read_to_string(&toml_path)?;
            config = toml::from_str(&content)?;
            tracing::debug!("loaded configuration from {}", toml_path.display());
        } else {
            // .multitechrc is the JSON flavour of the same file
            let rc_path = dir.join(".multitechrc");
            if rc_path.exists() {
                let content = std::fs::read_to_string(&rc_path)?;
                config = serde_json::from_str(&content)?;
                tracing::debug!("loaded configuration from {}", rc_path.display());
            }
        }

        config = config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Self {
        if let Ok(root) = env::var("MULTITECH_OUTPUT_ROOT") {
            self.output.root = root;
        }

        if let Ok(dir) = env::var("MULTITECH_TEMPLATES_DIR") {
            self.output.templates_dir = Some(PathBuf::from(dir));
        }

        if let Ok(timeout) = env::var("MULTITECH_HEALTH_TIMEOUT") {
            if let Ok(n) = timeout.parse() {
                self.docker.health_timeout = n;
            }
        }

        if let Ok(interval) = env::var("MULTITECH_POLL_INTERVAL") {
            if let Ok(n) = interval.parse() {
                self.docker.poll_interval = n;
            }
        }

        if let Ok(network) = env::var("MULTITECH_DOCKER_NETWORK") {
            self.docker.network = network;
        }

        if let Ok(url) = env::var("MULTITECH_SPRING_URL") {
            self.spring.url = url;
        }

        self
    }

    fn validate(&self) -> ScaffoldResult<()> {
        let root = Path::new(&self.output.root);
        if self.output.root.trim().is_empty() || root.is_absolute() {
            return Err(crate::core::ScaffoldError::config(
                "output.root must be a non-empty relative folder name",
            ));
        }
        if self.docker.poll_interval == 0 {
            return Err(crate::core::ScaffoldError::config(
                "docker.poll_interval must be at least 1 second",
            ));
        }
        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.network.timeout)
    }
}
