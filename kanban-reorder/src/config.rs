//! Engine configuration loaded with figment
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults
//! 2. `kanban-reorder.toml`, `kanban-reorder.yaml`, `kanban-reorder.json` in the config directory
//! 3. Environment variables prefixed `KANBAN_REORDER_` (nested keys split on `__`,
//!    e.g. `KANBAN_REORDER_PERSISTENCE__ENABLED=true`)

use crate::error::{ReorderError, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Base file name for config files
pub const CONFIG_FILE_STEM: &str = "kanban-reorder";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "KANBAN_REORDER_";

const DEFAULT_DRAG_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_STORE_DIR: &str = ".kanban-rooms";

/// Engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// A drag session older than this is treated as abandoned
    pub drag_timeout_ms: u64,
    /// Reorder containers on every move event rather than only on drop
    pub live_container_reorder: bool,
    pub persistence: PersistenceConfig,
}

/// Where and whether committed boards are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    pub enabled: bool,
    pub dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            drag_timeout_ms: DEFAULT_DRAG_TIMEOUT_MS,
            live_container_reorder: true,
            persistence: PersistenceConfig::default(),
        }
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: PathBuf::from(DEFAULT_STORE_DIR),
        }
    }
}

impl EngineConfig {
    /// Load from the current directory and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Load using config files found in `dir`
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config: Self = Self::figment(dir).extract()?;
        debug!(
            drag_timeout_ms = config.drag_timeout_ms,
            live_container_reorder = config.live_container_reorder,
            persistence = config.persistence.enabled,
            "loaded engine configuration"
        );
        Ok(config)
    }

    /// Load from one explicit file, still honoring environment overrides.
    /// The file must exist.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ReorderError::invalid_value(
                "config",
                format!("config file not found: {}", path.display()),
            ));
        }
        let file = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Figment::from(Yaml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            _ => Figment::from(Toml::file(path)),
        };
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(env_provider())
            .extract()?;
        Ok(config)
    }

    /// The layered figment for `dir`
    pub fn figment(dir: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(dir.join(format!("{CONFIG_FILE_STEM}.toml"))))
            .merge(Yaml::file(dir.join(format!("{CONFIG_FILE_STEM}.yaml"))))
            .merge(Json::file(dir.join(format!("{CONFIG_FILE_STEM}.json"))))
            .merge(env_provider())
    }

    pub fn drag_timeout(&self) -> Duration {
        Duration::from_millis(self.drag_timeout_ms)
    }
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).split("__")
}
