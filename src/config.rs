use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::UserProfile;
use crate::router::CHAT_ROUTE;

pub const DEFAULT_CONFIG_PATH: &str = "config/chat.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub start_route: String,
    pub user: Option<UserProfile>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Chat".to_string(),
            start_route: CHAT_ROUTE.to_string(),
            user: None,
        }
    }
}

/// Values from the command line or environment; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub user_name: Option<String>,
    pub avatar_url: Option<String>,
    pub start_route: Option<String>,
}

impl AppConfig {
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if overrides.user_name.is_some() || overrides.avatar_url.is_some() {
            let user = self.user.get_or_insert_with(UserProfile::default);
            if let Some(name) = overrides.user_name {
                user.name = Some(name);
            }
            if let Some(avatar_url) = overrides.avatar_url {
                user.avatar_url = Some(avatar_url);
            }
        }

        if let Some(route) = overrides.start_route {
            self.start_route = route;
        }
    }
}

pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Never fails: a missing or broken file falls back to defaults.
pub fn load_config(path: &str) -> AppConfig {
    match read_config(Path::new(path)) {
        Ok(config) => config,
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            log::info!("Config file {path} not found; using defaults");
            AppConfig::default()
        }
        Err(err) => {
            log::warn!("{err}; using defaults");
            AppConfig::default()
        }
    }
}
