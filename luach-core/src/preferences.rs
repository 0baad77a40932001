//! User preferences at ~/.config/luach/config.toml.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LuachError, LuachResult};
use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persisted UI choices. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// GeoNames id of the selected city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<u32>,

    /// Time zone override; the city's own zone when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default)]
    pub language: Locale,

    #[serde(default)]
    pub theme: Theme,
}

impl Preferences {
    pub fn config_path() -> LuachResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LuachError::Config("Could not determine config directory".into()))?
            .join("luach");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, or defaults if there is no file yet.
    pub fn load() -> LuachResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> LuachResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            LuachError::Config(format!("Could not parse {}: {e}", path.display()))
        })
    }

    pub fn save(&self) -> LuachResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> LuachResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LuachError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| LuachError::Serialization(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| LuachError::Config(format!("Could not write config file: {e}")))?;

        tracing::debug!(path = %path.display(), "saved preferences");
        Ok(())
    }
}
