// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings file handling
//!
//! Persistent defaults live in a TOML file under the edgeup home
//! directory; CLI flags and environment variables override them when a
//! run configuration is assembled.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Persistent user settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub portal: PortalSettings,
}

/// Portal connection defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortalSettings {
    /// Portal hostname or base URL
    pub host: Option<String>,
    /// Login username
    pub username: Option<String>,
    /// Default enterprise id
    pub enterprise_id: Option<i64>,
    /// Accept self-signed portal certificates
    #[serde(default)]
    pub insecure: bool,
    /// Authenticate against the operator login endpoint
    #[serde(default)]
    pub operator_login: bool,
}

impl Settings {
    /// Get the edgeup home directory (~/.edgeup or $EDGEUP_HOME).
    pub fn edgeup_home() -> PathBuf {
        if let Ok(home) = std::env::var("EDGEUP_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".edgeup")
    }

    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::edgeup_home().join("settings.toml")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path; a missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
