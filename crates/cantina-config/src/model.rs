// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Cantina ordering client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject
//! unrecognized config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Cantina configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CantinaConfig {
    /// Menu API endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Application behavior settings.
    #[serde(default)]
    pub app: AppConfig,
}

/// Menu API endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL all menu requests are issued against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

/// Application behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Path of the persisted activity record used for state restoration.
    #[serde(default = "default_state_path")]
    pub state_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            state_path: default_state_path(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_state_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("cantina").join("activity.json"))
        .unwrap_or_else(|| std::path::PathBuf::from("activity.json"))
        .to_string_lossy()
        .into_owned()
}
