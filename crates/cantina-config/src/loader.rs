// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./cantina.toml` >
//! `~/.config/cantina/cantina.toml` > `/etc/cantina/cantina.toml`
//! with environment variable overrides via the `CANTINA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::CantinaConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/cantina/cantina.toml` (system-wide)
/// 3. `~/.config/cantina/cantina.toml` (user XDG config)
/// 4. `./cantina.toml` (local directory)
/// 5. `CANTINA_*` environment variables
pub fn load_config() -> Result<CantinaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CantinaConfig::default()))
        .merge(Toml::file("/etc/cantina/cantina.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("cantina/cantina.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("cantina.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<CantinaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CantinaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CantinaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CantinaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-bearing
/// key names stay intact: `CANTINA_APP_STATE_PATH` must map to
/// `app.state_path`, not `app.state.path`.
fn env_provider() -> Env {
    Env::prefixed("CANTINA_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("api_", "api.", 1)
            .replacen("app_", "app.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_defaults_from_empty_toml() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [api]
            base_url = "https://menu.example.com"

            [app]
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://menu.example.com");
        assert_eq!(config.app.log_level, "debug");
        // Untouched keys keep their defaults.
        assert!(config.app.state_path.ends_with("activity.json"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = load_config_from_str(
            r#"
            [api]
            base_uri = "https://typo.example.com"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn env_vars_override_toml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "cantina.toml",
                r#"
                [api]
                base_url = "http://from-file:8080"
                "#,
            )?;
            jail.set_env("CANTINA_API_BASE_URL", "http://from-env:9090");
            jail.set_env("CANTINA_APP_STATE_PATH", "/tmp/state.json");

            let config = Figment::new()
                .merge(Serialized::defaults(CantinaConfig::default()))
                .merge(Toml::file("cantina.toml"))
                .merge(env_provider())
                .extract::<CantinaConfig>()?;

            assert_eq!(config.api.base_url, "http://from-env:9090");
            assert_eq!(config.app.state_path, "/tmp/state.json");
            Ok(())
        });
    }
}
