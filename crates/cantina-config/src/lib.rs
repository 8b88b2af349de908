// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Cantina ordering client.
//!
//! Layered TOML loading via Figment with `CANTINA_*` environment
//! variable overrides.

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{ApiConfig, AppConfig, CantinaConfig};
