// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Cantina ordering client.
//!
//! Provides the error taxonomy and the domain models (menu items and
//! orders) shared by the network client, the coordinator, and the
//! state-restoration codec.

pub mod error;
pub mod types;

pub use error::CantinaError;
pub use types::{display_category, MenuItem, Order};
