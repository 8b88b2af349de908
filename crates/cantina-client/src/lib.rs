// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Cantina menu and ordering API.
//!
//! [`MenuClient`] issues the four API operations (categories, menu,
//! order submission, image fetch) and maps failures to the typed
//! errors in `cantina-core`.

pub mod client;
pub mod types;

pub use client::MenuClient;
