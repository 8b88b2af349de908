// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire envelopes for the menu API.

use cantina_core::MenuItem;
use serde::{Deserialize, Serialize};

/// Response body of `GET /categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Response body of `GET /menu?category=...`.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuResponse {
    pub items: Vec<MenuItem>,
}

/// Request body of `POST /order`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    #[serde(rename = "menuIds")]
    pub menu_ids: Vec<i64>,
}

/// Response body of `POST /order`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    /// Estimated preparation time in minutes.
    #[serde(rename = "preparation_time")]
    pub prep_time: u32,
}
