// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the menu API.
//!
//! Provides [`MenuClient`] which issues the four menu operations and
//! maps HTTP and transport failures to [`CantinaError`] variants.
//! Retry policy belongs to the caller; nothing here retries.

use cantina_core::{CantinaError, MenuItem};
use tracing::debug;

use crate::types::{CategoriesResponse, MenuResponse, OrderRequest, OrderResponse};

/// HTTP client for the menu and ordering endpoints.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct MenuClient {
    client: reqwest::Client,
    base_url: String,
}

impl MenuClient {
    /// Creates a client against the given base endpoint, e.g.
    /// `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Returns the configured base endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the list of category keys from `GET {base}/categories`.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, CantinaError> {
        let url = format!("{}/categories", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!(%status, url = %url, "categories response received");
        if status.as_u16() != 200 {
            return Err(CantinaError::CategoriesNotFound);
        }

        let body: CategoriesResponse = decode_json(response).await?;
        Ok(body.categories)
    }

    /// Fetches the menu items of one category from
    /// `GET {base}/menu?category={category}`.
    pub async fn fetch_menu_items(
        &self,
        category: &str,
    ) -> Result<Vec<MenuItem>, CantinaError> {
        let url = format!("{}/menu", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("category", category)])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!(%status, category, "menu response received");
        if status.as_u16() != 200 {
            return Err(CantinaError::MenuItemsNotFound {
                category: category.to_string(),
            });
        }

        let body: MenuResponse = decode_json(response).await?;
        Ok(body.items)
    }

    /// Submits an order as `POST {base}/order` with body
    /// `{"menuIds": [...]}` and returns the preparation time in minutes.
    ///
    /// An empty id list is still submitted; the server decides whether
    /// to accept it.
    pub async fn submit_order(&self, menu_ids: &[i64]) -> Result<u32, CantinaError> {
        let url = format!("{}/order", self.base_url);
        let request = OrderRequest {
            menu_ids: menu_ids.to_vec(),
        };
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!(%status, items = menu_ids.len(), "order response received");
        if status.as_u16() != 200 {
            return Err(CantinaError::OrderRequestFailed);
        }

        let body: OrderResponse = decode_json(response).await?;
        Ok(body.prep_time)
    }

    /// Fetches an item image from its absolute URL.
    ///
    /// Returns the raw bytes after verifying they carry a known raster
    /// image signature; anything else is [`CantinaError::ImageDataMissing`].
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, CantinaError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(CantinaError::ImageDataMissing);
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        if !looks_like_image(&bytes) {
            return Err(CantinaError::ImageDataMissing);
        }
        debug!(url, size = bytes.len(), "image downloaded");
        Ok(bytes.to_vec())
    }
}

/// Maps a reqwest failure to the transport error variant.
fn transport_error(err: reqwest::Error) -> CantinaError {
    CantinaError::Transport {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}

/// Reads and decodes a JSON response body.
async fn decode_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, CantinaError> {
    let body = response.text().await.map_err(transport_error)?;
    serde_json::from_str(&body).map_err(|e| CantinaError::Deserialization {
        message: format!("failed to parse response body: {e}"),
    })
}

/// Checks the leading bytes for a known raster format signature
/// (PNG, JPEG, GIF, WebP, BMP).
fn looks_like_image(bytes: &[u8]) -> bool {
    bytes.starts_with(b"\x89PNG\r\n\x1a\n")
        || bytes.starts_with(b"\xff\xd8\xff")
        || bytes.starts_with(b"GIF87a")
        || bytes.starts_with(b"GIF89a")
        || (bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP")
        || bytes.starts_with(b"BM")
}
