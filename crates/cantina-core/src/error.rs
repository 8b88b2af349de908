// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Cantina ordering client.

use thiserror::Error;

/// The primary error type used across the Cantina workspace.
///
/// Network and decoding failures carry a human-readable message for
/// direct presentation; no operation retries automatically.
#[derive(Debug, Error)]
pub enum CantinaError {
    /// The categories endpoint returned a non-200 status.
    #[error("categories not found")]
    CategoriesNotFound,

    /// The menu endpoint returned a non-200 status for the given category.
    #[error("menu items not found for category \"{category}\"")]
    MenuItemsNotFound { category: String },

    /// The order submission endpoint returned a non-200 status.
    #[error("order request failed")]
    OrderRequestFailed,

    /// An image fetch returned a non-200 status or bytes that are not an image.
    #[error("image data missing")]
    ImageDataMissing,

    /// Transport-layer failure (DNS, connection refused, timeout).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An order index was outside the current order length.
    #[error("index {index} out of range for order of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// A response body could not be decoded into the expected shape.
    #[error("deserialization failed: {message}")]
    Deserialization { message: String },

    /// A category's menu was fetched but does not contain the given id.
    #[error("item {id} not found in category \"{category}\"")]
    ItemNotFound { category: String, id: i64 },
}
