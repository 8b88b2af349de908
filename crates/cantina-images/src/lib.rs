// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image cache glue for the Cantina ordering client.
//!
//! [`RowImageLoader`] runs one cancellable image fetch per visible list
//! row, cancelling on reuse and discarding results for rows that were
//! rebound while the fetch was in flight.

pub mod loader;

pub use loader::RowImageLoader;
