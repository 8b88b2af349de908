// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Order/menu coordination for the Cantina ordering client.
//!
//! [`OrderCoordinator`] is the single owner of the live order and
//! navigation state. Consumers hold a reference to one explicitly
//! constructed instance; there is no hidden global.

pub mod coordinator;

pub use coordinator::{OrderCoordinator, OrderEvent};
