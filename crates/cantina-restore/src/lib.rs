// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! State restoration for the Cantina ordering client.
//!
//! Serializes "where the user was" (navigation state plus the current
//! order) into a portable [`ActivityRecord`] and replays it after a
//! relaunch. Decoding is total: malformed records yield `None`, never
//! an error.

pub mod codec;
pub mod record;
pub mod state;

pub use codec::{decode, decode_order, encode};
pub use record::ActivityRecord;
pub use state::{navigation_steps, NavigationState, NavigationStep, StateKind};
