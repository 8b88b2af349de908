// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure transformations between live state and the activity record.
//!
//! Decoding never raises: any malformed or partial record degrades to
//! "no restorable state" so restoration can never block startup.

use cantina_core::Order;
use tracing::debug;

use crate::record::ActivityRecord;
use crate::state::{NavigationState, StateKind};

/// Produces a fresh record for the given state and order.
///
/// The discriminator and the order are always written; the category or
/// item payload only for the variant that carries it.
pub fn encode(state: &NavigationState, order: &Order) -> ActivityRecord {
    let mut record = ActivityRecord::default();
    record.set_state(state);
    record.set_order(order);
    record
}

/// Reconstructs the navigation state from a record.
///
/// Returns `None` when the discriminator is missing or unknown, or when
/// the variant's required payload is missing or fails to deserialize.
pub fn decode(record: &ActivityRecord) -> Option<NavigationState> {
    let kind = record.state_kind()?;
    match kind {
        StateKind::Categories => Some(NavigationState::Categories),
        StateKind::Order => Some(NavigationState::Order),
        StateKind::Menu => {
            let category = record.menu_category.clone().filter(|c| !c.is_empty());
            if category.is_none() {
                debug!("menu discriminator without category, no restorable state");
            }
            Some(NavigationState::Menu {
                category: category?,
            })
        }
        StateKind::MenuItemDetail => {
            let item = record.decode_menu_item();
            if item.is_none() {
                debug!("detail discriminator without item payload, no restorable state");
            }
            Some(NavigationState::MenuItemDetail { item: item? })
        }
    }
}

/// Recovers the persisted order independently of the navigation state.
pub fn decode_order(record: &ActivityRecord) -> Option<Order> {
    record.decode_order()
}
