// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The persisted activity record: a portable key-value snapshot.
//!
//! Only the keys relevant to the current discriminator are populated;
//! a state transition clears the other variants' payload keys rather
//! than leaving stale values behind.

use cantina_core::{MenuItem, Order};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::state::{NavigationState, StateKind};

/// Portable key-value snapshot used to restore navigation and order
/// after relaunch.
///
/// External key names (`discriminator`, `order`, `menuCategory`,
/// `menuItem`) are part of the persisted contract. `order` and
/// `menuItem` hold serialized JSON bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<u8>>,

    #[serde(
        rename = "menuCategory",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub menu_category: Option<String>,

    #[serde(rename = "menuItem", default, skip_serializing_if = "Option::is_none")]
    pub menu_item: Option<Vec<u8>>,
}

impl ActivityRecord {
    /// Writes the navigation state into the record: the discriminator is
    /// always written, the variant payload is written, and the other
    /// variants' payload keys are cleared.
    pub fn set_state(&mut self, state: &NavigationState) {
        self.discriminator = Some(state.kind().to_string());
        match state {
            NavigationState::Menu { category } => {
                self.menu_category = Some(category.clone());
                self.menu_item = None;
            }
            NavigationState::MenuItemDetail { item } => {
                self.menu_item = serde_json::to_vec(item).ok();
                self.menu_category = None;
            }
            NavigationState::Categories | NavigationState::Order => {
                self.menu_category = None;
                self.menu_item = None;
            }
        }
    }

    /// Serializes the order into the record. The order key is kept
    /// regardless of the navigation variant.
    ///
    /// An encode failure leaves the key absent -- restoration degrades
    /// to an empty order rather than failing.
    pub fn set_order(&mut self, order: &Order) {
        self.order = match serde_json::to_vec(order) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(error = %e, "failed to encode order into activity record");
                None
            }
        };
    }

    /// Parses the discriminator, if present and recognized.
    pub fn state_kind(&self) -> Option<StateKind> {
        self.discriminator.as_deref()?.parse().ok()
    }

    /// Decodes the stored order bytes, if present and well formed.
    pub fn decode_order(&self) -> Option<Order> {
        serde_json::from_slice(self.order.as_deref()?).ok()
    }

    /// Decodes the stored menu item bytes, if present and well formed.
    pub fn decode_menu_item(&self) -> Option<MenuItem> {
        serde_json::from_slice(self.menu_item.as_deref()?).ok()
    }
}
