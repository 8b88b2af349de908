// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain models shared across the Cantina workspace.

use serde::{Deserialize, Serialize};

/// A single item on the restaurant menu.
///
/// Immutable once constructed; two items are the same dish iff their
/// `id` matches. On the wire `detail_text` is named `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Longer display text. Named `description` in the JSON payload.
    #[serde(rename = "description")]
    pub detail_text: String,
    /// Price in the menu currency.
    pub price: f64,
    /// Category key this item belongs to.
    pub category: String,
    /// Absolute URL of the item's image.
    pub image_url: String,
}

/// The user's current order: an ordered list of menu items.
///
/// Duplicates are allowed -- adding the same item twice yields two
/// entries. Exactly one logical order exists per process; it is owned
/// by the coordinator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub menu_items: Vec<MenuItem>,
}

impl Order {
    /// Creates an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in the order (duplicates counted).
    pub fn len(&self) -> usize {
        self.menu_items.len()
    }

    /// True when the order has no entries.
    pub fn is_empty(&self) -> bool {
        self.menu_items.is_empty()
    }

    /// Ordered item ids for submission, duplicates preserved.
    pub fn item_ids(&self) -> Vec<i64> {
        self.menu_items.iter().map(|item| item.id).collect()
    }

    /// Sum of entry prices, for the submission confirmation prompt.
    pub fn total(&self) -> f64 {
        self.menu_items.iter().map(|item| item.price).sum()
    }
}

/// Capitalizes a category key for display ("tacos" -> "Tacos").
pub fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taco() -> MenuItem {
        MenuItem {
            id: 1,
            name: "Taco".into(),
            detail_text: "Spicy".into(),
            price: 3.5,
            category: "tacos".into(),
            image_url: "http://x/y.png".into(),
        }
    }

    #[test]
    fn menu_item_decodes_with_renamed_fields() {
        let json = r#"{"id":1,"name":"Taco","description":"Spicy","price":3.5,"category":"tacos","image_url":"http://x/y.png"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item, taco());
    }

    #[test]
    fn menu_item_encodes_wire_field_names() {
        let json = serde_json::to_value(taco()).unwrap();
        assert_eq!(json["description"], "Spicy");
        assert_eq!(json["image_url"], "http://x/y.png");
        assert!(json.get("detail_text").is_none());
    }

    #[test]
    fn order_preserves_duplicates_and_ordering() {
        let mut order = Order::new();
        order.menu_items.push(taco());
        order.menu_items.push(taco());
        assert_eq!(order.len(), 2);
        assert_eq!(order.item_ids(), vec![1, 1]);
        assert_eq!(order.total(), 7.0);
    }

    #[test]
    fn order_round_trips_through_json() {
        let order = Order {
            menu_items: vec![taco(), taco()],
        };
        let bytes = serde_json::to_vec(&order).unwrap();
        let back: Order = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(order, back);
    }

    #[test]
    fn display_category_capitalizes_first_letter() {
        assert_eq!(display_category("tacos"), "Tacos");
        assert_eq!(display_category(""), "");
    }
}
