// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Navigation state: where in the app the user currently is.

use cantina_core::MenuItem;
use strum::{Display, EnumString};

/// Tagged description of the screen/context the user occupies.
///
/// `Menu` and `MenuItemDetail` always carry their payload; a persisted
/// record missing that payload is treated as having no restorable state.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationState {
    /// The category list (root screen).
    Categories,
    /// The menu of one category.
    Menu { category: String },
    /// The detail screen of one item.
    MenuItemDetail { item: MenuItem },
    /// The order tab.
    Order,
}

impl NavigationState {
    /// The stable discriminator for this state.
    pub fn kind(&self) -> StateKind {
        match self {
            NavigationState::Categories => StateKind::Categories,
            NavigationState::Menu { .. } => StateKind::Menu,
            NavigationState::MenuItemDetail { .. } => StateKind::MenuItemDetail,
            NavigationState::Order => StateKind::Order,
        }
    }
}

/// Stable string discriminator persisted alongside each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum StateKind {
    #[strum(serialize = "categories")]
    Categories,
    #[strum(serialize = "menu")]
    Menu,
    #[strum(serialize = "menuItemDetail")]
    MenuItemDetail,
    #[strum(serialize = "order")]
    Order,
}

/// One step the UI collaborator performs to rebuild navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationStep {
    /// Push the menu screen for a category.
    PushMenu(String),
    /// Push the detail screen for an item.
    PushDetail(MenuItem),
    /// Switch to the order view without pushing.
    ShowOrder,
}

/// Expands a restored state into the ordered screen pushes that rebuild
/// the navigation path.
///
/// A detail screen is never reachable without its parent menu screen
/// beneath it in history, so `MenuItemDetail` yields two steps.
pub fn navigation_steps(state: &NavigationState) -> Vec<NavigationStep> {
    match state {
        NavigationState::Categories => Vec::new(),
        NavigationState::Menu { category } => {
            vec![NavigationStep::PushMenu(category.clone())]
        }
        NavigationState::MenuItemDetail { item } => vec![
            NavigationStep::PushMenu(item.category.clone()),
            NavigationStep::PushDetail(item.clone()),
        ],
        NavigationState::Order => vec![NavigationStep::ShowOrder],
    }
}
