// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The order/menu coordinator.
//!
//! One coordinator instance exists for the process lifetime and is
//! passed by reference to every consumer. It owns the live [`Order`]
//! and [`NavigationState`], mediates all network calls through the
//! [`MenuClient`], and mirrors every state change into the backing
//! [`ActivityRecord`] so a relaunch can restore where the user was.

use std::sync::Mutex;

use cantina_client::MenuClient;
use cantina_core::{CantinaError, MenuItem, Order};
use cantina_restore::{ActivityRecord, NavigationState};
use tracing::{debug, info};

/// Change notification fired synchronously on every order mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    /// An item was appended to the order.
    ItemAdded { item: MenuItem, len: usize },
    /// An item was removed by explicit row deletion.
    ItemRemoved { item: MenuItem, len: usize },
    /// The order was bulk-cleared after a confirmed submission.
    Cleared,
    /// The order was replaced from a persisted record.
    Restored { len: usize },
}

type Observer = Box<dyn Fn(&OrderEvent) + Send + Sync>;

/// Live state guarded by a single lock: order, navigation, and the
/// persisted projection are always mutated together.
struct LiveState {
    order: Order,
    navigation: NavigationState,
    record: ActivityRecord,
}

/// Single owner of live order/navigation state and mediator to the
/// network.
///
/// Methods take `&self`; an interior mutex serializes mutations since
/// concurrent unsynchronized appends/removals are undefined. Observers
/// are invoked synchronously on the mutating thread, after the state
/// lock is released.
pub struct OrderCoordinator {
    client: MenuClient,
    state: Mutex<LiveState>,
    observers: Mutex<Vec<Observer>>,
}

impl OrderCoordinator {
    /// Creates a coordinator with an empty order at the categories
    /// screen, mirroring both into a fresh activity record.
    pub fn new(client: MenuClient) -> Self {
        let order = Order::new();
        let navigation = NavigationState::Categories;
        let record = cantina_restore::encode(&navigation, &order);
        Self {
            client,
            state: Mutex::new(LiveState {
                order,
                navigation,
                record,
            }),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// The network client this coordinator mediates. Exposed so the
    /// image loader can share its connection pool.
    pub fn client(&self) -> &MenuClient {
        &self.client
    }

    /// Registers an observer for order change notifications.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&OrderEvent) + Send + Sync + 'static,
    {
        self.observers
            .lock()
            .expect("observer list poisoned")
            .push(Box::new(observer));
    }

    fn notify(&self, event: OrderEvent) {
        let observers = self.observers.lock().expect("observer list poisoned");
        for observer in observers.iter() {
            observer(&event);
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, LiveState> {
        self.state.lock().expect("coordinator state poisoned")
    }

    // --- navigation ---

    /// Updates the live navigation state and rewrites the record's
    /// discriminator and payload keys, clearing stale ones.
    pub fn set_navigation_state(&self, navigation: NavigationState) {
        let mut state = self.lock_state();
        debug!(kind = %navigation.kind(), "navigation state updated");
        state.record.set_state(&navigation);
        state.navigation = navigation;
    }

    /// Snapshot of the current navigation state.
    pub fn navigation_state(&self) -> NavigationState {
        self.lock_state().navigation.clone()
    }

    // --- order mutations ---

    /// Snapshot of the current order.
    pub fn order(&self) -> Order {
        self.lock_state().order.clone()
    }

    /// Appends an item to the order. Duplicates are allowed.
    pub fn add_item(&self, item: MenuItem) {
        let event = {
            let mut state = self.lock_state();
            state.order.menu_items.push(item.clone());
            let order = state.order.clone();
            state.record.set_order(&order);
            debug!(item_id = item.id, len = order.len(), "item added to order");
            OrderEvent::ItemAdded {
                item,
                len: order.len(),
            }
        };
        self.notify(event);
    }

    /// Removes the entry at `index`. Fails with `IndexOutOfRange` and
    /// leaves the order unchanged when `index >= len`.
    pub fn remove_item(&self, index: usize) -> Result<MenuItem, CantinaError> {
        let (item, len) = {
            let mut state = self.lock_state();
            let len = state.order.len();
            if index >= len {
                return Err(CantinaError::IndexOutOfRange { index, len });
            }
            let item = state.order.menu_items.remove(index);
            let order = state.order.clone();
            state.record.set_order(&order);
            (item, order.len())
        };
        debug!(item_id = item.id, index, len, "item removed from order");
        self.notify(OrderEvent::ItemRemoved {
            item: item.clone(),
            len,
        });
        Ok(item)
    }

    /// Empties the order. Called after a confirmed submission is
    /// acknowledged, never by `submit` itself.
    pub fn clear_order(&self) {
        {
            let mut state = self.lock_state();
            state.order.menu_items.clear();
            let order = state.order.clone();
            state.record.set_order(&order);
        }
        info!("order cleared");
        self.notify(OrderEvent::Cleared);
    }

    // --- network operations ---

    /// Fetches the category list.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, CantinaError> {
        self.client.fetch_categories().await
    }

    /// Fetches the menu items of one category.
    pub async fn fetch_menu_items(
        &self,
        category: &str,
    ) -> Result<Vec<MenuItem>, CantinaError> {
        self.client.fetch_menu_items(category).await
    }

    /// Submits the current order and returns the preparation time in
    /// minutes. Duplicate entries keep their order in the submitted id
    /// list. The order is not cleared here -- that is a separate step
    /// gated by user confirmation.
    pub async fn submit(&self) -> Result<u32, CantinaError> {
        let ids = self.lock_state().order.item_ids();
        let minutes = self.client.submit_order(&ids).await?;
        info!(items = ids.len(), minutes, "order submitted");
        Ok(minutes)
    }

    // --- restoration ---

    /// Snapshot of the backing activity record for persistence.
    pub fn activity_record(&self) -> ActivityRecord {
        self.lock_state().record.clone()
    }

    /// Replays a persisted record: the order and navigation state are
    /// recovered independently, each silently degrading to its default
    /// when its payload is missing or malformed.
    pub fn restore(&self, record: &ActivityRecord) {
        let order = cantina_restore::decode_order(record).unwrap_or_default();
        let navigation =
            cantina_restore::decode(record).unwrap_or(NavigationState::Categories);
        let len = order.len();
        {
            let mut state = self.lock_state();
            state.record = cantina_restore::encode(&navigation, &order);
            state.order = order;
            state.navigation = navigation;
        }
        debug!(len, "state restored from activity record");
        self.notify(OrderEvent::Restored { len });
    }
}
