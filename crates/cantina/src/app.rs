// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application shell: wires the coordinator to the persisted activity
//! record and implements the screen-level commands.
//!
//! The state file plays the role the OS activity store plays for the
//! mobile app: the record is loaded before the first command and saved
//! after every one, so a later invocation resumes where this one left
//! off.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use cantina_core::{display_category, CantinaError, MenuItem};
use cantina_images::RowImageLoader;
use cantina_order::{OrderCoordinator, OrderEvent};
use cantina_restore::{navigation_steps, ActivityRecord, NavigationState, NavigationStep};
use tracing::{debug, warn};

/// The running application: one coordinator plus the record location.
pub struct App {
    coordinator: OrderCoordinator,
    state_path: PathBuf,
}

impl App {
    /// Builds the app, restoring order and navigation from the state
    /// file. A missing or malformed file silently yields the defaults.
    pub fn new(coordinator: OrderCoordinator, state_path: impl Into<PathBuf>) -> Self {
        let state_path = state_path.into();
        let record = load_record(&state_path);
        coordinator.restore(&record);

        // Mirror of the order badge: report the entry count after every
        // order change.
        coordinator.subscribe(|event| match event {
            OrderEvent::ItemAdded { item, len } => {
                println!("added {} -- {len} item(s) in order", item.name);
            }
            OrderEvent::ItemRemoved { item, len } => {
                println!("removed {} -- {len} item(s) in order", item.name);
            }
            OrderEvent::Cleared => println!("order cleared"),
            OrderEvent::Restored { .. } => {}
        });

        Self {
            coordinator,
            state_path,
        }
    }

    /// Persists the coordinator's current record to the state file.
    pub fn save(&self) {
        if let Err(e) = save_record(&self.state_path, &self.coordinator.activity_record()) {
            warn!(path = %self.state_path.display(), error = %e, "failed to save activity record");
        }
    }

    /// Lists the available categories.
    pub async fn categories(&self) -> Result<(), CantinaError> {
        let categories = self.coordinator.fetch_categories().await?;
        self.coordinator
            .set_navigation_state(NavigationState::Categories);
        for category in &categories {
            println!("{}", display_category(category));
        }
        Ok(())
    }

    /// Lists the items of one category, prefetching row images the way
    /// the menu screen does.
    pub async fn menu(&self, category: &str) -> Result<(), CantinaError> {
        let items = self.coordinator.fetch_menu_items(category).await?;
        self.coordinator.set_navigation_state(NavigationState::Menu {
            category: category.to_string(),
        });

        println!("{}", display_category(category));
        let loader = RowImageLoader::new(self.coordinator.client().clone());
        let mut fetches = Vec::new();
        for (row, item) in items.iter().enumerate() {
            println!("  [{}] {} -- ${:.2}", item.id, item.name, item.price);
            let name = item.name.clone();
            fetches.push(loader.bind_row(row, item, move |bytes| {
                debug!(item = %name, size = bytes.len(), "row image fetched");
            }));
        }
        // Image failures are silent per row; the listing already printed.
        for fetch in fetches {
            let _ = fetch.await;
        }
        Ok(())
    }

    /// Shows one item's detail screen.
    pub async fn item(&self, category: &str, id: i64) -> Result<(), CantinaError> {
        let item = self.find_item(category, id).await?;
        println!("{} -- ${:.2}", item.name, item.price);
        println!("{}", item.detail_text);
        self.coordinator
            .set_navigation_state(NavigationState::MenuItemDetail { item });
        Ok(())
    }

    /// Adds one item from a category to the order.
    pub async fn add(&self, category: &str, id: i64) -> Result<(), CantinaError> {
        let item = self.find_item(category, id).await?;
        self.coordinator.add_item(item);
        Ok(())
    }

    /// Removes the order entry at `index`.
    pub fn remove(&self, index: usize) -> Result<(), CantinaError> {
        self.coordinator.remove_item(index)?;
        Ok(())
    }

    /// Prints the current order and switches to the order view.
    pub fn show(&self) {
        self.coordinator.set_navigation_state(NavigationState::Order);
        let order = self.coordinator.order();
        if order.is_empty() {
            println!("order is empty");
            return;
        }
        for (index, item) in order.menu_items.iter().enumerate() {
            println!("  {index}: {} -- ${:.2}", item.name, item.price);
        }
        println!("total: ${:.2}", order.total());
    }

    /// Submits the order after confirmation, then clears it once the
    /// confirmation is acknowledged.
    pub async fn submit(&self, assume_yes: bool) -> Result<(), CantinaError> {
        let order = self.coordinator.order();
        println!(
            "submitting {} item(s), total ${:.2}",
            order.len(),
            order.total()
        );
        if !assume_yes && !confirm("proceed? [y/N] ") {
            println!("cancelled");
            return Ok(());
        }

        let minutes = self.coordinator.submit().await?;
        println!("order accepted -- ready in about {minutes} minute(s)");

        // The order survives submission until the confirmation is
        // dismissed; printing it was our confirmation screen.
        self.coordinator.clear_order();
        Ok(())
    }

    /// Replays the persisted record as the navigation path a relaunch
    /// would rebuild.
    pub fn resume(&self) {
        let record = load_record(&self.state_path);
        let Some(state) = cantina_restore::decode(&record) else {
            println!("no restorable state");
            return;
        };

        let steps = navigation_steps(&state);
        if steps.is_empty() {
            println!("restored at the category list");
        }
        for step in steps {
            match step {
                NavigationStep::PushMenu(category) => {
                    println!("push menu: {}", display_category(&category));
                }
                NavigationStep::PushDetail(item) => {
                    println!("push detail: {}", item.name);
                }
                NavigationStep::ShowOrder => println!("show order view"),
            }
        }
        if let Some(order) = cantina_restore::decode_order(&record) {
            println!("order: {} item(s)", order.len());
        }
    }

    async fn find_item(&self, category: &str, id: i64) -> Result<MenuItem, CantinaError> {
        let items = self.coordinator.fetch_menu_items(category).await?;
        items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(CantinaError::ItemNotFound {
                category: category.to_string(),
                id,
            })
    }
}

/// Loads the activity record, degrading to an empty record on any
/// failure; restoration must never block startup.
pub fn load_record(path: &Path) -> ActivityRecord {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no activity record to restore");
            return ActivityRecord::default();
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(record) => record,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "activity record malformed, starting fresh");
            ActivityRecord::default()
        }
    }
}

/// Writes the activity record, creating parent directories as needed.
pub fn save_record(path: &Path, record: &ActivityRecord) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let bytes = serde_json::to_vec_pretty(record)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    std::fs::write(path, bytes)
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    let _ = std::io::stdout().flush();
    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantina_client::MenuClient;
    use cantina_core::Order;

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
    fn record_round_trips_through_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("activity.json");

        let record = cantina_restore::encode(
            &NavigationState::Menu {
                category: "tacos".into(),
            },
            &Order {
                menu_items: vec![taco()],
            },
        );
        save_record(&path, &record).unwrap();

        let loaded = load_record(&path);
        assert_eq!(loaded, record);
        assert_eq!(cantina_restore::decode_order(&loaded).unwrap().len(), 1);
    }

    #[test]
    fn missing_state_file_loads_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let record = load_record(&dir.path().join("absent.json"));
        assert_eq!(record, ActivityRecord::default());
    }

    #[test]
    fn corrupt_state_file_loads_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity.json");
        std::fs::write(&path, b"{not json").unwrap();
        assert_eq!(load_record(&path), ActivityRecord::default());
    }

    #[tokio::test]
    async fn app_restores_order_from_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity.json");
        let record = cantina_restore::encode(
            &NavigationState::Order,
            &Order {
                menu_items: vec![taco(), taco()],
            },
        );
        save_record(&path, &record).unwrap();

        let app = App::new(
            OrderCoordinator::new(MenuClient::new("http://localhost:8080")),
            &path,
        );
        assert_eq!(app.coordinator.order().item_ids(), vec![1, 1]);
        assert_eq!(app.coordinator.navigation_state(), NavigationState::Order);
    }

    #[tokio::test]
    async fn adding_an_unknown_id_reports_item_not_found() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/menu"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(
                serde_json::json!({
                    "items": [{
                        "id": 1,
                        "name": "Taco",
                        "description": "Spicy",
                        "price": 3.5,
                        "category": "tacos",
                        "image_url": "http://x/y.png"
                    }]
                }),
            ))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let app = App::new(
            OrderCoordinator::new(MenuClient::new(server.uri())),
            dir.path().join("activity.json"),
        );

        let err = app.add("tacos", 5).await.unwrap_err();
        match err {
            CantinaError::ItemNotFound { category, id } => {
                assert_eq!(category, "tacos");
                assert_eq!(id, 5);
            }
            other => panic!("expected ItemNotFound, got {other:?}"),
        }
        assert!(app.coordinator.order().is_empty());
    }

    #[tokio::test]
    async fn save_then_relaunch_resumes_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity.json");

        let first = App::new(
            OrderCoordinator::new(MenuClient::new("http://localhost:8080")),
            &path,
        );
        first.coordinator.add_item(taco());
        first
            .coordinator
            .set_navigation_state(NavigationState::Menu {
                category: "tacos".into(),
            });
        first.save();

        let second = App::new(
            OrderCoordinator::new(MenuClient::new("http://localhost:8080")),
            &path,
        );
        assert_eq!(second.coordinator.order().len(), 1);
        assert_eq!(
            second.coordinator.navigation_state(),
            NavigationState::Menu {
                category: "tacos".into()
            }
        );
    }
}
