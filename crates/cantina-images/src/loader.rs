// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-row image loading with reuse-safe cancellation.
//!
//! Each visible list row gets at most one in-flight image fetch, keyed
//! by row position. Binding a row cancels the previous fetch for that
//! key; a completed fetch only applies its image if the row still shows
//! the item the fetch was started for. List rows are recycled, so the
//! same key can be rebound to a different item while a fetch is in
//! flight -- correctness rests on the still-bound check, not on
//! completion order.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use cantina_client::MenuClient;
use cantina_core::MenuItem;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// An in-flight fetch registered for a row key.
struct RowBinding {
    token: CancellationToken,
    item_id: i64,
    /// Distinguishes this binding from later rebindings of the same key.
    generation: u64,
}

/// Loads item images for visible rows, one cancellable fetch per row key.
pub struct RowImageLoader {
    client: MenuClient,
    rows: Arc<Mutex<HashMap<usize, RowBinding>>>,
    next_generation: AtomicU64,
}

impl RowImageLoader {
    pub fn new(client: MenuClient) -> Self {
        Self {
            client,
            rows: Arc::new(Mutex::new(HashMap::new())),
            next_generation: AtomicU64::new(0),
        }
    }

    /// Binds `row` to `item` and starts its image fetch.
    ///
    /// Any fetch previously registered for the row is cancelled first;
    /// the consumer is expected to show its placeholder until `apply`
    /// runs. `apply` receives the image bytes only if the row is still
    /// bound to the same item when the fetch completes. Fetch failures
    /// are silent -- the placeholder stays.
    ///
    /// Returns the spawned task handle so callers (and tests) can await
    /// completion; the handle may be dropped freely.
    pub fn bind_row<F>(&self, row: usize, item: &MenuItem, apply: F) -> JoinHandle<()>
    where
        F: FnOnce(Vec<u8>) + Send + 'static,
    {
        let token = CancellationToken::new();
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);

        let previous = self.rows.lock().expect("row map poisoned").insert(
            row,
            RowBinding {
                token: token.clone(),
                item_id: item.id,
                generation,
            },
        );
        if let Some(previous) = previous {
            previous.token.cancel();
        }

        let client = self.client.clone();
        let rows = Arc::clone(&self.rows);
        let url = item.image_url.clone();
        let item_id = item.id;

        tokio::spawn(async move {
            let fetched = tokio::select! {
                _ = token.cancelled() => {
                    debug!(row, item_id, "image fetch cancelled");
                    None
                }
                result = client.fetch_image(&url) => result.ok(),
            };

            // Deregister and decide applicability under one lock: the
            // row may have been rebound to a different item meanwhile.
            // `apply` itself runs after the lock is released; all
            // binds for a screen happen on its single consumer task,
            // so no rebind can land between the check and the apply.
            let still_bound = {
                let mut rows = rows.lock().expect("row map poisoned");
                match rows.get(&row) {
                    Some(binding) if binding.generation == generation => {
                        rows.remove(&row);
                        true
                    }
                    _ => false,
                }
            };

            match fetched {
                Some(bytes) if still_bound => apply(bytes),
                Some(_) => debug!(row, item_id, "row rebound, image discarded"),
                None => {}
            }
        })
    }

    /// Cancels the fetch registered for one row, if any. Best-effort;
    /// never blocks or errors.
    pub fn cancel_row(&self, row: usize) {
        if let Some(binding) = self.rows.lock().expect("row map poisoned").remove(&row) {
            binding.token.cancel();
        }
    }

    /// Cancels all outstanding fetches, e.g. when the screen disappears.
    pub fn cancel_all(&self) {
        let mut rows = self.rows.lock().expect("row map poisoned");
        for (_, binding) in rows.drain() {
            binding.token.cancel();
        }
    }

    /// Number of fetches currently registered.
    pub fn in_flight(&self) -> usize {
        self.rows.lock().expect("row map poisoned").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00";

    fn item(id: i64, image_url: String) -> MenuItem {
        MenuItem {
            id,
            name: format!("Item {id}"),
            detail_text: String::new(),
            price: 1.0,
            category: "tacos".into(),
            image_url,
        }
    }

    #[tokio::test]
    async fn completed_fetch_applies_image_and_deregisters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_HEADER))
            .mount(&server)
            .await;

        let loader = RowImageLoader::new(MenuClient::new(server.uri()));
        let (tx, rx) = std::sync::mpsc::channel();
        let handle = loader.bind_row(0, &item(1, format!("{}/1.png", server.uri())), move |bytes| {
            tx.send(bytes).unwrap();
        });
        handle.await.unwrap();

        assert_eq!(rx.try_recv().unwrap(), PNG_HEADER);
        assert_eq!(loader.in_flight(), 0);
    }

    #[tokio::test]
    async fn rebinding_a_row_cancels_the_first_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow.png"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(PNG_HEADER)
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/fast.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_HEADER))
            .mount(&server)
            .await;

        let loader = RowImageLoader::new(MenuClient::new(server.uri()));
        let (tx, rx) = std::sync::mpsc::channel();

        let tx_first = tx.clone();
        let first = loader.bind_row(
            0,
            &item(1, format!("{}/slow.png", server.uri())),
            move |_| {
                tx_first.send(1).unwrap();
            },
        );
        let second = loader.bind_row(
            0,
            &item(2, format!("{}/fast.png", server.uri())),
            move |_| {
                tx.send(2).unwrap();
            },
        );

        first.await.unwrap();
        second.await.unwrap();

        // Only the second fetch's result is ever applied.
        assert_eq!(rx.try_recv().unwrap(), 2);
        assert!(rx.try_recv().is_err());
        assert_eq!(loader.in_flight(), 0);
    }

    #[tokio::test]
    async fn superseded_task_does_not_deregister_the_new_binding() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a.png"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(PNG_HEADER)
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/b.png"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(PNG_HEADER)
                    .set_delay(Duration::from_millis(400)),
            )
            .mount(&server)
            .await;

        let loader = RowImageLoader::new(MenuClient::new(server.uri()));
        let (tx, rx) = std::sync::mpsc::channel();

        let tx_a = tx.clone();
        let first = loader.bind_row(3, &item(1, format!("{}/a.png", server.uri())), move |_| {
            tx_a.send("a").unwrap();
        });
        let second = loader.bind_row(3, &item(2, format!("{}/b.png", server.uri())), move |_| {
            tx.send("b").unwrap();
        });

        // The cancelled first task finishes quickly; the row key must
        // still track the second fetch afterwards.
        first.await.unwrap();
        assert_eq!(loader.in_flight(), 1);

        second.await.unwrap();
        assert_eq!(rx.try_recv().unwrap(), "b");
        assert!(rx.try_recv().is_err());
        assert_eq!(loader.in_flight(), 0);
    }

    #[tokio::test]
    async fn failed_fetch_is_silent_and_deregisters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.png"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let loader = RowImageLoader::new(MenuClient::new(server.uri()));
        let (tx, rx) = std::sync::mpsc::channel::<Vec<u8>>();
        let handle = loader.bind_row(
            0,
            &item(1, format!("{}/missing.png", server.uri())),
            move |bytes| {
                tx.send(bytes).unwrap();
            },
        );
        handle.await.unwrap();

        assert!(rx.try_recv().is_err());
        assert_eq!(loader.in_flight(), 0);
    }

    #[tokio::test]
    async fn cancel_all_stops_outstanding_fetches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow.png"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(PNG_HEADER)
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let loader = RowImageLoader::new(MenuClient::new(server.uri()));
        let (tx, rx) = std::sync::mpsc::channel::<Vec<u8>>();

        let mut handles = Vec::new();
        for row in 0..3 {
            let tx = tx.clone();
            handles.push(loader.bind_row(
                row,
                &item(row as i64, format!("{}/slow.png", server.uri())),
                move |bytes| {
                    tx.send(bytes).unwrap();
                },
            ));
        }
        assert_eq!(loader.in_flight(), 3);

        loader.cancel_all();
        for handle in handles {
            handle.await.unwrap();
        }

        assert!(rx.try_recv().is_err());
        assert_eq!(loader.in_flight(), 0);
    }

    #[tokio::test]
    async fn cancel_row_is_best_effort_for_unknown_rows() {
        let loader = RowImageLoader::new(MenuClient::new("http://localhost:8080"));
        // No fetch registered for this key; must not panic or block.
        loader.cancel_row(42);
        loader.cancel_all();
    }
}
