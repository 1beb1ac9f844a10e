//! In-memory product catalog
//!
//! An ordered, append-only list of items shared by every connection. Reads
//! (listing) may run concurrently; an append holds the write lock, so once
//! `append` returns the new item is visible to every later read.

use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A named, priced catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Inclusive price bounds plus an optional cap on how many matches to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceFilter {
    pub min_price: i64,
    pub top_price: i64,
    pub limit: Option<usize>,
}

impl Default for PriceFilter {
    fn default() -> Self {
        Self {
            min_price: 0,
            top_price: i64::from(i32::MAX),
            limit: None,
        }
    }
}

impl PriceFilter {
    pub fn matches(&self, item: &Item) -> bool {
        let price = i64::from(item.price);
        price >= self.min_price && price <= self.top_price
    }
}

/// Handle to the shared catalog. Clones point at the same items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Arc<RwLock<Vec<Item>>>,
}

impl Catalog {
    /// Create a catalog holding `items` in the given order
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// The five bootstrap products: `Product1`..`Product5` priced 100..500
    pub fn seeded() -> Self {
        Self::new(default_seed())
    }

    /// Append an item at the end
    pub async fn append(&self, item: Item) {
        let mut items = self.items.write().await;
        tracing::debug!(name = %item.name, price = item.price, position = items.len(), "Catalog item appended");
        items.push(item);
    }

    /// Items matching `filter`, in insertion order, at most `filter.limit` of them.
    /// No limit means the whole catalog as it stands under the read lock.
    pub async fn filter(&self, filter: PriceFilter) -> Vec<Item> {
        self.items
            .read()
            .await
            .iter()
            .filter(|item| filter.matches(item))
            .take(filter.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Snapshot of every item (for tests and debugging)
    pub async fn items(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }
}

pub fn default_seed() -> Vec<Item> {
    (1..=5)
        .map(|i| Item::new(format!("Product{}", i), 100 * i))
        .collect()
}
