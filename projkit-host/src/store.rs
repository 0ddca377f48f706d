//! In-memory legacy item store.

use async_trait::async_trait;
use dashmap::DashMap;

use projkit_core::error::Result;
use projkit_core::items::{LegacyItemStore, StoreItem};
use projkit_core::metadata::MetadataMap;

/// Legacy item store backed by a concurrent map keyed by item kind.
///
/// Individual operations are atomic per kind, but nothing orders calls
/// against each other: two racing upserts of the same item leave behind
/// whichever write landed last.
pub struct MemoryItemStore {
    items: DashMap<String, Vec<StoreItem>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Snapshot of the items of one kind, in store order.
    pub fn snapshot(&self, kind: &str) -> Vec<StoreItem> {
        self.items
            .get(kind)
            .map(|items| items.clone())
            .unwrap_or_default()
    }

    /// Updates the item matching `spec` in place (ASCII
    /// case-insensitive, keeping the stored identity's casing), or
    /// appends a new item.
    pub fn upsert(&self, kind: &str, spec: &str, metadata: MetadataMap) {
        let mut items = self.items.entry(kind.to_string()).or_default();
        match items
            .iter_mut()
            .find(|item| item.spec.eq_ignore_ascii_case(spec))
        {
            Some(item) => {
                for (name, value) in metadata {
                    item.metadata.insert(name, value);
                }
            }
            None => items.push(StoreItem::new(spec.to_string(), metadata)),
        }
    }

    /// Removes the item matching `spec` (ASCII case-insensitive).
    /// Returns whether anything was removed.
    pub fn remove(&self, kind: &str, spec: &str) -> bool {
        match self.items.get_mut(kind) {
            Some(mut items) => {
                let before = items.len();
                items.retain(|item| !item.spec.eq_ignore_ascii_case(spec));
                items.len() != before
            }
            None => false,
        }
    }

    /// Number of items of one kind.
    pub fn len(&self, kind: &str) -> usize {
        self.items.get(kind).map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self, kind: &str) -> bool {
        self.len(kind) == 0
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LegacyItemStore for MemoryItemStore {
    async fn items_of_kind(&self, kind: &str) -> Result<Vec<StoreItem>> {
        Ok(self.snapshot(kind))
    }

    async fn upsert_item(&self, kind: &str, spec: &str, metadata: MetadataMap) -> Result<()> {
        self.upsert(kind, spec, metadata);
        Ok(())
    }

    async fn remove_item(&self, kind: &str, spec: &str) -> Result<bool> {
        Ok(self.remove(kind, spec))
    }
}
