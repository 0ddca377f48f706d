//! Legacy item store seam.
//!
//! Non-SDK project files model references as generic metadata-bearing
//! items rather than first-class reference objects. This trait is the
//! read/write surface adapters use to synthesize reference descriptors
//! from those items.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metadata::MetadataMap;

/// Item kind under which project references are stored.
pub const PROJECT_REFERENCE_ITEM: &str = "ProjectReference";

/// Item kind under which package references are stored.
pub const PACKAGE_REFERENCE_ITEM: &str = "PackageReference";

/// Metadata element carrying a package reference's version.
pub const VERSION_METADATA: &str = "Version";

/// One metadata-bearing item in the legacy item store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreItem {
    /// Item identity (a package name or a referenced project path).
    pub spec: String,
    pub metadata: MetadataMap,
}

impl StoreItem {
    pub fn new(spec: String, metadata: MetadataMap) -> Self {
        Self { spec, metadata }
    }
}

/// Read/write access to a legacy project file's item store.
///
/// The store is externally owned and shared; implementations perform no
/// caching, so every call reflects live state. Item identities match
/// case-insensitively (ASCII folding), exact, no wildcards.
#[async_trait]
pub trait LegacyItemStore: Send + Sync {
    /// All items of one kind, in store order.
    async fn items_of_kind(&self, kind: &str) -> Result<Vec<StoreItem>>;

    /// Updates the item matching `spec` in place, overwriting the given
    /// metadata elements and keeping the stored identity's casing, or
    /// creates the item when no match exists.
    async fn upsert_item(&self, kind: &str, spec: &str, metadata: MetadataMap) -> Result<()>;

    /// Removes the item matching `spec`. Returns `Ok(false)` when there
    /// was nothing to remove; a miss is not an error.
    async fn remove_item(&self, kind: &str, spec: &str) -> Result<bool>;
}
