//! Reference descriptors exposed by project adapters.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::metadata::MetadataMap;

/// Relation-only reference to another project participating in
/// dependency-graph construction.
///
/// Carries the referenced project's identity, never its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyProjectRef {
    pub unique_name: String,
    pub full_path: PathBuf,
}

impl DependencyProjectRef {
    pub fn new(unique_name: String, full_path: PathBuf) -> Self {
        Self {
            unique_name,
            full_path,
        }
    }
}

/// A referenced project as seen through the legacy item store.
///
/// `metadata` holds exactly the element names the caller requested,
/// absent elements defaulting to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyProjectReference {
    /// Item identity: the referenced project's path as written in the item.
    pub project_path: String,
    pub metadata: MetadataMap,
}

/// A referenced package as seen through the legacy item store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPackageReference {
    pub name: String,
    /// Version as recorded on the item; empty when the item carries none.
    pub version: String,
    pub metadata: MetadataMap,
}
