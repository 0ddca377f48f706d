//! Ordered metadata mappings for reference items.

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Ordered mapping from metadata element name to value.
///
/// Element names compare case-sensitively; only item identities (package
/// names, project paths) are matched case-insensitively.
pub type MetadataMap = IndexMap<String, String>;

/// Builds a metadata map from parallel name/value slices.
///
/// # Errors
///
/// Returns `Error::MetadataArity` when the slices differ in length.
pub fn metadata_from_pairs(names: &[&str], values: &[&str]) -> Result<MetadataMap> {
    if names.len() != values.len() {
        return Err(Error::MetadataArity {
            names: names.len(),
            values: values.len(),
        });
    }

    Ok(names
        .iter()
        .zip(values)
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect())
}

/// Projects the requested element names out of an item's metadata.
///
/// Every requested name is present in the result; names absent on the
/// item map to the empty string, never to a missing entry.
pub fn select_metadata(item: &MetadataMap, desired: &[&str]) -> MetadataMap {
    desired
        .iter()
        .map(|name| {
            let value = item.get(*name).cloned().unwrap_or_default();
            ((*name).to_string(), value)
        })
        .collect()
}
