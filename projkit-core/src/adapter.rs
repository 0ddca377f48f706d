//! The project adapter operation contract.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::framework::TargetFramework;
use crate::host::HostProject;
use crate::metadata::{metadata_from_pairs, MetadataMap};
use crate::project::Capabilities;
use crate::reference::{DependencyProjectRef, LegacyPackageReference, LegacyProjectReference};

/// Uniform surface over a project's identity, references, and legacy
/// package-reference manipulation.
///
/// Adapters are stateless pass-throughs: every query reads and every
/// mutation writes the live collaborators, with no caching, retries, or
/// sequencing across calls. Two racing mutations on the same package
/// name resolve to whatever write the item store observes last; callers
/// needing atomic multi-step edits serialize their own calls.
///
/// An adapter is only valid while its project stays loaded; callers must
/// not retain one past project lifetime.
#[async_trait]
pub trait ProjectAdapter: Send + Sync {
    /// The raw host project handle.
    ///
    /// Escape hatch for host behavior this adapter intentionally does
    /// not abstract. Going through it couples the caller to the host
    /// model and forfeits testability; minimize its use.
    fn host_project(&self) -> Arc<dyn HostProject>;

    /// Project display name.
    fn name(&self) -> &str;

    /// Name qualified to be unique across same-named projects.
    fn unique_name(&self) -> &str;

    /// Absolute path of the project file.
    fn full_path(&self) -> &Path;

    /// Absolute path of the intermediate output directory.
    fn base_intermediate_path(&self) -> &Path;

    /// Capability flags, fixed for the adapter's lifetime. Callers check
    /// these before invoking capability-gated operations.
    fn capabilities(&self) -> Capabilities;

    /// Projects referenced by this one for dependency-graph
    /// construction. Empty when there are none; order is unspecified.
    fn referenced_projects(&self) -> Result<Vec<DependencyProjectRef>>;

    /// Resolves the project's target framework.
    ///
    /// Not cached, potentially expensive, and single-shot: no
    /// cancellation is exposed, so a caller wanting a timeout races this
    /// call externally.
    ///
    /// # Errors
    ///
    /// Fails when the framework moniker is absent or unparseable; never
    /// falls back to a placeholder framework.
    async fn target_framework(&self) -> Result<TargetFramework>;

    /// Project references synthesized from the legacy item store, one
    /// descriptor per item, each carrying the requested metadata
    /// elements (absent elements default to "").
    ///
    /// Valid only when first-class reference enumeration is unsupported.
    ///
    /// # Errors
    ///
    /// Fails fast with `Error::CapabilityNotSupported` outside legacy
    /// mode rather than returning stale or wrong data.
    async fn legacy_project_references(
        &self,
        desired_metadata: &[&str],
    ) -> Result<Vec<LegacyProjectReference>>;

    /// Package references synthesized from the legacy item store,
    /// symmetric to [`legacy_project_references`].
    ///
    /// Valid only when the legacy package-reference capability is set.
    ///
    /// [`legacy_project_references`]: ProjectAdapter::legacy_project_references
    async fn legacy_package_references(
        &self,
        desired_metadata: &[&str],
    ) -> Result<Vec<LegacyPackageReference>>;

    /// Adds a package reference, or updates the existing one matching
    /// `package_name` (case-insensitive, exact) in place, overwriting
    /// its version and the given metadata elements.
    ///
    /// Valid only when the legacy package-reference capability is set.
    async fn add_or_update_legacy_package(
        &self,
        package_name: &str,
        package_version: &str,
        metadata: MetadataMap,
    ) -> Result<()>;

    /// Parallel-array form of [`add_or_update_legacy_package`]: metadata
    /// element names and values of equal length.
    ///
    /// # Errors
    ///
    /// Returns `Error::MetadataArity` when the slices differ in length,
    /// before anything is written.
    ///
    /// [`add_or_update_legacy_package`]: ProjectAdapter::add_or_update_legacy_package
    async fn add_or_update_legacy_package_pairs(
        &self,
        package_name: &str,
        package_version: &str,
        metadata_names: &[&str],
        metadata_values: &[&str],
    ) -> Result<()> {
        let metadata = metadata_from_pairs(metadata_names, metadata_values)?;
        self.add_or_update_legacy_package(package_name, package_version, metadata)
            .await
    }

    /// Removes the package reference matching `package_name`
    /// (case-insensitive, exact). Removing a reference that does not
    /// exist is a successful no-op, not an error.
    ///
    /// Valid only when the legacy package-reference capability is set.
    async fn remove_legacy_package(&self, package_name: &str) -> Result<()>;
}
