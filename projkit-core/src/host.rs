//! Host project model seam.

use async_trait::async_trait;

use crate::error::Result;
use crate::project::{ProjectIdentity, ProjectKind};
use crate::reference::DependencyProjectRef;

/// Build property holding the full target framework moniker
/// (e.g. ".NETFramework,Version=v4.8").
pub const TARGET_FRAMEWORK_MONIKER_PROPERTY: &str = "TargetFrameworkMoniker";

/// Build property holding the short target framework moniker
/// (e.g. "net6.0"). Consulted when the full moniker is absent.
pub const TARGET_FRAMEWORK_PROPERTY: &str = "TargetFramework";

/// The host's live, in-memory representation of a loaded project.
///
/// The host owns project loading and persistence; this trait only reads
/// identity, classification, references, and build properties. Failures
/// (project unloaded, host gone) surface as errors, never as defaults.
#[async_trait]
pub trait HostProject: Send + Sync {
    /// Identity snapshot of the project.
    ///
    /// # Errors
    ///
    /// Returns `Error::ProjectUnloaded` once the project has unloaded.
    fn identity(&self) -> Result<ProjectIdentity>;

    /// Project-system classification, fixed while the project is loaded.
    fn kind(&self) -> ProjectKind;

    /// Projects this one references for dependency-graph construction.
    /// Order is unspecified.
    fn referenced_projects(&self) -> Result<Vec<DependencyProjectRef>>;

    /// Evaluates a build property by name. `Ok(None)` when the property
    /// is not set; calls may suspend while the host evaluates.
    async fn build_property(&self, name: &str) -> Result<Option<String>>;
}
