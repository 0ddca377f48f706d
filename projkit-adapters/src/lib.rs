//! Concrete project adapters over host project models.

pub mod legacy;
pub mod sdk;

pub use legacy::LegacyProjectAdapter;
pub use sdk::SdkProjectAdapter;

use std::sync::Arc;

use projkit_core::adapter::ProjectAdapter;
use projkit_core::error::{Error, Result};
use projkit_core::framework::{FrameworkResolver, TargetFramework};
use projkit_core::host::{
    HostProject, TARGET_FRAMEWORK_MONIKER_PROPERTY, TARGET_FRAMEWORK_PROPERTY,
};
use projkit_core::items::LegacyItemStore;
use projkit_core::project::ProjectKind;

/// Builds the adapter variant matching the host's project-system kind.
///
/// SDK-style projects get a [`SdkProjectAdapter`]; legacy projects get a
/// [`LegacyProjectAdapter`] wired to the item store. The store argument
/// is unused for SDK-style projects.
pub fn adapter_for(
    host: Arc<dyn HostProject>,
    store: Arc<dyn LegacyItemStore>,
    resolver: Arc<dyn FrameworkResolver>,
) -> Result<Box<dyn ProjectAdapter>> {
    match host.kind() {
        ProjectKind::Sdk => Ok(Box::new(SdkProjectAdapter::new(host, resolver)?)),
        ProjectKind::Legacy => Ok(Box::new(LegacyProjectAdapter::new(host, store, resolver)?)),
    }
}

/// Reads the framework moniker from build properties and resolves it.
///
/// Prefers the full moniker property and falls back to the short one;
/// a project declaring neither fails resolution.
pub(crate) async fn resolve_target_framework(
    host: &dyn HostProject,
    resolver: &dyn FrameworkResolver,
    project: &str,
) -> Result<TargetFramework> {
    let moniker = match host.build_property(TARGET_FRAMEWORK_MONIKER_PROPERTY).await? {
        Some(moniker) if !moniker.trim().is_empty() => moniker,
        _ => host
            .build_property(TARGET_FRAMEWORK_PROPERTY)
            .await?
            .filter(|moniker| !moniker.trim().is_empty())
            .ok_or_else(|| Error::MissingTargetFramework(project.to_string()))?,
    };

    tracing::debug!(project, moniker = moniker.as_str(), "resolving target framework");
    resolver.resolve(&moniker).await
}
