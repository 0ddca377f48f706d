//! Adapter for SDK-style projects with first-class reference modeling.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use projkit_core::adapter::ProjectAdapter;
use projkit_core::error::{Error, Result};
use projkit_core::framework::{FrameworkResolver, TargetFramework};
use projkit_core::host::HostProject;
use projkit_core::metadata::MetadataMap;
use projkit_core::project::{Capabilities, ProjectIdentity, ProjectKind};
use projkit_core::reference::{
    DependencyProjectRef, LegacyPackageReference, LegacyProjectReference,
};

/// Adapter over a modern SDK-style project.
///
/// References are first-class in this project system, so the legacy
/// item-synthesis operations are invalid here and fail fast with
/// `Error::CapabilityNotSupported` instead of degrading silently.
pub struct SdkProjectAdapter {
    host: Arc<dyn HostProject>,
    resolver: Arc<dyn FrameworkResolver>,
    identity: ProjectIdentity,
}

impl SdkProjectAdapter {
    /// Attaches to a loaded SDK-style project, capturing its identity.
    ///
    /// # Errors
    ///
    /// Fails when the host cannot produce an identity.
    pub fn new(host: Arc<dyn HostProject>, resolver: Arc<dyn FrameworkResolver>) -> Result<Self> {
        let identity = host.identity()?;
        Ok(Self {
            host,
            resolver,
            identity,
        })
    }

    fn unsupported(&self, operation: &'static str) -> Error {
        Error::CapabilityNotSupported {
            project: self.identity.unique_name.clone(),
            operation,
            capability: "legacy package references",
        }
    }
}

#[async_trait]
impl ProjectAdapter for SdkProjectAdapter {
    fn host_project(&self) -> Arc<dyn HostProject> {
        Arc::clone(&self.host)
    }

    fn name(&self) -> &str {
        &self.identity.name
    }

    fn unique_name(&self) -> &str {
        &self.identity.unique_name
    }

    fn full_path(&self) -> &Path {
        &self.identity.full_path
    }

    fn base_intermediate_path(&self) -> &Path {
        &self.identity.base_intermediate_path
    }

    fn capabilities(&self) -> Capabilities {
        ProjectKind::Sdk.capabilities()
    }

    fn referenced_projects(&self) -> Result<Vec<DependencyProjectRef>> {
        self.host.referenced_projects()
    }

    async fn target_framework(&self) -> Result<TargetFramework> {
        crate::resolve_target_framework(
            self.host.as_ref(),
            self.resolver.as_ref(),
            &self.identity.unique_name,
        )
        .await
    }

    async fn legacy_project_references(
        &self,
        _desired_metadata: &[&str],
    ) -> Result<Vec<LegacyProjectReference>> {
        Err(self.unsupported("legacy_project_references"))
    }

    async fn legacy_package_references(
        &self,
        _desired_metadata: &[&str],
    ) -> Result<Vec<LegacyPackageReference>> {
        Err(self.unsupported("legacy_package_references"))
    }

    async fn add_or_update_legacy_package(
        &self,
        _package_name: &str,
        _package_version: &str,
        _metadata: MetadataMap,
    ) -> Result<()> {
        Err(self.unsupported("add_or_update_legacy_package"))
    }

    async fn remove_legacy_package(&self, _package_name: &str) -> Result<()> {
        Err(self.unsupported("remove_legacy_package"))
    }
}
