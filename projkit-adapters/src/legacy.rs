//! Adapter for legacy non-SDK projects with package-reference items.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use projkit_core::adapter::ProjectAdapter;
use projkit_core::error::Result;
use projkit_core::framework::{FrameworkResolver, TargetFramework};
use projkit_core::host::HostProject;
use projkit_core::items::{
    LegacyItemStore, PACKAGE_REFERENCE_ITEM, PROJECT_REFERENCE_ITEM, VERSION_METADATA,
};
use projkit_core::metadata::{select_metadata, MetadataMap};
use projkit_core::project::{Capabilities, ProjectIdentity, ProjectKind};
use projkit_core::reference::{
    DependencyProjectRef, LegacyPackageReference, LegacyProjectReference,
};

/// Adapter over a legacy non-SDK project.
///
/// References are not first-class in this project system; they are
/// synthesized on every call from the item store's metadata-bearing
/// items. The adapter holds no state beyond the identity snapshot taken
/// at attach time.
pub struct LegacyProjectAdapter {
    host: Arc<dyn HostProject>,
    store: Arc<dyn LegacyItemStore>,
    resolver: Arc<dyn FrameworkResolver>,
    identity: ProjectIdentity,
}

impl LegacyProjectAdapter {
    /// Attaches to a loaded legacy project, capturing its identity.
    ///
    /// # Errors
    ///
    /// Fails when the host cannot produce an identity (project already
    /// unloaded or host gone).
    pub fn new(
        host: Arc<dyn HostProject>,
        store: Arc<dyn LegacyItemStore>,
        resolver: Arc<dyn FrameworkResolver>,
    ) -> Result<Self> {
        let identity = host.identity()?;
        Ok(Self {
            host,
            store,
            resolver,
            identity,
        })
    }
}

#[async_trait]
impl ProjectAdapter for LegacyProjectAdapter {
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
        ProjectKind::Legacy.capabilities()
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
        desired_metadata: &[&str],
    ) -> Result<Vec<LegacyProjectReference>> {
        let items = self.store.items_of_kind(PROJECT_REFERENCE_ITEM).await?;
        Ok(items
            .into_iter()
            .map(|item| LegacyProjectReference {
                metadata: select_metadata(&item.metadata, desired_metadata),
                project_path: item.spec,
            })
            .collect())
    }

    async fn legacy_package_references(
        &self,
        desired_metadata: &[&str],
    ) -> Result<Vec<LegacyPackageReference>> {
        let items = self.store.items_of_kind(PACKAGE_REFERENCE_ITEM).await?;
        Ok(items
            .into_iter()
            .map(|item| LegacyPackageReference {
                version: item
                    .metadata
                    .get(VERSION_METADATA)
                    .cloned()
                    .unwrap_or_default(),
                metadata: select_metadata(&item.metadata, desired_metadata),
                name: item.spec,
            })
            .collect())
    }

    async fn add_or_update_legacy_package(
        &self,
        package_name: &str,
        package_version: &str,
        metadata: MetadataMap,
    ) -> Result<()> {
        let mut metadata = metadata;
        metadata.insert(VERSION_METADATA.to_string(), package_version.to_string());

        debug!(
            project = self.identity.unique_name.as_str(),
            package = package_name,
            version = package_version,
            "writing package reference"
        );
        self.store
            .upsert_item(PACKAGE_REFERENCE_ITEM, package_name, metadata)
            .await
    }

    async fn remove_legacy_package(&self, package_name: &str) -> Result<()> {
        let removed = self
            .store
            .remove_item(PACKAGE_REFERENCE_ITEM, package_name)
            .await?;
        if !removed {
            debug!(
                project = self.identity.unique_name.as_str(),
                package = package_name,
                "no package reference to remove"
            );
        }
        Ok(())
    }
}
