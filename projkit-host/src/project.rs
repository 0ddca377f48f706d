//! In-memory host project model.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use dashmap::DashMap;
use smallvec::SmallVec;

use projkit_core::error::{Error, Result};
use projkit_core::host::HostProject;
use projkit_core::project::{ProjectIdentity, ProjectKind};
use projkit_core::reference::DependencyProjectRef;

/// Host project model backed by plain in-process state.
///
/// Stands in for a live host when exercising adapters in tests or when
/// embedding the contract outside an IDE process. `unload` flips the
/// project into the state a real host reaches when a project closes:
/// every subsequent read fails with `Error::ProjectUnloaded`.
pub struct MemoryHost {
    identity: ProjectIdentity,
    kind: ProjectKind,
    properties: DashMap<String, String>,
    references: RwLock<SmallVec<[DependencyProjectRef; 4]>>,
    loaded: AtomicBool,
}

impl MemoryHost {
    pub fn new(identity: ProjectIdentity, kind: ProjectKind) -> Self {
        Self {
            identity,
            kind,
            properties: DashMap::new(),
            references: RwLock::new(SmallVec::new()),
            loaded: AtomicBool::new(true),
        }
    }

    /// Sets a build property, replacing any previous value.
    pub fn set_property(&self, name: &str, value: &str) {
        self.properties
            .insert(name.to_string(), value.to_string());
    }

    /// Clears a build property.
    pub fn clear_property(&self, name: &str) {
        self.properties.remove(name);
    }

    /// Records a reference to another dependency-graph project.
    pub fn add_reference(&self, reference: DependencyProjectRef) {
        if let Ok(mut references) = self.references.write() {
            references.push(reference);
        }
    }

    /// Marks the project as unloaded; subsequent reads fail.
    pub fn unload(&self) {
        self.loaded.store(false, Ordering::Release);
    }

    fn ensure_loaded(&self) -> Result<()> {
        if self.loaded.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(Error::ProjectUnloaded(self.identity.unique_name.clone()))
        }
    }
}

#[async_trait]
impl HostProject for MemoryHost {
    fn identity(&self) -> Result<ProjectIdentity> {
        self.ensure_loaded()?;
        Ok(self.identity.clone())
    }

    fn kind(&self) -> ProjectKind {
        self.kind
    }

    fn referenced_projects(&self) -> Result<Vec<DependencyProjectRef>> {
        self.ensure_loaded()?;
        let references = self.references.read().map_err(|_| Error::Host {
            project: self.identity.unique_name.clone(),
            message: "reference list lock poisoned".to_string(),
        })?;
        Ok(references.iter().cloned().collect())
    }

    async fn build_property(&self, name: &str) -> Result<Option<String>> {
        self.ensure_loaded()?;
        Ok(self.properties.get(name).map(|value| value.value().clone()))
    }
}
