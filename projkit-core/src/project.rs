//! Project identity and project-system classification.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Project-system kinds an adapter can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Modern SDK-style project with first-class reference modeling.
    Sdk,
    /// Non-SDK project whose references live as metadata-bearing items.
    Legacy,
}

impl ProjectKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Sdk => "sdk",
            ProjectKind::Legacy => "legacy",
        }
    }

    /// Parses a kind string into a `ProjectKind` variant.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sdk" => Some(ProjectKind::Sdk),
            "legacy" => Some(ProjectKind::Legacy),
            _ => None,
        }
    }

    /// The fixed capability set for this project-system kind.
    pub fn capabilities(&self) -> Capabilities {
        match self {
            ProjectKind::Sdk => Capabilities {
                supports_reference_enumeration: true,
                legacy_package_references: false,
            },
            ProjectKind::Legacy => Capabilities {
                supports_reference_enumeration: false,
                legacy_package_references: true,
            },
        }
    }
}

/// Independent capability flags gating the reference APIs.
///
/// Flags are fixed for an adapter's lifetime; callers check them before
/// invoking capability-specific operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    /// Project supports extracting reference collections first-class.
    pub supports_reference_enumeration: bool,
    /// Project is a legacy non-SDK project using package-reference items.
    pub legacy_package_references: bool,
}

/// Identity snapshot of a loaded project.
///
/// Captured once from the host project model when an adapter attaches;
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIdentity {
    /// Display name.
    pub name: String,
    /// Name qualified to be unique across same-named projects in a solution.
    pub unique_name: String,
    /// Absolute path of the project file.
    pub full_path: PathBuf,
    /// Absolute path of the intermediate output directory.
    pub base_intermediate_path: PathBuf,
}

impl ProjectIdentity {
    pub fn new(
        name: String,
        unique_name: String,
        full_path: PathBuf,
        base_intermediate_path: PathBuf,
    ) -> Self {
        Self {
            name,
            unique_name,
            full_path,
            base_intermediate_path,
        }
    }
}
