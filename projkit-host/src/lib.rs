//! Backing collaborators for project adapters.
//!
//! The contract in `projkit-core` exists so package-management logic can
//! run against substitutes instead of a live host process. This crate
//! provides those substitutes: an in-memory host project model and an
//! in-memory legacy item store, plus project-kind detection from
//! project-file sources.

pub mod kind;
pub mod project;
pub mod store;

pub use kind::{detect_kind, detect_kind_in_source};
pub use project::MemoryHost;
pub use store::MemoryItemStore;
