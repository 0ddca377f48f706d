//! Error types and result aliases.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "operation {operation} requires the {capability} capability; project {project} does not provide it"
    )]
    CapabilityNotSupported {
        project: String,
        operation: &'static str,
        capability: &'static str,
    },

    #[error("metadata name/value arity mismatch: {names} names, {values} values")]
    MetadataArity { names: usize, values: usize },

    #[error("project {0} does not declare a target framework")]
    MissingTargetFramework(String),

    #[error("unresolvable target framework moniker '{moniker}': {message}")]
    FrameworkResolution { moniker: String, message: String },

    #[error("project {0} is not loaded in the host")]
    ProjectUnloaded(String),

    #[error("host error for {project}: {message}")]
    Host { project: String, message: String },

    #[error("item store error: {0}")]
    ItemStore(String),
}

pub type Result<T> = std::result::Result<T, Error>;
