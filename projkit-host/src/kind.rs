//! Project-kind detection from project-file sources.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use projkit_core::error::Result;
use projkit_core::project::ProjectKind;

// SDK-style projects declare an Sdk attribute on the root element or an
// explicit Sdk import; legacy project files do neither.
static SDK_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<(?:Project|Import)\s[^>]*\bSdk\s*="#).expect("sdk marker pattern is valid")
});

/// Classifies project-file source text as SDK-style or legacy.
pub fn detect_kind_in_source(source: &str) -> ProjectKind {
    if SDK_MARKER.is_match(source) {
        ProjectKind::Sdk
    } else {
        ProjectKind::Legacy
    }
}

/// Reads a project file and classifies it.
///
/// # Errors
///
/// Returns `Error::Io` when the file cannot be read.
pub fn detect_kind(path: &Path) -> Result<ProjectKind> {
    let source = fs::read_to_string(path)?;
    Ok(detect_kind_in_source(&source))
}
