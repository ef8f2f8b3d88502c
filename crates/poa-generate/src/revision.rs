//! Source-control revision lookup for the generation comment.
//!
//! The comment records which revision of the generation code produced a
//! file, mostly to help trace production issues. It is non-semantic, so a
//! failed lookup degrades to a placeholder instead of aborting assembly.

use std::process::Command;

/// Placeholder embedded when no revision can be resolved.
pub const UNKNOWN_REVISION: &str = "unknown";

/// Provides the revision identifier embedded in the generation comment.
pub trait RevisionSource {
    /// Resolve the revision string, if one is available.
    fn revision(&self) -> Option<String>;
}

/// Reads the current commit hash from the local git checkout.
///
/// A single blocking call, never retried.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRevisionSource;

impl RevisionSource for GitRevisionSource {
    fn revision(&self) -> Option<String> {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let hash = String::from_utf8(output.stdout).ok()?;
        let hash = hash.trim();
        if hash.is_empty() {
            None
        } else {
            Some(hash.to_string())
        }
    }
}

/// Resolve a revision string, degrading to [`UNKNOWN_REVISION`] when the
/// source has nothing.
pub fn resolve_revision(source: &dyn RevisionSource) -> String {
    match source.revision() {
        Some(revision) => revision,
        None => {
            tracing::warn!("revision lookup failed, embedding placeholder");
            UNKNOWN_REVISION.to_string()
        }
    }
}
