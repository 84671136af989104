//! Error taxonomy for project creation
//!
//! Functions return `anyhow::Result` and raise these typed errors so callers
//! (and tests) can tell configuration mistakes from template I/O failures
//! with `downcast_ref`.

use std::path::PathBuf;
use thiserror::Error;

/// Bad CLI input, bad prompt answer, or a target that already exists
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("missing project name")]
    MissingProjectName,

    #[error("target exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("invalid preprocessor '{0}' (expected one of: less, sass)")]
    InvalidPreprocessor(String),
}

/// Failures while reading templates or materializing them into the project
#[derive(Debug, Error)]
pub enum TemplateIoError {
    #[error("template source missing: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("failed to copy {} to {}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
