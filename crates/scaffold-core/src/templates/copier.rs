//! Template file copying with TypeScript/JavaScript filtering

use crate::error::TemplateIoError;
use crate::options::ProjectOptions;
use crate::templates::manifest::{TemplateSet, Variant};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// What a materialization pass did, by destination path relative to the project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Entries written into the project
    pub copied: Vec<String>,

    /// Directory entries left alone because the destination already existed
    pub skipped: Vec<String>,

    /// Number of individual files written
    pub files_written: usize,
}

/// Copy the template set's entries for this project's variant into its directory.
///
/// Stops at the first missing source or failed copy; anything copied before
/// that stays on disk.
pub async fn copy_template(options: &ProjectOptions, set: &TemplateSet) -> Result<MaterializeReport> {
    let variant = Variant::from_typescript_flag(options.use_typescript());
    let root = options.install_root();
    let target_dir = options.target_dir();

    let mut report = MaterializeReport::default();

    for entry in set.files_for(variant) {
        copy_file(&root.join(&entry.source), &target_dir.join(entry.destination())).await?;
        report.copied.push(entry.destination().to_string());
        report.files_written += 1;
    }

    for entry in set.directories_for(variant) {
        let dest = target_dir.join(entry.destination());
        if dest.exists() {
            report.skipped.push(entry.destination().to_string());
            continue;
        }

        report.files_written += copy_dir(&root.join(&entry.source), &dest).await?;
        report.copied.push(entry.destination().to_string());
    }

    Ok(report)
}

async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.is_file() {
        return Err(TemplateIoError::MissingSource(from.to_path_buf()).into());
    }

    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::copy(from, to)
        .await
        .map_err(|source| TemplateIoError::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })?;

    Ok(())
}

/// Recursively copy `from` into `to`, returning the number of files written
async fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    if !from.is_dir() {
        return Err(TemplateIoError::MissingSource(from.to_path_buf()).into());
    }

    let mut written = 0;
    for entry in WalkDir::new(from).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to read directory: {}", from.display()))?;
        let relative = entry.path().strip_prefix(from)?;
        let dest = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)
                .await
                .with_context(|| format!("Failed to create directory: {}", dest.display()))?;
        } else {
            copy_file(entry.path(), &dest).await?;
            written += 1;
        }
    }

    Ok(written)
}
