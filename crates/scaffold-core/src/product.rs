//! Product configuration trait for CLI binaries
//!
//! The core library knows how to create a project; the binary decides what
//! the product is called, where its templates live, and what to tell the
//! user once the project exists.

use crate::runtime::check::PackageManager;
use std::path::{Path, PathBuf};

/// Configuration trait for CLI products built on the scaffolder
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Line shown under the intro banner
    fn greeting(&self) -> &'static str;

    /// Environment variable name for overriding the template root
    fn template_dir_env(&self) -> &'static str;

    /// Template root bundled with the program when nothing else is configured
    fn bundled_template_dir(&self) -> PathBuf;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, package_manager: PackageManager) -> Vec<String>;
}
