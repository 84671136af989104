//! External tools used around project creation
//!
//! This module provides:
//! - Package manager detection for the "next steps" hint
//! - The `git init` post-step

pub mod check;
pub mod git;

pub use check::{detect_package_manager, PackageManager};
pub use git::{init_repository, GitInit};
