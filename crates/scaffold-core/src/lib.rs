//! Scaffold Core - Shared library for React project scaffolding CLIs
//!
//! Creates a new project directory from a bundled template root: a generated
//! `package.json`, a generated `webpack.config.js`, and a fixed set of copied
//! template files chosen by the TypeScript/JavaScript variant.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - option resolution, `package.json` merging,
//!   config token substitution, template copying, `git init`
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and
//!   [`scaffold::create_project`] for custom UIs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::{options, scaffold, CssPreprocessor, ProjectOptions, TemplateSet};
//!
//! let target = options::resolve_target(Some("demo"), &std::env::current_dir()?)?;
//! let root = options::resolve_template_root(&MyConfig, None);
//! let set = TemplateSet::load(&root).await?;
//! let opts = ProjectOptions::new(target, root, CssPreprocessor::Less, true);
//! let report = scaffold::create_project(&opts, &set).await?;
//! ```

pub mod error;
pub mod options;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{ConfigurationError, TemplateIoError};
pub use options::{CssPreprocessor, ProjectOptions};
pub use product::ProductConfig;
pub use runtime::{GitInit, PackageManager};
pub use scaffold::{create_project, CreateReport};
pub use templates::manifest::TemplateSet;
pub use templates::verify_templates;

#[cfg(feature = "tui")]
pub use tui::run;
