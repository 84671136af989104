//! Template reading, rendering, and copying
//!
//! This module provides:
//! - The template set manifest (`template.yaml`)
//! - `package.json` generation from the dependency documents
//! - `webpack.config.js` generation by token substitution
//! - Copying of the remaining template files and directories

pub mod copier;
pub mod manifest;
pub mod package;
pub mod webpack;

use crate::error::TemplateIoError;
use crate::product::ProductConfig;
use crate::templates::manifest::{TemplateSet, Variant};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub use copier::{copy_template, MaterializeReport};
pub use manifest::TemplateEntry;
pub use package::{generate_package_json, DependencyManifest};
pub use webpack::{generate_webpack_config, render, ConfigVariant};

/// Dependency document, relative to the template root
pub const DEPENDENCIES_PATH: &str = "package/dependence.json";

/// Base `package.json`, relative to the template root
pub const BASE_PACKAGE_PATH: &str = "package/package.json";

/// Bundler config template, relative to the template root
pub const WEBPACK_CONFIG_PATH: &str = "webpack/webpack.config.js";

/// Read a text document from the template root
pub(crate) async fn read_template_text(template_root: &Path, relative: &str) -> Result<String> {
    let path = template_root.join(relative);
    if !path.is_file() {
        return Err(TemplateIoError::MissingSource(path).into());
    }
    tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Check that a template root is complete: every document parses and every
/// entry source in `template.yaml` exists. Returns the number of problems found.
pub async fn verify_templates<C: ProductConfig>(config: &C, template_root: &Path) -> Result<usize> {
    if !template_root.is_dir() {
        anyhow::bail!("Template directory not found: {}", template_root.display());
    }

    println!(
        "{}",
        format!("Verifying {} templates in {}...", config.name(), template_root.display())
            .cyan()
            .bold()
    );
    println!();

    let set = TemplateSet::load(template_root).await?;
    let mut problems = 0;

    let dependencies = read_template_text(template_root, DEPENDENCIES_PATH)
        .await
        .and_then(|text| DependencyManifest::parse(&text));
    problems += report_check(DEPENDENCIES_PATH, dependencies.map(|_| ()));

    let base = read_template_text(template_root, BASE_PACKAGE_PATH)
        .await
        .and_then(|text| {
            let value: serde_json::Value =
                serde_json::from_str(&text).context("Failed to parse base package.json")?;
            if !value.is_object() {
                anyhow::bail!("Base package.json must be a JSON object");
            }
            Ok(())
        });
    problems += report_check(BASE_PACKAGE_PATH, base);

    let webpack = read_template_text(template_root, WEBPACK_CONFIG_PATH).await;
    problems += report_check(WEBPACK_CONFIG_PATH, webpack.map(|_| ()));

    for entry in &set.files {
        let source = template_root.join(&entry.source);
        let found = if source.is_file() {
            Ok(())
        } else {
            Err(TemplateIoError::MissingSource(source).into())
        };
        problems += report_check(&entry.source, found);
    }

    for entry in &set.directories {
        let source = template_root.join(&entry.source);
        let found = if source.is_dir() {
            Ok(())
        } else {
            Err(TemplateIoError::MissingSource(source).into())
        };
        problems += report_check(&format!("{}/", entry.source), found);
    }

    for variant in [Variant::JavaScript, Variant::TypeScript] {
        if set.directories_for(variant).all(|e| e.destination() != "src") {
            eprintln!(
                "  {} no source skeleton for {:?} projects",
                "Warning:".yellow(),
                variant
            );
        }
    }

    println!();
    if problems == 0 {
        println!("{} template set version {}", "Verified".green().bold(), set.version);
    } else {
        println!("{} {} problem(s)", "Found".red().bold(), problems);
        println!("See {} for the expected template layout", config.docs_url());
    }

    Ok(problems)
}

fn report_check(label: &str, result: Result<()>) -> usize {
    match result {
        Ok(()) => {
            println!("  {} {}", "ok".green(), label);
            0
        }
        Err(e) => {
            println!("  {} {}", "failed".red(), label);
            eprintln!("    Error: {:#}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::check::PackageManager;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Clone)]
    struct TestConfig;

    impl ProductConfig for TestConfig {
        fn name(&self) -> &'static str {
            "test"
        }
        fn display_name(&self) -> &'static str {
            "Test"
        }
        fn greeting(&self) -> &'static str {
            ""
        }
        fn template_dir_env(&self) -> &'static str {
            "TEST_TEMPLATE_DIR"
        }
        fn bundled_template_dir(&self) -> PathBuf {
            PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../template"))
        }
        fn docs_url(&self) -> &'static str {
            ""
        }
        fn upgrade_command(&self) -> &'static str {
            ""
        }
        fn next_steps(&self, _dir: &Path, _pm: PackageManager) -> Vec<String> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn test_shipped_templates_verify_cleanly() {
        let config = TestConfig;
        let problems = verify_templates(&config, &config.bundled_template_dir())
            .await
            .unwrap();
        assert_eq!(problems, 0);
    }

    #[tokio::test]
    async fn test_verify_counts_missing_sources() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("template.yaml"),
            "version: 0.1.0\nfiles:\n  - source: .babelrc\ndirectories:\n  - source: public\n",
        )
        .unwrap();

        // three documents plus two entries, all missing
        let problems = verify_templates(&TestConfig, tmp.path()).await.unwrap();
        assert_eq!(problems, 5);
    }

    #[tokio::test]
    async fn test_missing_template_document_is_typed() {
        let tmp = TempDir::new().unwrap();
        let err = read_template_text(tmp.path(), WEBPACK_CONFIG_PATH)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TemplateIoError>(),
            Some(TemplateIoError::MissingSource(_))
        ));
    }
}
