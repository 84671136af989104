//! `package.json` generation
//!
//! The descriptor is the bundled base `package.json` with the project name,
//! the shared dependencies, and the dev dependencies for the chosen CSS
//! preprocessor merged in.

use super::{read_template_text, BASE_PACKAGE_PATH, DEPENDENCIES_PATH};
use crate::options::{CssPreprocessor, ProjectOptions};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name → version mapping, in document order
pub type VersionMap = Map<String, Value>;

/// Dependency document (`package/dependence.json`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyManifest {
    /// Runtime dependencies, copied verbatim
    #[serde(default)]
    pub dependencies: VersionMap,

    /// Dev dependencies shared by every project
    #[serde(default)]
    pub dev_dependencies: VersionMap,

    /// Dev dependencies added for less projects
    #[serde(default)]
    pub less: VersionMap,

    /// Dev dependencies added for sass projects
    #[serde(default)]
    pub sass: VersionMap,
}

impl DependencyManifest {
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse dependency manifest")
    }

    pub fn fragment(&self, css: CssPreprocessor) -> &VersionMap {
        match css {
            CssPreprocessor::Less => &self.less,
            CssPreprocessor::Sass => &self.sass,
        }
    }

    /// Shared dev dependencies plus the preprocessor fragment; the fragment wins on conflict
    pub fn dev_dependencies_for(&self, css: CssPreprocessor) -> VersionMap {
        let mut merged = self.dev_dependencies.clone();
        for (name, version) in self.fragment(css) {
            merged.insert(name.clone(), version.clone());
        }
        merged
    }
}

/// Merge the dependency manifest into the base descriptor
pub fn build_package_descriptor(
    base: Value,
    dependencies: &DependencyManifest,
    name: &str,
    css: CssPreprocessor,
) -> Result<Value> {
    let Value::Object(mut descriptor) = base else {
        anyhow::bail!("Base package.json must be a JSON object");
    };

    descriptor.insert("name".to_string(), Value::String(name.to_string()));
    descriptor.insert(
        "dependencies".to_string(),
        Value::Object(dependencies.dependencies.clone()),
    );
    descriptor.insert(
        "devDependencies".to_string(),
        Value::Object(dependencies.dev_dependencies_for(css)),
    );

    Ok(Value::Object(descriptor))
}

/// Create the project directory and write `package.json` into it
pub async fn write_package_descriptor(target_dir: &Path, descriptor: &Value) -> Result<PathBuf> {
    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    let mut content =
        serde_json::to_string_pretty(descriptor).context("Failed to serialize package.json")?;
    content.push('\n');

    let path = target_dir.join("package.json");
    fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(path)
}

/// Build and write `package.json` for the project described by `options`
pub async fn generate_package_json(options: &ProjectOptions) -> Result<PathBuf> {
    let dependencies =
        DependencyManifest::parse(&read_template_text(options.install_root(), DEPENDENCIES_PATH).await?)?;
    let base: Value =
        serde_json::from_str(&read_template_text(options.install_root(), BASE_PACKAGE_PATH).await?)
            .context("Failed to parse base package.json")?;

    let descriptor = build_package_descriptor(
        base,
        &dependencies,
        options.name(),
        options.css_preprocessor(),
    )?;

    write_package_descriptor(options.target_dir(), &descriptor).await
}
