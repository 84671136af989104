//! Template set manifest (`template.yaml`) types and parsing

use anyhow::{Context, Result};
use semver::Version;
use serde::Deserialize;
use std::path::Path;

/// Project flavour an entry is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    TypeScript,
    JavaScript,
}

impl Variant {
    pub fn from_typescript_flag(use_typescript: bool) -> Self {
        if use_typescript {
            Variant::TypeScript
        } else {
            Variant::JavaScript
        }
    }
}

/// One file or directory copied from the template root into the project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateEntry {
    /// Path relative to the template root
    pub source: String,

    /// Path relative to the project directory (defaults to `source`)
    #[serde(default)]
    pub dest: Option<String>,

    /// Only copy for this variant; copied for both when absent
    #[serde(default)]
    pub only: Option<Variant>,
}

impl TemplateEntry {
    pub fn destination(&self) -> &str {
        self.dest.as_deref().unwrap_or(&self.source)
    }

    pub fn applies_to(&self, variant: Variant) -> bool {
        self.only.map_or(true, |only| only == variant)
    }
}

/// Root manifest of the template set (`<template root>/template.yaml`)
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSet {
    /// Semver version for CLI compatibility checking
    pub version: String,

    /// Files copied verbatim
    #[serde(default)]
    pub files: Vec<TemplateEntry>,

    /// Directory trees copied recursively, skipped when the destination exists
    #[serde(default)]
    pub directories: Vec<TemplateEntry>,
}

impl TemplateSet {
    pub const FILE_NAME: &'static str = "template.yaml";

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse template.yaml")
    }

    /// Read `template.yaml` from a template root
    pub async fn load(template_root: &Path) -> Result<Self> {
        let path = template_root.join(Self::FILE_NAME);
        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn files_for(&self, variant: Variant) -> impl Iterator<Item = &TemplateEntry> {
        self.files.iter().filter(move |e| e.applies_to(variant))
    }

    pub fn directories_for(&self, variant: Variant) -> impl Iterator<Item = &TemplateEntry> {
        self.directories.iter().filter(move |e| e.applies_to(variant))
    }

    /// Warning text if the templates expect a newer CLI than `cli_version`.
    /// Unparsable versions are never reported.
    pub fn compatibility_warning(&self, cli_version: &str, upgrade_command: &str) -> Option<String> {
        let cli = Version::parse(cli_version).ok()?;
        let wanted = Version::parse(self.version.trim_start_matches('v')).ok()?;

        (cli < wanted).then(|| {
            format!(
                "Templates were written for CLI version {} or newer (running {}). Consider updating: {}",
                wanted, cli, upgrade_command
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: &str = include_str!("../../../../template/template.yaml");

    fn destinations<'a>(entries: impl Iterator<Item = &'a TemplateEntry>) -> Vec<&'a str> {
        entries.map(TemplateEntry::destination).collect()
    }

    #[test]
    fn test_shipped_manifest_typescript_selection() {
        let set = TemplateSet::parse(SHIPPED).unwrap();

        assert_eq!(
            destinations(set.files_for(Variant::TypeScript)),
            vec!["tsconfig.json", "declaration.d.ts", ".babelrc", ".eslintrc", ".gitignore"]
        );
        let dirs: Vec<_> = set.directories_for(Variant::TypeScript).collect();
        assert_eq!(dirs.len(), 2);
        assert_eq!(dirs[0].source, "ts");
        assert_eq!(dirs[0].destination(), "src");
        assert_eq!(dirs[1].destination(), "public");
    }

    #[test]
    fn test_shipped_manifest_javascript_selection() {
        let set = TemplateSet::parse(SHIPPED).unwrap();

        assert_eq!(
            destinations(set.files_for(Variant::JavaScript)),
            vec![".babelrc", ".eslintrc", ".gitignore"]
        );
        let dirs: Vec<_> = set.directories_for(Variant::JavaScript).collect();
        assert_eq!(dirs[0].source, "js");
        assert_eq!(destinations(dirs.into_iter()), vec!["src", "public"]);
    }

    #[test]
    fn test_dest_defaults_to_source() {
        let set = TemplateSet::parse(
            "version: 0.1.0\nfiles:\n  - source: .babelrc\n  - source: gitignore\n    dest: .gitignore\n",
        )
        .unwrap();

        assert_eq!(set.files[0].destination(), ".babelrc");
        assert_eq!(set.files[1].destination(), ".gitignore");
        assert!(set.directories.is_empty());
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let result = TemplateSet::parse("version: 0.1.0\nfiles:\n  - source: a\n    only: python\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_compatibility_warning() {
        let set = TemplateSet::parse("version: 0.2.0\n").unwrap();

        let warning = set.compatibility_warning("0.1.0", "cargo install apusic-cli --force");
        assert!(warning.unwrap().contains("0.2.0"));
        assert!(set.compatibility_warning("0.2.0", "x").is_none());
        assert!(set.compatibility_warning("0.3.1", "x").is_none());
        assert!(set.compatibility_warning("invalid", "x").is_none());
    }
}
