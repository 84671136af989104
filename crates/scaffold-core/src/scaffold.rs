//! Project creation pipeline
//!
//! `package.json` → `webpack.config.js` → template files. Each step is
//! awaited before the next; the first error aborts the run and nothing
//! already written is removed.

use crate::options::ProjectOptions;
use crate::templates::manifest::TemplateSet;
use crate::templates::{copy_template, generate_package_json, generate_webpack_config, MaterializeReport};
use anyhow::Result;
use std::path::PathBuf;

/// Files produced by [`create_project`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReport {
    pub package_json: PathBuf,
    pub webpack_config: PathBuf,
    pub materialized: MaterializeReport,
}

impl CreateReport {
    /// Total number of files written into the project
    pub fn files_written(&self) -> usize {
        self.materialized.files_written + 2
    }
}

pub async fn create_project(options: &ProjectOptions, set: &TemplateSet) -> Result<CreateReport> {
    let package_json = generate_package_json(options).await?;
    let webpack_config = generate_webpack_config(options).await?;
    let materialized = copy_template(options, set).await?;

    Ok(CreateReport {
        package_json,
        webpack_config,
        materialized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateIoError;
    use crate::options::{resolve_target, CssPreprocessor};
    use serde_json::Value;
    use std::collections::BTreeSet;
    use std::path::Path;
    use tempfile::TempDir;
    use walkdir::WalkDir;

    fn bundled_root() -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../template"))
    }

    fn options(work: &Path, css: CssPreprocessor, typescript: bool) -> ProjectOptions {
        let target = resolve_target(Some("demo"), work).unwrap();
        ProjectOptions::new(target, bundled_root(), css, typescript)
    }

    fn top_level(dir: &Path) -> BTreeSet<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_javascript_sass_project() {
        let work = TempDir::new().unwrap();
        let opts = options(work.path(), CssPreprocessor::Sass, false);
        let set = TemplateSet::load(opts.install_root()).await.unwrap();

        let report = create_project(&opts, &set).await.unwrap();
        let dir = opts.target_dir();

        let expected: BTreeSet<String> = [
            "package.json",
            "webpack.config.js",
            ".babelrc",
            ".eslintrc",
            ".gitignore",
            "src",
            "public",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(top_level(dir), expected);
        assert!(dir.join("src/index.jsx").is_file());

        let package = read_json(&report.package_json);
        assert_eq!(package["name"], "demo");
        assert!(package["devDependencies"].get("sass-loader").is_some());
        assert!(package["devDependencies"].get("less-loader").is_none());

        let config = std::fs::read_to_string(&report.webpack_config).unwrap();
        assert!(config.contains("'sass-loader'"));
        assert!(config.contains("./src/index.jsx"));
    }

    #[tokio::test]
    async fn test_typescript_less_project() {
        let work = TempDir::new().unwrap();
        let opts = options(work.path(), CssPreprocessor::Less, true);
        let set = TemplateSet::load(opts.install_root()).await.unwrap();

        let report = create_project(&opts, &set).await.unwrap();
        let dir = opts.target_dir();

        let top = top_level(dir);
        assert!(top.contains("tsconfig.json"));
        assert!(top.contains("declaration.d.ts"));
        assert_eq!(top.len(), 9);
        assert!(dir.join("src/index.tsx").is_file());
        assert!(!dir.join("src/index.jsx").exists());

        let package = read_json(&report.package_json);
        assert!(package["devDependencies"].get("less-loader").is_some());
        assert!(package["devDependencies"].get("sass-loader").is_none());

        let config = std::fs::read_to_string(&report.webpack_config).unwrap();
        assert!(config.contains("'less-loader'"));
        assert!(config.contains("./src/index.tsx"));
        assert!(!config.contains("scss"));

        let files = WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .count();
        assert_eq!(report.files_written(), files);
    }

    #[tokio::test]
    async fn test_missing_template_leaves_partial_output() {
        let templates = TempDir::new().unwrap();
        for (rel, content) in [
            ("package/dependence.json", "{}"),
            ("package/package.json", "{\"name\": \"app\"}"),
            ("webpack/webpack.config.js", "module.exports = {};"),
        ] {
            let path = templates.path().join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
        let set = TemplateSet::parse("version: 0.1.0\nfiles:\n  - source: .babelrc\n").unwrap();

        let work = TempDir::new().unwrap();
        let target = resolve_target(Some("demo"), work.path()).unwrap();
        let opts = ProjectOptions::new(
            target,
            templates.path().to_path_buf(),
            CssPreprocessor::Sass,
            false,
        );

        let err = create_project(&opts, &set).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TemplateIoError>(),
            Some(TemplateIoError::MissingSource(_))
        ));
        assert!(opts.target_dir().join("package.json").is_file());
        assert!(opts.target_dir().join("webpack.config.js").is_file());
    }
}
