//! Project option resolution
//!
//! Everything the run needs is collected here into one [`ProjectOptions`]
//! value. Nothing downstream reads arguments, the environment, or stdin.

use crate::error::ConfigurationError;
use crate::product::ProductConfig;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported CSS preprocessors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssPreprocessor {
    Less,
    Sass,
}

impl CssPreprocessor {
    /// All accepted answers, in prompt order
    pub const ALL: [CssPreprocessor; 2] = [CssPreprocessor::Less, CssPreprocessor::Sass];

    pub fn as_str(&self) -> &'static str {
        match self {
            CssPreprocessor::Less => "less",
            CssPreprocessor::Sass => "sass",
        }
    }

    /// webpack loader that compiles this preprocessor
    pub fn loader(&self) -> &'static str {
        match self {
            CssPreprocessor::Less => "less-loader",
            CssPreprocessor::Sass => "sass-loader",
        }
    }

    /// Stylesheet extension matched by the loader rule
    pub fn extension(&self) -> &'static str {
        match self {
            CssPreprocessor::Less => "less",
            CssPreprocessor::Sass => "scss",
        }
    }

    /// Comma-separated list of accepted answers, e.g. for prompts
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(CssPreprocessor::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for CssPreprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CssPreprocessor {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "less" => Ok(CssPreprocessor::Less),
            "sass" => Ok(CssPreprocessor::Sass),
            other => Err(ConfigurationError::InvalidPreprocessor(other.to_string())),
        }
    }
}

/// Validated project name and the directory it will be created in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    name: String,
    target_dir: PathBuf,
}

impl ProjectTarget {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }
}

/// Validate the project name and make sure `cwd/name` does not exist yet.
///
/// Surrounding whitespace is stripped, so `" demo "` names the project `demo`.
/// A name that is empty after stripping is missing.
pub fn resolve_target(name: Option<&str>, cwd: &Path) -> Result<ProjectTarget, ConfigurationError> {
    let name = match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => return Err(ConfigurationError::MissingProjectName),
    };

    let target_dir = cwd.join(&name);
    if target_dir.exists() {
        return Err(ConfigurationError::TargetExists(target_dir));
    }

    Ok(ProjectTarget { name, target_dir })
}

/// Resolve the template root for a product.
///
/// Precedence: explicit flag, then the product's environment variable, then a
/// `template/` directory next to the running executable, then the bundled
/// source-tree templates.
pub fn resolve_template_root<C: ProductConfig>(config: &C, flag: Option<&Path>) -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    pick_template_root(
        flag,
        std::env::var_os(config.template_dir_env()),
        exe_dir,
        config.bundled_template_dir(),
    )
}

fn pick_template_root(
    flag: Option<&Path>,
    env: Option<OsString>,
    exe_dir: Option<PathBuf>,
    bundled: PathBuf,
) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = env.filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(candidate) = exe_dir.map(|d| d.join("template")) {
        if candidate.join("template.yaml").is_file() {
            return candidate;
        }
    }
    bundled
}

/// The resolved, immutable configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    name: String,
    install_root: PathBuf,
    target_dir: PathBuf,
    css_preprocessor: CssPreprocessor,
    use_typescript: bool,
}

impl ProjectOptions {
    pub fn new(
        target: ProjectTarget,
        install_root: PathBuf,
        css_preprocessor: CssPreprocessor,
        use_typescript: bool,
    ) -> Self {
        Self {
            name: target.name,
            install_root,
            target_dir: target.target_dir,
            css_preprocessor,
            use_typescript,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template root the project is generated from
    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn css_preprocessor(&self) -> CssPreprocessor {
        self.css_preprocessor
    }

    pub fn use_typescript(&self) -> bool {
        self.use_typescript
    }

    pub fn language_name(&self) -> &'static str {
        if self.use_typescript {
            "TypeScript"
        } else {
            "JavaScript"
        }
    }
}
