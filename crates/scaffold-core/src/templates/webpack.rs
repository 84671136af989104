//! `webpack.config.js` generation by literal token substitution
//!
//! The bundled config is written for sass and a `.jsx` entry. Other variants
//! are produced by global find/replace of the marker tokens below, so each
//! token must appear in the template only where it is meant to change.

use super::{read_template_text, WEBPACK_CONFIG_PATH};
use crate::options::{CssPreprocessor, ProjectOptions};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

const SASS_LOADER_TOKEN: &str = "sass-loader";
const SCSS_EXTENSION_TOKEN: &str = "scss";
const JSX_ENTRY_TOKEN: &str = "index.jsx";
const TSX_ENTRY_TOKEN: &str = "index.tsx";

/// Flags that select a config variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigVariant {
    pub css: CssPreprocessor,
    pub typescript: bool,
}

impl From<&ProjectOptions> for ConfigVariant {
    fn from(options: &ProjectOptions) -> Self {
        Self {
            css: options.css_preprocessor(),
            typescript: options.use_typescript(),
        }
    }
}

/// Apply the variant's substitutions to the base template text.
///
/// Stylesheet tokens are rewritten before the entry token. Missing tokens
/// leave the text unchanged.
pub fn render(base: &str, variant: ConfigVariant) -> String {
    let mut text = base.to_string();

    if variant.css != CssPreprocessor::Sass {
        text = text
            .replace(SASS_LOADER_TOKEN, variant.css.loader())
            .replace(SCSS_EXTENSION_TOKEN, variant.css.extension());
    }

    if variant.typescript {
        text = text.replace(JSX_ENTRY_TOKEN, TSX_ENTRY_TOKEN);
    }

    text
}

/// Render the bundled config for `options` and write `webpack.config.js`
pub async fn generate_webpack_config(options: &ProjectOptions) -> Result<PathBuf> {
    let base = read_template_text(options.install_root(), WEBPACK_CONFIG_PATH).await?;
    let rendered = render(&base, ConfigVariant::from(options));

    let path = options.target_dir().join("webpack.config.js");
    fs::write(&path, rendered)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(path)
}
