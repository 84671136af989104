//! Charm-style CLI prompts using cliclack

use crate::options::{self, CssPreprocessor, ProjectOptions};
use crate::product::ProductConfig;
use crate::runtime::{self, GitInit};
use crate::scaffold::{self, CreateReport};
use crate::templates::manifest::TemplateSet;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of the project directory to create in the current directory
    pub name: Option<String>,

    /// Generate a TypeScript project instead of JavaScript
    pub typescript: bool,

    /// CSS preprocessor; prompted for when absent
    pub css: Option<String>,

    /// Template root to use instead of the installed one
    pub template_dir: Option<PathBuf>,

    /// Don't run `git init` in the new project
    pub skip_git: bool,
}

/// Create a project, prompting for whatever the arguments leave open
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(config.display_name())?;
    cliclack::log::remark(config.greeting())?;

    // Step 1: Name and target directory
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let target = options::resolve_target(args.name.as_deref(), &cwd)?;

    // Step 2: Templates
    let template_root = options::resolve_template_root(config, args.template_dir.as_deref());
    let set = load_templates(config, &template_root, cli_version).await?;

    // Step 3: CSS preprocessor
    let css = select_css(args.css.as_deref()).await?;

    let options = ProjectOptions::new(target, template_root, css, args.typescript);
    cliclack::log::success(format!(
        "Project: {} ({}, {})",
        options.name(),
        options.language_name(),
        options.css_preprocessor()
    ))?;

    // Step 4: Create project
    create_project(&options, &set).await?;

    // Step 5: Version control
    match runtime::init_repository(options.target_dir(), args.skip_git).await {
        GitInit::Initialized => cliclack::log::success(GitInit::Initialized.to_string())?,
        GitInit::Skipped => cliclack::log::info(GitInit::Skipped.to_string())?,
        failed @ GitInit::Failed(_) => cliclack::log::warning(failed.to_string())?,
    }

    // Step 6: Show next steps
    print_next_steps(config, options.target_dir())?;

    Ok(())
}

async fn load_templates<C: ProductConfig>(
    config: &C,
    template_root: &Path,
    cli_version: &str,
) -> Result<TemplateSet> {
    cliclack::log::info(format!("Using templates from {}", template_root.display()))?;

    let set = TemplateSet::load(template_root).await?;

    if let Some(warning) = set.compatibility_warning(cli_version, config.upgrade_command()) {
        cliclack::log::warning(format!("Version warning: {}", warning))?;
    }

    Ok(set)
}

/// Single-shot preprocessor choice: an unknown or empty answer ends the run
async fn select_css(specified: Option<&str>) -> Result<CssPreprocessor> {
    if let Some(value) = specified {
        let css: CssPreprocessor = value.parse()?;
        cliclack::log::info(format!("Using css loader: {}", css))?;
        return Ok(css);
    }

    let question = format!("please input css loader: ({})", CssPreprocessor::choices());

    let answer = if std::io::stdin().is_terminal() {
        cliclack::input(question)
            .placeholder(CssPreprocessor::Sass.as_str())
            .required(false)
            .interact::<String>()?
    } else {
        // Piped input: the answer is the first line, nothing is re-asked
        cliclack::log::step(question)?;
        read_answer(BufReader::new(tokio::io::stdin())).await?
    };

    Ok(answer.parse::<CssPreprocessor>()?)
}

/// Read one answer line; end of input counts as an empty answer
async fn read_answer<R: AsyncBufRead + Unpin>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .await
        .context("Failed to read answer from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn create_project(options: &ProjectOptions, set: &TemplateSet) -> Result<CreateReport> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let report = match scaffold::create_project(options, set).await {
        Ok(report) => report,
        Err(e) => {
            spinner.stop("Failed to create project");
            return Err(e);
        }
    };

    spinner.stop(format!(
        "Created {} files in {}",
        report.files_written(),
        options.target_dir().display()
    ));

    for skipped in &report.materialized.skipped {
        cliclack::log::info(format!("Kept existing {}", skipped))?;
    }

    Ok(report)
}

fn print_next_steps<C: ProductConfig>(config: &C, project_dir: &Path) -> Result<()> {
    let steps = config.next_steps(project_dir, runtime::detect_package_manager());

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
