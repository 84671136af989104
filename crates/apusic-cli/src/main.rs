//! apusic CLI - Project scaffolding for apusic React applications

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use scaffold_core::options::resolve_template_root;
use scaffold_core::tui::CreateArgs;
use scaffold_core::{PackageManager, ProductConfig};
use std::path::{Path, PathBuf};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// apusic product configuration
#[derive(Clone)]
pub struct ApusicConfig;

impl ProductConfig for ApusicConfig {
    fn name(&self) -> &'static str {
        "apusic"
    }

    fn display_name(&self) -> &'static str {
        "apusic app create"
    }

    fn greeting(&self) -> &'static str {
        "Welcome to apusic app create application! (we only support react temporarily.)"
    }

    fn template_dir_env(&self) -> &'static str {
        "APUSIC_TEMPLATE_DIR"
    }

    fn bundled_template_dir(&self) -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../template"))
    }

    fn docs_url(&self) -> &'static str {
        "https://www.apusic.com"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install apusic-cli --force"
    }

    fn next_steps(&self, dir: &Path, package_manager: PackageManager) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        steps.push(package_manager.install_command().to_string());
        steps.push(package_manager.start_command().to_string());
        steps.push(format!("Read the docs at {}", self.docs_url()));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "apusic")]
#[command(about = "CLI for scaffolding apusic React applications")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project in ./<name>
    Create(CliCreateArgs),
    /// Check that a template directory is complete (for development use)
    VerifyTemplates(VerifyTemplatesArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project name; also the directory created in the current directory
    pub name: Option<String>,

    /// Generate a TypeScript project instead of JavaScript
    #[arg(short, long)]
    pub typescript: bool,

    /// CSS preprocessor (less or sass); prompted for when omitted
    #[arg(long, value_name = "LOADER")]
    pub css: Option<String>,

    /// Local directory to use for templates instead of the installed ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Don't initialize a git repository in the new project
    #[arg(long = "skip-git")]
    pub skip_git: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            typescript: args.typescript,
            css: args.css,
            template_dir: args.template_dir,
            skip_git: args.skip_git,
        }
    }
}

#[derive(Parser, Debug)]
pub struct VerifyTemplatesArgs {
    /// Template directory to check instead of the installed one
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

async fn verify(config: &ApusicConfig, args: VerifyTemplatesArgs) -> Result<()> {
    let root = resolve_template_root(config, args.template_dir.as_deref());
    let problems = scaffold_core::verify_templates(config, &root).await?;
    if problems > 0 {
        anyhow::bail!("{} template problem(s) in {}", problems, root.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = ApusicConfig;

    let result = match args.command {
        Some(Command::Create(create_args)) => {
            scaffold_core::run(&config, create_args.into(), CLI_VERSION).await
        }
        Some(Command::VerifyTemplates(verify_args)) => verify(&config, verify_args).await,
        // No subcommand behaves like `create` without a name
        None => scaffold_core::run(&config, CreateArgs::default(), CLI_VERSION).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
