//! Version control initialization for new projects

use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Outcome of the `git init` post-step. Never fails the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitInit {
    Initialized,
    Skipped,
    Failed(String),
}

impl fmt::Display for GitInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitInit::Initialized => write!(f, "Initialized a git repository"),
            GitInit::Skipped => write!(f, "Skipped git initialization"),
            GitInit::Failed(reason) => write!(f, "git init failed: {}", reason),
        }
    }
}

/// Run `git init` inside `dir` unless `skip` is set
pub async fn init_repository(dir: &Path, skip: bool) -> GitInit {
    if skip {
        return GitInit::Skipped;
    }

    let output = Command::new("git")
        .arg("init")
        .arg("--quiet")
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .await;

    match output {
        Ok(out) if out.status.success() => GitInit::Initialized,
        Ok(out) => {
            let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
            if stderr.is_empty() {
                GitInit::Failed(format!("exit code {}", out.status.code().unwrap_or(-1)))
            } else {
                GitInit::Failed(stderr)
            }
        }
        Err(e) => GitInit::Failed(e.to_string()),
    }
}
