//! Package manager detection

use std::fmt;
use std::process::Command;

/// Package managers the generated project can be installed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn install",
            PackageManager::Npm => "npm install",
        }
    }

    pub fn start_command(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn start",
            PackageManager::Npm => "npm start",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

/// Package managers in order of preference
const PREFERENCE: &[PackageManager] = &[PackageManager::Yarn, PackageManager::Npm];

fn is_available(pm: PackageManager) -> bool {
    Command::new(pm.binary())
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

/// Detect the preferred available package manager
pub fn detect_package_manager() -> PackageManager {
    PREFERENCE
        .iter()
        .copied()
        .find(|pm| is_available(*pm))
        // npm ships with Node.js, so it is the safest suggestion
        .unwrap_or(PackageManager::Npm)
}
