//! Package manager identity and detection

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable set by npm, yarn and pnpm when they launch a script
const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];

    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Prefix used to invoke a `package.json` script
    ///
    /// npm needs the `run` sub-command; yarn and pnpm resolve scripts directly.
    pub fn run_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Full command line for a script, e.g. `npm run dev` or `pnpm dev`
    pub fn run(&self, script: &str) -> String {
        format!("{} {}", self.run_prefix(), script)
    }

    pub fn install_command(&self) -> String {
        format!("{} install", self.name())
    }

    /// Whether this manager blocks dependency build scripts until approved
    pub fn requires_build_approval(&self) -> bool {
        matches!(self, PackageManager::Pnpm)
    }

    /// Detect the package manager that launched this process
    ///
    /// Falls back to npm when no launcher user agent is present.
    pub fn detect() -> Self {
        std::env::var(USER_AGENT_ENV)
            .ok()
            .and_then(|agent| Self::from_user_agent(&agent))
            .unwrap_or_default()
    }

    /// Parse a launcher user agent such as `pnpm/9.12.0 npm/? node/v22.9.0 linux x64`
    pub fn from_user_agent(agent: &str) -> Option<Self> {
        let first = agent.split_whitespace().next()?;
        let name = first.split('/').next()?;
        name.parse().ok()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PackageManager {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            _ => Err(ScaffoldError::UnknownPackageManager(s.to_string())),
        }
    }
}
