//! Content-variant selection, resolved once per run

use crate::config::{PackageManager, ProjectConfig};
use std::fmt;

/// Language mode of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageMode {
    TypeScript,
    JavaScript,
}

impl LanguageMode {
    pub const ALL: [LanguageMode; 2] = [LanguageMode::TypeScript, LanguageMode::JavaScript];

    pub fn from_flag(typescript: bool) -> Self {
        if typescript {
            LanguageMode::TypeScript
        } else {
            LanguageMode::JavaScript
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageMode::TypeScript => "TypeScript",
            LanguageMode::JavaScript => "JavaScript",
        }
    }

    /// Extension (without dot) of every generated source file
    pub fn source_ext(&self) -> &'static str {
        match self {
            LanguageMode::TypeScript => "ts",
            LanguageMode::JavaScript => "js",
        }
    }

    /// Path of the entry file relative to the project root
    pub fn entry_path(&self) -> String {
        format!("src/index.{}", self.source_ext())
    }

    /// Value of the `main` field in `package.json`
    pub fn main_path(&self) -> &'static str {
        match self {
            LanguageMode::TypeScript => "dist/index.js",
            LanguageMode::JavaScript => "src/index.js",
        }
    }

    pub fn is_typescript(&self) -> bool {
        matches!(self, LanguageMode::TypeScript)
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Everything a renderer may read, resolved from the run's inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub project_name: String,
    pub language: LanguageMode,
    pub package_manager: PackageManager,
    pub database: String,
}

impl RenderContext {
    pub fn resolve(config: &ProjectConfig, package_manager: PackageManager) -> Self {
        Self {
            project_name: config.project_name.clone(),
            language: LanguageMode::from_flag(config.typescript),
            package_manager,
            database: config.database.clone(),
        }
    }
}
