//! Project configuration consumed by the engine

use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for one generation run
///
/// Built once by the CLI layer (or loaded from a YAML preset) and consumed by
/// [`crate::scaffold::materialize`]. Nothing here is sanitized for the
/// filesystem; `project_name` is written verbatim into generated files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Package name, used in `package.json` and the README title
    pub project_name: String,

    /// Destination directory for the generated project
    pub project_path: PathBuf,

    /// Language mode selector: TypeScript when true, JavaScript otherwise
    #[serde(default = "default_typescript")]
    pub typescript: bool,

    /// Database name; names the SQLite file in the `.env` connection string
    #[serde(default = "default_database")]
    pub database: String,

    /// Reserved template selector; accepted but not consumed by any renderer
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_typescript() -> bool {
    true
}

fn default_database() -> String {
    "sqlite".to_string()
}

fn default_template() -> String {
    "default".to_string()
}

impl ProjectConfig {
    /// Create a config with default language mode, database and template
    pub fn new(project_name: impl Into<String>, project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_name: project_name.into(),
            project_path: project_path.into(),
            typescript: default_typescript(),
            database: default_database(),
            template: default_template(),
        }
    }

    pub fn with_typescript(mut self, typescript: bool) -> Self {
        self.typescript = typescript;
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Load a preset from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ScaffoldError::LoadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|source| ScaffoldError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Reject configurations that would produce meaningless output
    pub fn validate(&self) -> Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(ScaffoldError::InvalidConfig(
                "project name must not be empty".to_string(),
            ));
        }
        if self.project_path.as_os_str().is_empty() {
            return Err(ScaffoldError::InvalidConfig(
                "project path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
