//! Error types for the scaffolding engine

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving configuration or materializing a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Configuration failed a precondition (empty name, empty path)
    #[error("Invalid project configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown package manager '{0}' (expected one of: npm, yarn, pnpm)")]
    UnknownPackageManager(String),

    #[error("Failed to create directory: {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file: {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}", path.display())]
    LoadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
