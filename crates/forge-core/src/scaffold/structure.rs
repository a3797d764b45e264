//! Directory structure planning

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::Path;

/// Directories every generated project has, relative to the project root
///
/// Independent of configuration: `src/types` is created in JavaScript mode
/// too and simply stays empty.
pub const DIRECTORY_PLAN: &[&str] = &[
    "src",
    "src/controllers",
    "src/models",
    "src/routes",
    "src/middlewares",
    "src/config",
    "src/utils",
    "src/lib",
    "src/types",
    "public",
    "prisma",
    "requests",
];

/// Create the project root and every planned directory beneath it
///
/// Idempotent: existing directories are left untouched.
pub fn plan_structure(root: &Path) -> Result<()> {
    create_dir(root)?;
    for dir in DIRECTORY_PLAN {
        create_dir(&root.join(dir))?;
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "created directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_plan_structure_creates_every_directory() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("demo-api");

        plan_structure(&root).unwrap();

        for dir in DIRECTORY_PLAN {
            assert!(root.join(dir).is_dir(), "missing {}", dir);
        }
    }

    #[test]
    fn test_plan_structure_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("demo-api");

        plan_structure(&root).unwrap();
        std::fs::write(root.join("src/keep.txt"), "keep").unwrap();
        plan_structure(&root).unwrap();

        assert_eq!(
            std::fs::read_to_string(root.join("src/keep.txt")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn test_plan_structure_reports_blocking_file() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("demo-api");
        std::fs::create_dir_all(&root).unwrap();
        // a regular file where a planned directory should go
        std::fs::write(root.join("prisma"), "").unwrap();

        let err = plan_structure(&root).unwrap_err();
        match err {
            ScaffoldError::CreateDir { path, .. } => assert_eq!(path, root.join("prisma")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
