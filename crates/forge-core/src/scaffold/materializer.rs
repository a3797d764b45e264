//! Writing a rendered project to disk

use super::structure::plan_structure;
use crate::config::{PackageManager, ProjectConfig};
use crate::error::{Result, ScaffoldError};
use crate::templates::{render_artifacts, RenderContext};
use std::fs;
use std::path::{Path, PathBuf};

/// Generate the project described by `config` under `config.project_path`
///
/// Creates the directory structure, then renders and writes every artifact in
/// table order. Returns the relative paths written, in write order. The first
/// failing write aborts the run and leaves earlier files in place.
pub fn materialize(config: &ProjectConfig, package_manager: PackageManager) -> Result<Vec<PathBuf>> {
    config.validate()?;

    let ctx = RenderContext::resolve(config, package_manager);
    let root = config.project_path.as_path();

    tracing::info!(
        project = %ctx.project_name,
        language = %ctx.language,
        package_manager = %ctx.package_manager,
        root = %root.display(),
        "generating project"
    );

    plan_structure(root)?;

    let files = render_artifacts(&ctx)?;
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let relative = PathBuf::from(&file.path);
        write_file(&root.join(&relative), &file.contents)?;
        written.push(relative);
    }

    tracing::info!(files = written.len(), "project generated");

    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| ScaffoldError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::DIRECTORY_PLAN;
    use tempfile::TempDir;

    #[test]
    fn test_every_parent_is_planned() {
        let tmp = TempDir::new().unwrap();
        let config = ProjectConfig::new("demo-api", tmp.path().join("demo-api"));

        let written = materialize(&config, PackageManager::Npm).unwrap();

        for path in &written {
            let parent = path.parent().unwrap();
            assert!(
                parent.as_os_str().is_empty()
                    || DIRECTORY_PLAN.contains(&parent.to_str().unwrap()),
                "{} has unplanned parent",
                path.display()
            );
        }
    }

    #[test]
    fn test_invalid_config_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("demo-api");
        let config = ProjectConfig::new("", &root);

        assert!(matches!(
            materialize(&config, PackageManager::Npm),
            Err(ScaffoldError::InvalidConfig(_))
        ));
        assert!(!root.exists());
    }

    #[test]
    fn test_write_failure_names_the_file() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("demo-api");
        std::fs::create_dir_all(root.join("README.md")).unwrap();
        let config = ProjectConfig::new("demo-api", &root);

        let err = materialize(&config, PackageManager::Npm).unwrap_err();
        match err {
            ScaffoldError::WriteFile { path, .. } => assert_eq!(path, root.join("README.md")),
            other => panic!("unexpected error: {}", other),
        }
        // files before README.md in table order were already written
        assert!(root.join("package.json").is_file());
    }
}
