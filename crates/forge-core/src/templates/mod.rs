//! Content renderers and the artifact table
//!
//! This module provides:
//! - The content-variant selector (`LanguageMode`, `RenderContext`)
//! - One pure renderer per generated file kind
//! - `ARTIFACTS`: the ordered table mapping each file to its path, emission
//!   rule and renderer, consumed by a single rendering pass

pub mod manifest;
pub mod prisma;
pub mod project_files;
pub mod readme;
pub mod source;
pub mod variant;

use crate::error::{Result, ScaffoldError};
use std::path::PathBuf;

pub use manifest::PackageManifest;
pub use variant::{LanguageMode, RenderContext};

/// Placeholder replaced with the language mode's source extension
const EXT_PLACEHOLDER: &str = "{ext}";

/// When an artifact is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    Always,
    TypeScriptOnly,
}

impl Emission {
    pub fn applies_to(&self, language: LanguageMode) -> bool {
        match self {
            Emission::Always => true,
            Emission::TypeScriptOnly => language.is_typescript(),
        }
    }
}

type RenderFn = fn(&RenderContext) -> Result<String>;

/// One generated file: where it goes, when it is written, how it is rendered
pub struct Artifact {
    /// Relative path; `{ext}` expands to the source extension
    pub path: &'static str,
    pub emission: Emission,
    render: RenderFn,
}

impl Artifact {
    pub fn resolve_path(&self, language: LanguageMode) -> String {
        self.path.replace(EXT_PLACEHOLDER, language.source_ext())
    }

    pub fn render(&self, ctx: &RenderContext) -> Result<String> {
        (self.render)(ctx)
    }
}

/// Every generated file, in write order
pub const ARTIFACTS: &[Artifact] = &[
    Artifact {
        path: "package.json",
        emission: Emission::Always,
        render: render_package_json,
    },
    Artifact {
        path: "src/index.{ext}",
        emission: Emission::Always,
        render: render_entry,
    },
    Artifact {
        path: "src/lib/prisma.{ext}",
        emission: Emission::Always,
        render: render_prisma_client,
    },
    Artifact {
        path: "src/middlewares/error.middleware.{ext}",
        emission: Emission::Always,
        render: render_error_middleware,
    },
    Artifact {
        path: "prisma/schema.prisma",
        emission: Emission::Always,
        render: render_schema,
    },
    // TypeScript config file, read by the Prisma CLI in both modes
    Artifact {
        path: "prisma.config.ts",
        emission: Emission::Always,
        render: render_prisma_config,
    },
    Artifact {
        path: "tsconfig.json",
        emission: Emission::TypeScriptOnly,
        render: render_tsconfig,
    },
    Artifact {
        path: ".env",
        emission: Emission::Always,
        render: render_env,
    },
    Artifact {
        path: ".gitignore",
        emission: Emission::Always,
        render: render_gitignore,
    },
    Artifact {
        path: "README.md",
        emission: Emission::Always,
        render: render_readme,
    },
];

fn render_package_json(ctx: &RenderContext) -> Result<String> {
    manifest::render_manifest(ctx)
        .to_json()
        .map_err(|source| ScaffoldError::Serialize {
            path: PathBuf::from("package.json"),
            source,
        })
}

fn render_entry(ctx: &RenderContext) -> Result<String> {
    Ok(source::render_entry(ctx.language))
}

fn render_prisma_client(ctx: &RenderContext) -> Result<String> {
    Ok(source::render_prisma_client(ctx.language))
}

fn render_error_middleware(ctx: &RenderContext) -> Result<String> {
    Ok(source::render_error_middleware(ctx.language))
}

fn render_schema(_ctx: &RenderContext) -> Result<String> {
    Ok(prisma::render_schema())
}

fn render_prisma_config(_ctx: &RenderContext) -> Result<String> {
    Ok(prisma::render_config())
}

fn render_tsconfig(_ctx: &RenderContext) -> Result<String> {
    Ok(project_files::render_tsconfig())
}

fn render_env(ctx: &RenderContext) -> Result<String> {
    Ok(project_files::render_env(&ctx.database))
}

fn render_gitignore(_ctx: &RenderContext) -> Result<String> {
    Ok(project_files::render_gitignore())
}

fn render_readme(ctx: &RenderContext) -> Result<String> {
    Ok(readme::render_readme(ctx))
}

/// A rendered file, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the project root, `/`-separated
    pub path: String,
    pub contents: String,
}

/// Render every artifact that applies to the context, in write order
///
/// Pure: no filesystem access, identical input gives identical output.
pub fn render_artifacts(ctx: &RenderContext) -> Result<Vec<RenderedFile>> {
    ARTIFACTS
        .iter()
        .filter(|artifact| artifact.emission.applies_to(ctx.language))
        .map(|artifact| -> Result<RenderedFile> {
            Ok(RenderedFile {
                path: artifact.resolve_path(ctx.language),
                contents: artifact.render(ctx)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PackageManager;

    fn ctx(language: LanguageMode, package_manager: PackageManager) -> RenderContext {
        RenderContext {
            project_name: "demo-api".to_string(),
            language,
            package_manager,
            database: "sqlite".to_string(),
        }
    }

    fn paths(files: &[RenderedFile]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_typescript_artifacts_in_order() {
        let files = render_artifacts(&ctx(LanguageMode::TypeScript, PackageManager::Npm)).unwrap();
        assert_eq!(
            paths(&files),
            vec![
                "package.json",
                "src/index.ts",
                "src/lib/prisma.ts",
                "src/middlewares/error.middleware.ts",
                "prisma/schema.prisma",
                "prisma.config.ts",
                "tsconfig.json",
                ".env",
                ".gitignore",
                "README.md",
            ]
        );
    }

    #[test]
    fn test_javascript_skips_tsconfig_but_keeps_prisma_config() {
        let files = render_artifacts(&ctx(LanguageMode::JavaScript, PackageManager::Npm)).unwrap();
        let paths = paths(&files);
        assert!(!paths.contains(&"tsconfig.json"));
        assert!(paths.contains(&"prisma.config.ts"));
        assert!(paths.contains(&"src/index.js"));
        assert_eq!(paths.len(), ARTIFACTS.len() - 1);
    }

    #[test]
    fn test_manifest_agrees_with_source_extensions() {
        for language in LanguageMode::ALL {
            for pm in PackageManager::ALL {
                let c = ctx(language, pm);
                let files = render_artifacts(&c).unwrap();
                let manifest: serde_json::Value =
                    serde_json::from_str(&files[0].contents).unwrap();

                let ext = format!(".{}", language.source_ext());
                for file in files.iter().filter(|f| f.path.starts_with("src/")) {
                    assert!(file.path.ends_with(&ext), "{} in {}", file.path, language);
                }

                let dev = manifest["scripts"]["dev"].as_str().unwrap();
                assert!(dev.ends_with(&language.entry_path()));
                assert_eq!(manifest["main"], language.main_path());
                assert_eq!(
                    manifest["scripts"].get("build").is_some(),
                    language.is_typescript()
                );
            }
        }
    }

    #[test]
    fn test_package_manager_only_changes_readme() {
        for language in LanguageMode::ALL {
            let npm = render_artifacts(&ctx(language, PackageManager::Npm)).unwrap();
            let pnpm = render_artifacts(&ctx(language, PackageManager::Pnpm)).unwrap();
            for (a, b) in npm.iter().zip(&pnpm) {
                assert_eq!(a.path, b.path);
                if a.path != "README.md" {
                    assert_eq!(a.contents, b.contents, "{} differs", a.path);
                }
            }
        }
    }
}
