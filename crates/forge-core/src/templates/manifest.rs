//! `package.json` manifest types and rendering

use super::variant::{LanguageMode, RenderContext};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dependencies shared by both language modes
const DEPENDENCIES: &[(&str, &str)] = &[
    ("@prisma/adapter-better-sqlite3", "^7.0.0"),
    ("@prisma/client", "^7.0.0"),
    ("dotenv", "^17.2.3"),
    ("express", "^5.1.0"),
];

/// Native driver loaded by the adapter at runtime, declared only for JavaScript
const JS_RUNTIME_ADAPTER: &[(&str, &str)] = &[("better-sqlite3", "^12.4.1")];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[("prisma", "^7.0.0")];

/// Type-checking engine, TS runner and type definitions
const TS_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@types/better-sqlite3", "^7.6.13"),
    ("@types/express", "^5.0.3"),
    ("@types/node", "^24.7.0"),
    ("tsx", "^4.20.6"),
    ("typescript", "^5.9.3"),
];

/// Database scripts, identical in both modes
const DB_SCRIPTS: &[(&str, &str)] = &[
    ("db:generate", "prisma generate"),
    ("db:migrate", "prisma migrate dev"),
    ("db:studio", "prisma studio"),
];

/// The generated project's `package.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,

    pub version: String,

    pub description: String,

    /// Entry point: compiled output in TypeScript mode, source otherwise
    pub main: String,

    /// Module system, always `module`
    #[serde(rename = "type")]
    pub module_type: String,

    pub scripts: BTreeMap<String, String>,

    pub dependencies: BTreeMap<String, String>,

    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Serialize as pretty JSON with a trailing newline
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }
}

fn table(entries: &[&[(&str, &str)]]) -> BTreeMap<String, String> {
    entries
        .iter()
        .flat_map(|entries| entries.iter())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Script table for a language mode
///
/// Every script that runs a file references the same path the materializer
/// writes the entry point to.
pub fn scripts(language: LanguageMode) -> BTreeMap<String, String> {
    let entry = language.entry_path();
    let mut scripts = table(&[DB_SCRIPTS]);

    match language {
        LanguageMode::TypeScript => {
            scripts.insert(
                "dev".to_string(),
                format!("tsx watch --env-file=.env {}", entry),
            );
            scripts.insert("build".to_string(), "tsc".to_string());
            scripts.insert(
                "start".to_string(),
                format!("node --env-file=.env {}", language.main_path()),
            );
        }
        LanguageMode::JavaScript => {
            scripts.insert(
                "dev".to_string(),
                format!("node --watch --env-file=.env {}", entry),
            );
            scripts.insert(
                "start".to_string(),
                format!("node --env-file=.env {}", entry),
            );
        }
    }

    scripts
}

/// Render the `package.json` manifest
pub fn render_manifest(ctx: &RenderContext) -> PackageManifest {
    let (dependencies, dev_dependencies) = match ctx.language {
        LanguageMode::TypeScript => (
            table(&[DEPENDENCIES]),
            table(&[DEV_DEPENDENCIES, TS_DEV_DEPENDENCIES]),
        ),
        LanguageMode::JavaScript => (
            table(&[DEPENDENCIES, JS_RUNTIME_ADAPTER]),
            table(&[DEV_DEPENDENCIES]),
        ),
    };

    PackageManifest {
        name: ctx.project_name.clone(),
        version: "1.0.0".to_string(),
        description: format!("Express + Prisma API ({})", ctx.language.display_name()),
        main: ctx.language.main_path().to_string(),
        module_type: "module".to_string(),
        scripts: scripts(ctx.language),
        dependencies,
        dev_dependencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PackageManager;

    fn ctx(language: LanguageMode) -> RenderContext {
        RenderContext {
            project_name: "demo-api".to_string(),
            language,
            package_manager: PackageManager::Npm,
            database: "sqlite".to_string(),
        }
    }

    #[test]
    fn test_typescript_scripts() {
        let manifest = render_manifest(&ctx(LanguageMode::TypeScript));
        assert_eq!(manifest.scripts["dev"], "tsx watch --env-file=.env src/index.ts");
        assert_eq!(manifest.scripts["build"], "tsc");
        assert_eq!(manifest.scripts["start"], "node --env-file=.env dist/index.js");
        assert_eq!(manifest.main, "dist/index.js");
    }

    #[test]
    fn test_javascript_scripts() {
        let manifest = render_manifest(&ctx(LanguageMode::JavaScript));
        assert_eq!(manifest.scripts["dev"], "node --watch --env-file=.env src/index.js");
        assert!(!manifest.has_script("build"));
        assert_eq!(manifest.main, "src/index.js");
    }

    #[test]
    fn test_type_packages_only_in_typescript() {
        let ts = render_manifest(&ctx(LanguageMode::TypeScript));
        let js = render_manifest(&ctx(LanguageMode::JavaScript));

        assert!(ts.dev_dependencies.contains_key("typescript"));
        assert!(ts.dev_dependencies.contains_key("@types/express"));
        assert!(!ts.dependencies.contains_key("better-sqlite3"));

        assert!(js
            .dev_dependencies
            .keys()
            .chain(js.dependencies.keys())
            .all(|name| !name.starts_with("@types/") && name != "typescript" && name != "tsx"));
        assert!(js.dependencies.contains_key("better-sqlite3"));
    }

    #[test]
    fn test_json_field_names() {
        let json = render_manifest(&ctx(LanguageMode::JavaScript))
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "module");
        assert_eq!(value["name"], "demo-api");
        assert!(value["devDependencies"]["prisma"].is_string());
        assert!(json.ends_with("}\n"));
    }
}
