//! Charm-style CLI prompts using cliclack

use crate::config::{PackageManager, ProjectConfig};
use crate::scaffold;
use crate::templates::LanguageMode;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

const DEFAULT_PROJECT_NAME: &str = "my-api";
const DEFAULT_DATABASE: &str = "sqlite";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name
    pub name: Option<String>,

    /// Project directory to create (defaults to `./<name>`)
    pub directory: Option<PathBuf>,

    /// Language mode: `Some(true)` for TypeScript, `Some(false)` for JavaScript
    pub typescript: Option<bool>,

    /// Database name, used as the SQLite file stem
    pub database: Option<String>,

    /// Reserved template selector
    pub template: Option<String>,

    /// Package manager name (npm, yarn, pnpm)
    pub package_manager: Option<String>,

    /// YAML preset providing defaults for the fields above
    pub config: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("express-forge")?;

    let preset = match &args.config {
        Some(path) => {
            let preset = ProjectConfig::from_yaml_file(path)?;
            cliclack::log::info(format!("Using preset from {}", path.display()))?;
            Some(preset)
        }
        None => None,
    };

    let project_name = select_name(&args, preset.as_ref())?;
    let project_dir = select_directory(&args, preset.as_ref(), &project_name)?;
    let language = select_language(&args, preset.as_ref())?;
    let database = select_database(&args, preset.as_ref())?;
    let package_manager = select_package_manager(&args)?;

    let template = args
        .template
        .clone()
        .or_else(|| preset.as_ref().map(|p| p.template.clone()))
        .unwrap_or_else(|| "default".to_string());

    let config = ProjectConfig::new(project_name, project_dir.clone())
        .with_typescript(language.is_typescript())
        .with_database(database)
        .with_template(template);

    create_project(&config, package_manager)?;

    print_next_steps(&project_dir, package_manager)?;

    Ok(())
}

fn select_name(args: &CreateArgs, preset: Option<&ProjectConfig>) -> Result<String> {
    if let Some(name) = args
        .name
        .clone()
        .or_else(|| preset.map(|p| p.project_name.clone()))
    {
        cliclack::log::info(format!("Project name: {}", name))?;
        return Ok(name);
    }

    if args.yes {
        return Ok(DEFAULT_PROJECT_NAME.to_string());
    }

    let name: String = cliclack::input("Project name")
        .placeholder(DEFAULT_PROJECT_NAME)
        .default_input(DEFAULT_PROJECT_NAME)
        .validate(|input: &String| {
            if input.trim().is_empty() {
                Err("Project name is required")
            } else {
                Ok(())
            }
        })
        .interact()?;

    Ok(name.trim().to_string())
}

fn resolve_path(current_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        current_dir.join(path)
    }
}

fn select_directory(
    args: &CreateArgs,
    preset: Option<&ProjectConfig>,
    project_name: &str,
) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let given = args
        .directory
        .clone()
        .or_else(|| preset.map(|p| p.project_path.clone()));

    let path = match given {
        Some(dir) => {
            let p = resolve_path(&current_dir, &dir);
            cliclack::log::info(format!("Using directory: {}", p.display()))?;
            p
        }
        None if args.yes => current_dir.join(project_name),
        None => {
            let input: String = cliclack::input("Project directory")
                .placeholder(project_name)
                .default_input(project_name)
                .interact()?;

            if input.is_empty() || input == "." {
                current_dir.clone()
            } else {
                resolve_path(&current_dir, Path::new(&input))
            }
        }
    };

    // Validate parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    // Warn if directory exists and has files
    if path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&path) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!(
                    "Directory has {} existing items; generated files will overwrite same-named ones",
                    count
                ))?;

                let confirm = if args.yes {
                    true
                } else {
                    cliclack::confirm("Continue anyway?")
                        .initial_value(false)
                        .interact()?
                };

                if !confirm {
                    anyhow::bail!("Setup cancelled.");
                }
            }
        }
    }

    Ok(path)
}

fn select_language(args: &CreateArgs, preset: Option<&ProjectConfig>) -> Result<LanguageMode> {
    let language = match args.typescript.or_else(|| preset.map(|p| p.typescript)) {
        Some(typescript) => LanguageMode::from_flag(typescript),
        None if args.yes => LanguageMode::TypeScript,
        None => cliclack::select("Language")
            .item(LanguageMode::TypeScript, "TypeScript", "tsx + tsc")
            .item(LanguageMode::JavaScript, "JavaScript", "node --watch")
            .initial_value(LanguageMode::TypeScript)
            .interact()?,
    };

    cliclack::log::success(format!("Language: {}", language))?;
    Ok(language)
}

/// Database name from flags or preset, if either supplied one
fn given_database(args: &CreateArgs, preset: Option<&ProjectConfig>) -> Option<String> {
    args.database
        .clone()
        .or_else(|| preset.map(|p| p.database.clone()))
}

fn select_database(args: &CreateArgs, preset: Option<&ProjectConfig>) -> Result<String> {
    let database = match given_database(args, preset) {
        Some(database) => database,
        None if args.yes => DEFAULT_DATABASE.to_string(),
        None => {
            let input: String = cliclack::input("Database name")
                .placeholder(DEFAULT_DATABASE)
                .default_input(DEFAULT_DATABASE)
                .validate(|input: &String| {
                    if input.trim().is_empty() {
                        Err("Database name is required")
                    } else {
                        Ok(())
                    }
                })
                .interact()?;
            input.trim().to_string()
        }
    };

    cliclack::log::info(format!(
        "Database: {} (SQLite file ./{}.db)",
        database, database
    ))?;
    Ok(database)
}

fn select_package_manager(args: &CreateArgs) -> Result<PackageManager> {
    if let Some(name) = &args.package_manager {
        let pm: PackageManager = name.parse()?;
        cliclack::log::info(format!("Package manager: {}", pm))?;
        return Ok(pm);
    }

    let detected = PackageManager::detect();
    if args.yes {
        return Ok(detected);
    }

    let mut select = cliclack::select("Package manager");
    for pm in PackageManager::ALL {
        select = select.item(pm, pm.name(), "");
    }

    Ok(select.initial_value(detected).interact()?)
}

fn create_project(config: &ProjectConfig, package_manager: PackageManager) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let written = match scaffold::materialize(config, package_manager) {
        Ok(written) => written,
        Err(e) => {
            spinner.error("Failed to create project");
            return Err(e).with_context(|| {
                format!(
                    "Project generation stopped; delete {} and try again",
                    config.project_path.display()
                )
            });
        }
    };

    spinner.stop(format!(
        "Created {} files in {}",
        written.len(),
        config.project_path.display()
    ));

    Ok(())
}

/// Steps to run after generation, using the selected manager's commands
pub fn next_steps(dir: &Path, package_manager: PackageManager) -> Vec<String> {
    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();

    if current.as_deref() != Some(dir) {
        steps.push(format!("cd {}", dir.display()));
    }

    steps.push(package_manager.install_command());

    if package_manager.requires_build_approval() {
        steps.push("pnpm approve-builds".to_string());
    }

    steps.push(package_manager.run("db:migrate"));
    steps.push(package_manager.run("dev"));

    steps
}

fn print_next_steps(project_dir: &Path, package_manager: PackageManager) -> Result<()> {
    let steps = next_steps(project_dir, package_manager);

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_steps_for_pnpm() {
        let steps = next_steps(Path::new("/nonexistent/demo-api"), PackageManager::Pnpm);
        assert_eq!(
            steps,
            vec![
                "cd /nonexistent/demo-api",
                "pnpm install",
                "pnpm approve-builds",
                "pnpm db:migrate",
                "pnpm dev",
            ]
        );
    }

    #[test]
    fn test_next_steps_for_npm() {
        let steps = next_steps(Path::new("/nonexistent/demo-api"), PackageManager::Npm);
        assert!(!steps.iter().any(|s| s.contains("approve-builds")));
        assert_eq!(steps.last().unwrap(), "npm run dev");
    }

    #[test]
    fn test_database_prompted_only_when_not_supplied() {
        let args = CreateArgs::default();
        assert_eq!(given_database(&args, None), None);

        let preset = ProjectConfig::new("demo-api", "/tmp/demo-api").with_database("analytics");
        assert_eq!(
            given_database(&args, Some(&preset)).as_deref(),
            Some("analytics")
        );

        let args = CreateArgs {
            database: Some("orders".to_string()),
            ..CreateArgs::default()
        };
        assert_eq!(given_database(&args, Some(&preset)).as_deref(), Some("orders"));
    }

    #[test]
    fn test_resolve_path() {
        let cwd = Path::new("/work");
        assert_eq!(resolve_path(cwd, Path::new("api")), PathBuf::from("/work/api"));
        assert_eq!(resolve_path(cwd, Path::new("/srv/api")), PathBuf::from("/srv/api"));
    }
}
