//! express-forge - Scaffold Express + Prisma backend projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use forge_core::tui::CreateArgs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable controlling diagnostic output
const LOG_ENV: &str = "FORGE_LOG";

#[derive(Parser, Debug)]
#[command(name = "express-forge")]
#[command(about = "CLI for scaffolding Express + Prisma backend projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new backend project
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Project directory to create (defaults to ./<name>)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Generate a TypeScript project (default)
    #[arg(long, conflicts_with = "javascript")]
    pub typescript: bool,

    /// Generate a JavaScript project
    #[arg(long)]
    pub javascript: bool,

    /// Database name; names the SQLite file in .env
    #[arg(long)]
    pub database: Option<String>,

    /// Template name (reserved)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Package manager used in generated instructions (npm, yarn, pnpm)
    #[arg(short, long = "package-manager")]
    pub package_manager: Option<String>,

    /// YAML preset with project settings; flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        let typescript = match (args.typescript, args.javascript) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        CreateArgs {
            name: args.name,
            directory: args.directory,
            typescript,
            database: args.database,
            template: args.template,
            package_manager: args.package_manager,
            config: args.config,
            yes: args.yes,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_tracing();

    let args = Args::parse();

    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args.into(),
        // No subcommand provided, default to create behavior (interactive mode)
        None => CreateArgs::default(),
    };

    let result = forge_core::run(create_args);

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
