//! Forge Core - Engine for scaffolding Express + Prisma backend projects
//!
//! Given a [`ProjectConfig`] and a [`PackageManager`], the engine writes a
//! project skeleton whose files agree with each other: source extensions,
//! `package.json` scripts, `tsconfig.json` presence and README commands all
//! follow the same language mode.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Renderers** - Pure functions producing each file's contents (`templates`)
//! - **Layer 2: Materialization** - Directory planning and file writes (`scaffold`)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use forge_core::{materialize, PackageManager, ProjectConfig};
//!
//! let config = ProjectConfig::new("demo-api", "/tmp/demo-api").with_typescript(true);
//! let written = materialize(&config, PackageManager::Pnpm)?;
//! println!("wrote {} files", written.len());
//! # Ok::<(), forge_core::ScaffoldError>(())
//! ```

pub mod config;
pub mod error;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{PackageManager, ProjectConfig};
pub use error::{Result, ScaffoldError};
pub use scaffold::{materialize, plan_structure, DIRECTORY_PLAN};
pub use templates::{render_artifacts, LanguageMode, RenderContext, RenderedFile};

#[cfg(feature = "tui")]
pub use tui::run;
