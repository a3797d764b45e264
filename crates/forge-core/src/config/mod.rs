//! Configuration contract
//!
//! - `ProjectConfig`: the per-run input (name, destination, language mode, database)
//! - `PackageManager`: the secondary input that only shapes documentation

pub mod package_manager;
pub mod project;

pub use package_manager::PackageManager;
pub use project::ProjectConfig;
