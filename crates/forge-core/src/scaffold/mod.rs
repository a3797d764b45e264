//! Filesystem side of generation: directory planning and file writes

pub mod materializer;
pub mod structure;

pub use materializer::materialize;
pub use structure::{plan_structure, DIRECTORY_PLAN};
