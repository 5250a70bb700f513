//! Project management: settings and loading compiler artifacts from disk.

pub mod config;
pub mod file_loader;

pub use config::{AnalysisConfig, IncludeTreeOptions};
pub use file_loader::{LoadError, load_into_host, load_listing, load_reference_dump};
