//! mazecut: in-place decimation of ASCII-art maze files
//!
//! This library exposes the decimator for use in integration and property tests.
//! The main binary is at src/main.rs.

pub mod cli;
pub mod config;
pub mod decimator;
pub mod error_helpers;
pub mod logger;

// Re-export commonly used types for convenience
pub use cli::Cli;
pub use config::Config;
pub use decimator::{DecimateReport, decimate_content, decimate_file, decimate_line};
