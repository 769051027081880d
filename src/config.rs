//! Run configuration for mazecut
//!
//! Built once from the parsed command line and handed to the decimator,
//! so nothing downstream reads process arguments directly.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Keep one character out of every `DEFAULT_STRIDE`
pub const DEFAULT_STRIDE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File rewritten in place
    pub file_name: PathBuf,

    /// Sampling step applied to each line, fixed at construction
    stride: usize,
}

impl Config {
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            stride: DEFAULT_STRIDE,
        }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self::new(cli.file_name)
    }

    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.stride == 0 {
            anyhow::bail!("Invalid stride: {} (must be at least 1)", self.stride);
        }

        if self.file_name.as_os_str().is_empty() {
            anyhow::bail!("Missing file name");
        }

        Ok(())
    }
}
