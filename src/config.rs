use std::num::NonZeroUsize;

use crate::cli::{Cli, OutputFormat};
use crate::digest::DEFAULT_BLOCK_SIZE;

/// Settings for one run, resolved from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestConfig {
    pub block_size: NonZeroUsize,
    pub format: OutputFormat,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            block_size: NonZeroUsize::new(DEFAULT_BLOCK_SIZE).unwrap_or(NonZeroUsize::MIN),
            format: OutputFormat::Text,
        }
    }
}

impl DigestConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            block_size: cli.block_size.unwrap_or(defaults.block_size),
            format: cli.format,
        }
    }
}
