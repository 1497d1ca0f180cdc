use std::ffi::OsString;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::DigestConfig;
use crate::digest::{self, DigestError, DigestResult};

#[derive(Clone, Debug)]
pub enum InputSource {
    Path(PathBuf),
    Stdin,
    Text(OsString),
}

impl InputSource {
    fn digest(&self, config: &DigestConfig) -> Result<DigestResult, DigestError> {
        match self {
            InputSource::Path(path) => {
                digest::compute_file_digest_with_block_size(path, config.block_size.get())
            }
            InputSource::Stdin => digest::compute_stdin_digest(config.block_size),
            InputSource::Text(text) => digest::compute_os_string_digest(text),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Path(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "-"),
            InputSource::Text(text) => write!(f, "\"{}\"", text.to_string_lossy()),
        }
    }
}

#[derive(Debug, Serialize)]
struct DigestRecord {
    input: String,
    sha256: DigestResult,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn exit_code(&self) -> u8 {
        if self.failed == 0 { 0 } else { 1 }
    }
}

/// Digests each input in order. A failing input is reported on `err` and
/// skipped; only a failure to write output aborts the batch.
pub fn run_batch<W: Write, E: Write>(
    inputs: &[InputSource],
    config: &DigestConfig,
    out: &mut W,
    err: &mut E,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    let mut records = Vec::new();

    for input in inputs {
        match input.digest(config) {
            Ok(digest) => {
                report.succeeded += 1;
                match config.format {
                    OutputFormat::Text => {
                        writeln!(out, "{}\t{}", input, digest)
                            .context("failed to write digest to output")?;
                    }
                    OutputFormat::Json | OutputFormat::Yaml => records.push(DigestRecord {
                        input: input.to_string(),
                        sha256: digest,
                    }),
                }
            }
            Err(error) => {
                report.failed += 1;
                log::warn!("skipping {}: {:?}", input, error);
                writeln!(err, "shadigest: {}: {}", input, error)
                    .context("failed to write error report")?;
            }
        }
    }

    match config.format {
        OutputFormat::Text => {}
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&records).context("failed to encode digests as JSON")?;
            writeln!(out, "{}", json).context("failed to write digests to output")?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&records).context("failed to encode digests as YAML")?;
            write!(out, "{}", yaml).context("failed to write digests to output")?;
        }
    }
    out.flush().context("failed to flush output")?;

    log::info!(
        "digested {} input(s), {} failed",
        report.succeeded + report.failed,
        report.failed
    );
    Ok(report)
}
