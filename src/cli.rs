use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::batch::InputSource;

#[derive(Debug, Parser)]
#[command(author, version, about = "Print SHA-256 digests of files and strings")]
pub struct Cli {
    /// Files to digest, in order. Use `-` for standard input.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
    /// Digest a literal string (UTF-8). May be repeated.
    #[arg(short, long = "string", value_name = "TEXT")]
    pub strings: Vec<OsString>,
    /// Maximum number of bytes read per block.
    #[arg(short, long, value_name = "BYTES", value_parser = parse_block_size)]
    pub block_size: Option<NonZeroUsize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Paths first, then strings, each in the order given.
    pub fn inputs(&self) -> Vec<InputSource> {
        let paths = self.paths.iter().map(|path| {
            if path.as_os_str() == "-" {
                InputSource::Stdin
            } else {
                InputSource::Path(path.clone())
            }
        });
        let strings = self.strings.iter().cloned().map(InputSource::Text);
        paths.chain(strings).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn parse_block_size(s: &str) -> Result<NonZeroUsize, String> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid byte count", s))?;
    NonZeroUsize::new(value).ok_or_else(|| "block size must be greater than zero".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paths_strings_and_options() {
        let cli = Cli::try_parse_from([
            "shadigest",
            "a.txt",
            "-",
            "--string",
            "Let us test the Binary",
            "--block-size",
            "4096",
            "--format",
            "json",
        ])
        .expect("parse args");
        assert_eq!(cli.block_size, NonZeroUsize::new(4096));
        assert_eq!(cli.format, OutputFormat::Json);
        let inputs = cli.inputs();
        assert_eq!(inputs.len(), 3);
        assert!(matches!(&inputs[0], InputSource::Path(p) if p == &PathBuf::from("a.txt")));
        assert!(matches!(inputs[1], InputSource::Stdin));
        assert!(matches!(&inputs[2], InputSource::Text(t) if t == "Let us test the Binary"));
    }

    #[test]
    fn no_arguments_means_no_inputs() {
        let cli = Cli::try_parse_from(["shadigest"]).expect("parse args");
        assert!(cli.inputs().is_empty());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.block_size.is_none());
    }

    #[test]
    fn rejects_zero_block_size() {
        assert!(Cli::try_parse_from(["shadigest", "--block-size", "0", "a.txt"]).is_err());
        assert!(Cli::try_parse_from(["shadigest", "-b", "lots", "a.txt"]).is_err());
    }
}
