use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use shadigest::batch;
use shadigest::cli::Cli;
use shadigest::config::DigestConfig;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let config = DigestConfig::from_cli(&cli);
    let inputs = cli.inputs();

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let report = batch::run_batch(&inputs, &config, &mut out, &mut err)?;

    Ok(ExitCode::from(report.exit_code()))
}
