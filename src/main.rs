use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use fieldcheck::config::Args;

fn main() -> Result<ExitCode> {
    // Logging is configured before the full config so config loading can log
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    fieldcheck::cli::run_with_args(args)
}
