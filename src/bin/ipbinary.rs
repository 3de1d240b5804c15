use clap::Parser;
use ipbinary::cli::run_cli;
use ipbinary::common::init_logger;
use ipbinary::config::CliArgs;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logger();
    match run_cli(CliArgs::parse(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
