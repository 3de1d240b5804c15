//! Runs the subcommands of the ipbinary binary

use crate::codec::{format_with, parse_hex, try_encode, NULLED};
use crate::config::{CliArgs, Commands, Config, EncodeCommand, FormatCommand};
use anyhow::anyhow;
use std::io::Write;

pub fn run_cli(args: CliArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let config = Config::load_optional(args.config.as_deref())?;
    match args.command {
        Commands::Encode(cmd) => run_encode(&cmd, &config, out),
        Commands::Format(cmd) => run_format(&cmd, &config, out),
    }
}

fn run_encode(cmd: &EncodeCommand, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    for address in &cmd.addresses {
        let encoded = match try_encode(address) {
            Ok(encoded) => encoded,
            Err(e) if config.sentinel => {
                log::warn!("{e}, writing nulled address");
                NULLED
            }
            Err(e) => return Err(anyhow!(e)),
        };
        writeln!(out, "{}", hex::encode(encoded))
            .map_err(|e| anyhow!("Could not write encoded {address}: {e}"))?;
    }
    Ok(())
}

fn run_format(cmd: &FormatCommand, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let compression = cmd.compression.unwrap_or(config.compression);
    for data in &cmd.hex {
        let addr = parse_hex(data)?;
        writeln!(out, "{}", format_with(&addr, compression))
            .map_err(|e| anyhow!("Could not write formatted {data}: {e}"))?;
    }
    Ok(())
}
