//! This module contains the data structs for invoking the ipbinary binary with CLI arguments
//! and for deserializing its optional TOML configuration file.

use crate::codec::Compression;
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode IP addresses to 16 bytes, printed as 32 hex characters
    Encode(EncodeCommand),
    /// Format 16 bytes, given as 32 hex characters, to IP addresses
    Format(FormatCommand),
}

#[derive(Parser, Debug)]
pub struct EncodeCommand {
    /// IPv4 or IPv6 addresses
    #[arg(required = true)]
    pub addresses: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct FormatCommand {
    /// Binary addresses as hex, optionally prefixed with 0x
    #[arg(required = true)]
    pub hex: Vec<String>,
    /// Zero group compression for IPv6, overrides the configuration file
    #[arg(long, value_enum)]
    pub compression: Option<Compression>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub compression: Compression,
    /// print the nulled address for invalid input instead of failing
    #[serde(default = "default_sentinel")]
    pub sentinel: bool,
}

impl Config {
    pub fn deserialize(data: &str) -> anyhow::Result<Config> {
        toml::from_str::<Config>(data)
            .with_context(|| format!("Could not create Config from {data}"))
    }

    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let data = fs::read_to_string(path).with_context(|| format!("Could not read {path:?}"))?;
        Self::deserialize(&data)
    }

    pub fn load_optional(path: Option<&Path>) -> anyhow::Result<Config> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {path:?}");
                Self::load(path)
            }
            None => Ok(Config::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            compression: Compression::default(),
            sentinel: default_sentinel(),
        }
    }
}

fn default_sentinel() -> bool {
    true
}
