use crate::codec::constants::{ADDRESS_SIZE, MAPPED_PREFIX, MAPPED_PREFIX_SIZE};
use crate::codec::error::AddressError;
use clap::ValueEnum;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// How runs of zero groups are collapsed when rendering an IPv6 address.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Compression {
    /// Collapse the first run of zero groups, even a single group. Matches already stored data.
    #[default]
    FirstRun,
    /// RFC 5952: collapse the longest run of at least two zero groups.
    Canonical,
}

/// Renders a binary address as text, using [`Compression::FirstRun`] for IPv6.
pub fn format(addr: &[u8; ADDRESS_SIZE]) -> String {
    format_with(addr, Compression::FirstRun)
}

pub fn format_with(addr: &[u8; ADDRESS_SIZE], compression: Compression) -> String {
    if is_mapped(addr) {
        return Ipv4Addr::new(addr[12], addr[13], addr[14], addr[15]).to_string();
    }

    match compression {
        Compression::FirstRun => compress_first_run(&Ipv6Addr::from(*addr).segments()),
        Compression::Canonical => Ipv6Addr::from(*addr).to_string(),
    }
}

/// Same as [`format`] for data of unchecked length, e.g. a column read from a database.
pub fn try_format(data: &[u8]) -> Result<String, AddressError> {
    let addr = <&[u8; ADDRESS_SIZE]>::try_from(data)
        .map_err(|_| AddressError::InvalidLength(data.len()))?;
    Ok(format(addr))
}

pub fn decode(addr: &[u8; ADDRESS_SIZE]) -> IpAddr {
    let v6 = Ipv6Addr::from(*addr);
    match v6.to_ipv4_mapped() {
        Some(v4) => IpAddr::V4(v4),
        None => IpAddr::V6(v6),
    }
}

pub fn is_mapped(addr: &[u8; ADDRESS_SIZE]) -> bool {
    addr[..MAPPED_PREFIX_SIZE] == MAPPED_PREFIX
}

/// Parses 32 hex characters, optionally prefixed with `0x`, into a binary address.
pub fn parse_hex(data: &str) -> Result<[u8; ADDRESS_SIZE], AddressError> {
    let trimmed = data.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes =
        hex::decode(digits).map_err(|e| AddressError::InvalidHex(data.to_string(), e.to_string()))?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| AddressError::InvalidLength(len))
}

fn compress_first_run(segments: &[u16; 8]) -> String {
    let groups: Vec<String> = segments.iter().map(|s| format!("{s:x}")).collect();
    match segments.iter().position(|s| *s == 0) {
        Some(start) => {
            let end = segments[start..]
                .iter()
                .position(|s| *s != 0)
                .map_or(segments.len(), |len| start + len);
            format!("{}::{}", groups[..start].join(":"), groups[end..].join(":"))
        }
        None => groups.join(":"),
    }
}
