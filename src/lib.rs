//! Converts IPv4 and IPv6 addresses into a fixed 16 byte binary form and back

/// runs the subcommands of the ipbinary binary
pub mod cli;
/// encoding of textual addresses to 16 bytes and formatting of 16 bytes to text
pub mod codec;
/// functionality shared by the library and the binary
pub mod common;
/// data structures for CLI arguments and the TOML configuration file
pub mod config;

pub use codec::{
    decode, encode, encode_ip, encode_v4, encode_v6, format, format_with, try_encode,
    try_encode_v4, try_encode_v6, try_format, AddressError, BinaryAddress, Compression, NULLED,
};
