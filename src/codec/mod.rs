//! Conversion between textual IP addresses and their 16 byte binary form.
//!
//! IPv4 addresses are stored IPv4-mapped (`::ffff:a.b.c.d`), IPv6 addresses as their raw octets,
//! so both families sort together byte by byte.

mod address;
mod constants;
mod encode;
mod error;
mod format;

pub use address::BinaryAddress;
pub use constants::{ADDRESS_SIZE, MAPPED_PREFIX, MAPPED_PREFIX_SIZE, NULLED};
pub use encode::{encode, encode_ip, encode_v4, encode_v6, try_encode, try_encode_v4, try_encode_v6};
pub use error::AddressError;
pub use format::{decode, format, format_with, is_mapped, parse_hex, try_format, Compression};
