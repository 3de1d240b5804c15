use crate::codec::constants::{ADDRESS_SIZE, NULLED};
use crate::codec::encode::{encode_ip, try_encode};
use crate::codec::error::AddressError;
use crate::codec::format::{decode, format, is_mapped};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// A 16 byte address as it is stored, e.g. in a `BINARY(16)` column.
///
/// Ordering is byte-wise, so a range of addresses of the same family can be selected with
/// `BETWEEN` on the stored bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinaryAddress([u8; ADDRESS_SIZE]);

impl BinaryAddress {
    pub const NULLED: BinaryAddress = BinaryAddress(NULLED);

    pub fn octets(&self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    /// true for the failure sentinel, which is also the encoding of `::`
    pub fn is_nulled(&self) -> bool {
        self.0 == NULLED
    }

    pub fn is_mapped(&self) -> bool {
        is_mapped(&self.0)
    }

    pub fn to_ip(&self) -> IpAddr {
        decode(&self.0)
    }
}

impl From<[u8; ADDRESS_SIZE]> for BinaryAddress {
    fn from(value: [u8; ADDRESS_SIZE]) -> Self {
        BinaryAddress(value)
    }
}

impl From<BinaryAddress> for [u8; ADDRESS_SIZE] {
    fn from(value: BinaryAddress) -> Self {
        value.0
    }
}

impl From<IpAddr> for BinaryAddress {
    fn from(value: IpAddr) -> Self {
        BinaryAddress(encode_ip(&value))
    }
}

impl AsRef<[u8]> for BinaryAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for BinaryAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_encode(s).map(BinaryAddress)
    }
}

impl fmt::Display for BinaryAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(&self.0))
    }
}

/// serialized as text, so addresses stay readable in TOML and JSON
impl Serialize for BinaryAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BinaryAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse::<BinaryAddress>().map_err(serde::de::Error::custom)
    }
}
