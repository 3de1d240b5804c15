use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Could not parse IPv4 address {0:?}")]
    InvalidV4(String),
    #[error("Could not parse IPv6 address {0:?}")]
    InvalidV6(String),
    #[error("Could not recognize {0:?} as an IP address, it contains neither ':' nor '.'")]
    Unrecognized(String),
    #[error("Binary address must be 16 bytes long, got {0}")]
    InvalidLength(usize),
    #[error("Could not decode hex {0:?}: {1}")]
    InvalidHex(String, String),
}
