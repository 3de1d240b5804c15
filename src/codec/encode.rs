use crate::codec::constants::{ADDRESS_SIZE, MAPPED_PREFIX, MAPPED_PREFIX_SIZE, NULLED};
use crate::codec::error::AddressError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Encodes a dotted quad, returns [`NULLED`] if `addr` is not a valid IPv4 address.
pub fn encode_v4(addr: &str) -> [u8; ADDRESS_SIZE] {
    or_nulled(try_encode_v4(addr))
}

/// Encodes a colon separated IPv6 address, returns [`NULLED`] if `addr` is not valid.
pub fn encode_v6(addr: &str) -> [u8; ADDRESS_SIZE] {
    or_nulled(try_encode_v6(addr))
}

/// Dispatches on the separators: any `:` means IPv6, otherwise any `.` means IPv4.
/// Everything else encodes to [`NULLED`].
pub fn encode(addr: &str) -> [u8; ADDRESS_SIZE] {
    or_nulled(try_encode(addr))
}

pub fn try_encode_v4(addr: &str) -> Result<[u8; ADDRESS_SIZE], AddressError> {
    let v4 = addr.parse::<Ipv4Addr>().map_err(|_| AddressError::InvalidV4(addr.to_string()))?;
    Ok(mapped(v4))
}

pub fn try_encode_v6(addr: &str) -> Result<[u8; ADDRESS_SIZE], AddressError> {
    let v6 = addr.parse::<Ipv6Addr>().map_err(|_| AddressError::InvalidV6(addr.to_string()))?;
    Ok(native(v6))
}

pub fn try_encode(addr: &str) -> Result<[u8; ADDRESS_SIZE], AddressError> {
    if addr.contains(':') {
        try_encode_v6(addr)
    } else if addr.contains('.') {
        try_encode_v4(addr)
    } else {
        Err(AddressError::Unrecognized(addr.to_string()))
    }
}

pub fn encode_ip(ip: &IpAddr) -> [u8; ADDRESS_SIZE] {
    match ip {
        IpAddr::V4(v4) => mapped(*v4),
        IpAddr::V6(v6) => native(*v6),
    }
}

fn mapped(v4: Ipv4Addr) -> [u8; ADDRESS_SIZE] {
    let mut out = [0u8; ADDRESS_SIZE];
    out[..MAPPED_PREFIX_SIZE].copy_from_slice(&MAPPED_PREFIX);
    out[MAPPED_PREFIX_SIZE..].copy_from_slice(&v4.octets());
    out
}

// segments() already has any "::" elision expanded to the missing zero groups
fn native(v6: Ipv6Addr) -> [u8; ADDRESS_SIZE] {
    let mut out = [0u8; ADDRESS_SIZE];
    for (chunk, segment) in out.chunks_exact_mut(2).zip(v6.segments()) {
        chunk.copy_from_slice(&segment.to_be_bytes());
    }
    out
}

fn or_nulled(result: Result<[u8; ADDRESS_SIZE], AddressError>) -> [u8; ADDRESS_SIZE] {
    result.unwrap_or_else(|e| {
        log::debug!("{e}, falling back to nulled address");
        NULLED
    })
}

#[cfg(test)]
mod tests {
    use crate::codec::encode::{
        encode, encode_ip, encode_v4, encode_v6, try_encode, try_encode_v4, try_encode_v6,
    };
    use crate::codec::{AddressError, NULLED};
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_encode_v4_loopback() {
        assert_eq!(
            encode_v4("127.0.0.1"),
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0x7f, 0, 0, 1]
        );
    }

    #[test]
    fn test_encode_v4_broadcast() {
        assert_eq!(
            encode_v4("255.255.255.255"),
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn test_encode_v4_invalid() {
        assert_eq!(encode_v4("not.an.ip"), NULLED);
        assert_eq!(encode_v4("256.1.1.1"), NULLED);
        assert_eq!(encode_v4("1.2.3"), NULLED);
        assert_eq!(encode_v4("1.2.3.4.5"), NULLED);
        assert_eq!(encode_v4("01.2.3.4"), NULLED);
        assert_eq!(encode_v4(""), NULLED);
        assert_eq!(encode_v4("::1"), NULLED);
    }

    #[test]
    fn test_encode_v6_loopback() {
        let mut expected = [0u8; 16];
        expected[15] = 1;
        assert_eq!(encode_v6("::1"), expected);
    }

    #[test]
    fn test_encode_v6_elision_in_the_middle() {
        assert_eq!(
            encode_v6("2001:db8::1"),
            [0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]
        );
    }

    #[test]
    fn test_encode_v6_trailing_elision() {
        assert_eq!(encode_v6("fe80::"), [0xfe, 0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_v6_full_form() {
        assert_eq!(
            encode_v6("1:2:3:4:5:6:7:ffff"),
            [0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0xff, 0xff]
        );
    }

    #[test]
    fn test_encode_v6_uppercase_hex() {
        assert_eq!(encode_v6("2001:DB8::1"), encode_v6("2001:db8::1"));
    }

    #[test]
    fn test_encode_v6_invalid() {
        assert_eq!(encode_v6("not:an:ip"), NULLED);
        assert_eq!(encode_v6("1::2::3"), NULLED);
        assert_eq!(encode_v6("1:2:3:4:5:6:7:8:9"), NULLED);
        assert_eq!(encode_v6("12345::"), NULLED);
        assert_eq!(encode_v6("fe80::1%eth0"), NULLED);
        assert_eq!(encode_v6("127.0.0.1"), NULLED);
    }

    #[test]
    fn test_encode_dispatch() {
        assert_eq!(encode("192.168.1.1"), encode_v4("192.168.1.1"));
        assert_eq!(encode("::1"), encode_v6("::1"));
        assert_eq!(encode("garbage"), NULLED);
        assert_eq!(encode("1.2:3"), NULLED);
    }

    #[test]
    fn test_try_encode_errors() {
        assert_eq!(try_encode_v4("a.b"), Err(AddressError::InvalidV4("a.b".to_string())));
        assert_eq!(try_encode_v6("a:z"), Err(AddressError::InvalidV6("a:z".to_string())));
        assert_eq!(try_encode("garbage"), Err(AddressError::Unrecognized("garbage".to_string())));
        assert_eq!(try_encode("not.an.ip"), Err(AddressError::InvalidV4("not.an.ip".to_string())));
    }

    #[test]
    fn test_try_encode_distinguishes_unspecified_from_failure() {
        assert_eq!(try_encode("::"), Ok(NULLED));
        assert!(try_encode("::g").is_err());
    }

    #[test]
    fn test_encode_ip_matches_text_encoding() {
        assert_eq!(encode_ip(&IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))), encode("10.0.0.1"));
        assert_eq!(encode_ip(&IpAddr::V6(Ipv6Addr::LOCALHOST)), encode("::1"));
    }
}
