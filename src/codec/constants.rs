pub const ADDRESS_SIZE: usize = 16;
pub const MAPPED_PREFIX_SIZE: usize = 12;
pub const MAPPED_PREFIX: [u8; MAPPED_PREFIX_SIZE] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

/// Returned by the sentinel encoders when conversion fails. Identical to the encoding of `::`.
pub const NULLED: [u8; ADDRESS_SIZE] = [0u8; ADDRESS_SIZE];
