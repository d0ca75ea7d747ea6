// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A table-driven CRC-32 implementation (reflected polynomial `0xEDB88320`, as used by ZIP and gzip).

/// The reversed representation of the CRC-32 polynomial.
pub const POLYNOMIAL: u32 = 0xEDB88320;

/// The lookup table, computed once at compile time and shared read-only for the lifetime of the process.
static TABLE: [u32; 256] = build_table();

/// Builds the 256-entry lookup table where entry `i` is the result of eight shift/XOR steps seeded with `i`.
pub const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;

    while i < 256 {
        let mut c = i as u32;
        let mut j = 0;

        while j < 8 {
            c = if c & 1 == 1 { POLYNOMIAL ^ (c >> 1) } else { c >> 1 };
            j += 1;
        }

        table[i] = c;
        i += 1;
    }

    table
}

/// Computes the CRC-32 of the provided bytes.
pub fn crc32(bytes: &[u8]) -> u32 {
    let mut hasher = Crc32::new();
    hasher.update(bytes);
    hasher.finalize()
}

/// An incremental CRC-32 hasher.
///
/// Feeding input in several chunks yields the same value as a single call to [`crc32()`] over the concatenation.
#[derive(Clone, Copy, Debug)]
pub struct Crc32 {
    state: u32,
}

impl Crc32 {
    pub fn new() -> Self {
        Self { state: 0xFFFFFFFF }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = TABLE[((self.state ^ byte as u32) & 0xFF) as usize] ^ (self.state >> 8);
        }
    }

    pub fn finalize(self) -> u32 {
        !self.state
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}
