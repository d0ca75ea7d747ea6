// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, Zip64ErrorCase, ZipError};
use crate::spec::consts::{NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE};

/// Encodes a u16 with little endianness.
pub fn u16_le(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Encodes a u32 with little endianness.
pub fn u32_le(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Returns the UTF-8 encoding of a string slice.
///
/// `str` is guaranteed to hold valid UTF-8 so this covers the full range of codepoints, including those which
/// require four-byte sequences.
pub fn utf8(text: &str) -> &[u8] {
    text.as_bytes()
}

/// Narrows an entry count into the 16-bit field used by the end of central directory record.
pub(crate) fn checked_entry_count(count: usize) -> Result<u16> {
    if count > NON_ZIP64_MAX_NUM_FILES as usize {
        return Err(ZipError::Zip64Needed(Zip64ErrorCase::TooManyFiles));
    }

    Ok(count as u16)
}

/// Narrows a size or offset into a 32-bit field.
pub(crate) fn checked_u32(value: u64) -> Result<u32> {
    if value > NON_ZIP64_MAX_SIZE as u64 {
        return Err(ZipError::Zip64Needed(Zip64ErrorCase::LargeFile));
    }

    Ok(value as u32)
}

/// Narrows a filename length into the 16-bit length field.
pub(crate) fn checked_filename_length(length: usize) -> Result<u16> {
    u16::try_from(length).map_err(|_| ZipError::FilenameTooLong(length))
}
