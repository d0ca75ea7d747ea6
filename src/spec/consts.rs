// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub const NON_ZIP64_MAX_SIZE: u32 = 0xFFFFFFFF;
pub const NON_ZIP64_MAX_NUM_FILES: u16 = 0xFFFF;

pub const SIGNATURE_LENGTH: usize = 4;

// Version needed to extract & version made by, both written as 2.0.
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#432
pub const VERSION: u16 = 20;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#435
pub const METHOD_STORED: u16 = 0;

// Bit 11 of the general purpose flag, the filename is encoded as UTF-8.
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#444
pub const FLAG_UTF8: u16 = 0x800;

// Local file header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;
