// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # store_zip
//!
//! A ZIP archive writer which assembles named, in-memory text payloads into a single archive using the Stored
//! (no compression) method.
//!
//! ## Features
//! - A table-driven CRC-32 engine with no external dependencies.
//! - Deterministic output: no timestamps are written, so equal input always produces byte-identical archives.
//! - Archives are readable by any conforming ZIP reader.
//! - Optional `tokio` integration for writing archives to `tokio` writers and the filesystem.
//! - Aims for reasonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ## Limits
//! Zip64 is not written. Archives of more than 65,535 entries, or with any entry, offset, or central directory size
//! above 4 GiB, are rejected with [`ZipError::Zip64Needed`].
//!
//! [`ZipError::Zip64Needed`]: error::ZipError::Zip64Needed

pub mod crc;
pub(crate) mod entry;
pub mod error;
pub(crate) mod opts;
pub mod sink;
pub(crate) mod spec;
pub(crate) mod utils;
pub mod write;

#[cfg(feature = "tokio")]
pub mod tokio;

pub use crate::entry::Entry;
pub use crate::opts::{ArchiveOptions, DuplicatePolicy, DEFAULT_ARCHIVE_NAME};
pub use crate::utils::{u16_le, u32_le, utf8};
pub use crate::write::{build_archive, ZipArchiveBuilder};
