// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing store-only ZIP archives.
//!
//! # Example
//! ```
//! # use store_zip::write::ZipArchiveBuilder;
//! # use store_zip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut builder = ZipArchiveBuilder::new();
//!
//! builder.add("policies/allow.yaml", "action: allow\n")?;
//! builder.add("README.txt", "Generated policies.")?;
//!
//! let archive: Vec<u8> = builder.build()?;
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub(crate) mod io;
pub(crate) mod record;

use crate::entry::Entry;
use crate::error::{Result, ZipError};
use crate::opts::{ArchiveOptions, DuplicatePolicy};
use crate::spec::consts::{EOCDR_LENGTH, SIGNATURE_LENGTH};
use crate::utils::{checked_entry_count, checked_u32};
use io::offset::OffsetWriter;
use record::EntryRecord;

use std::collections::HashMap;

/// An insertion-ordered collection of entries which can be assembled into a ZIP archive.
///
/// Entries are written in the order they were added, both as local file blocks and within the central directory.
#[derive(Clone, Debug, Default)]
pub struct ZipArchiveBuilder {
    pub(crate) entries: Vec<Entry>,
    index: HashMap<String, usize>,
    pub(crate) options: ArchiveOptions,
}

impl ZipArchiveBuilder {
    /// Constructs a new, empty builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a new, empty builder with the provided options.
    pub fn with_options(options: ArchiveOptions) -> Self {
        Self { entries: Vec::new(), index: HashMap::new(), options }
    }

    /// Adds a new entry of the given filename and content.
    pub fn add(&mut self, filename: impl Into<String>, content: impl Into<String>) -> Result<()> {
        self.add_entry(Entry::new(filename, content))
    }

    /// Adds a new entry, applying the configured [`DuplicatePolicy`] if its filename is already present.
    pub fn add_entry(&mut self, entry: Entry) -> Result<()> {
        if let Some(&position) = self.index.get(entry.filename()) {
            return match self.options.duplicates {
                DuplicatePolicy::Reject => Err(ZipError::DuplicateFilename(entry.filename)),
                DuplicatePolicy::Replace => {
                    tracing::debug!(filename = entry.filename(), "replacing duplicate entry");
                    self.entries[position] = entry;
                    Ok(())
                }
            };
        }

        self.index.insert(entry.filename.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Returns the entries in the order they will be written.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the options this builder was constructed with.
    pub fn options(&self) -> &ArchiveOptions {
        &self.options
    }

    /// Assembles all entries into a complete archive.
    ///
    /// This function does so by:
    /// - computing every entry's record and local header offset
    /// - writing each local file header, filename, and data
    /// - writing each central directory header and filename
    /// - writing the end of central directory record
    #[tracing::instrument(skip(self), fields(entries = self.entries.len()))]
    pub fn build(&self) -> Result<Vec<u8>> {
        let records = layout(&self.entries)?;
        let capacity = records.iter().map(|r| r.local_block_length() + r.central_block_length()).sum::<u64>();

        let mut writer = OffsetWriter::new(Vec::with_capacity(capacity as usize + SIGNATURE_LENGTH + EOCDR_LENGTH));

        for record in &records {
            debug_assert_eq!(writer.offset(), record.local_header_offset as u64);
            record::write_local_file_block(&mut writer, record)?;
        }

        let cd_offset = writer.offset();

        for record in &records {
            tracing::trace!(offset = record.local_header_offset, crc = record.crc32, "writing central directory header");
            record::write_central_directory_block(&mut writer, record)?;
        }

        let cd_size = writer.offset() - cd_offset;
        let eocdr = record::end_of_central_directory(records.len(), cd_size, cd_offset)?;
        record::write_end_of_central_directory(&mut writer, &eocdr)?;

        tracing::debug!(cd_offset, cd_size, length = writer.offset(), "archive assembled");
        Ok(writer.into_inner())
    }
}

/// Computes the record of every entry, including the offset at which its local file header will begin.
///
/// The offset of each entry is the sum of the local block lengths of all entries before it.
#[tracing::instrument(skip(entries), fields(entries = entries.len()))]
pub(crate) fn layout(entries: &[Entry]) -> Result<Vec<EntryRecord<'_>>> {
    checked_entry_count(entries.len())?;

    let mut records = Vec::with_capacity(entries.len());
    let mut offset = 0u64;

    for entry in entries {
        let record = EntryRecord::new(entry, checked_u32(offset)?)?;
        offset += record.local_block_length();

        tracing::trace!(filename = entry.filename(), offset = record.local_header_offset, size = record.size);
        records.push(record);
    }

    // The central directory starts at this offset.
    checked_u32(offset)?;

    Ok(records)
}

/// Builds an archive from an ordered sequence of (filename, content) pairs with default options.
pub fn build_archive<I, E>(entries: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = E>,
    E: Into<Entry>,
{
    let mut builder = ZipArchiveBuilder::new();

    for entry in entries {
        builder.add_entry(entry.into())?;
    }

    builder.build()
}
