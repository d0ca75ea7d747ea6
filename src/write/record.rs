// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Builders for the three records of a store-only archive.

use crate::crc::crc32;
use crate::entry::Entry;
use crate::error::Result;
use crate::spec::consts::{
    CDH_LENGTH, CDH_SIGNATURE, EOCDR_SIGNATURE, LFH_LENGTH, LFH_SIGNATURE, METHOD_STORED, SIGNATURE_LENGTH, VERSION,
};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, GeneralPurposeFlag, LocalFileHeader};
use crate::utils::{checked_entry_count, checked_filename_length, checked_u32, u32_le, utf8};

use std::io::Write;

/// Everything derived from an [`Entry`] that its local and central records need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EntryRecord<'a> {
    pub(crate) name: &'a [u8],
    pub(crate) data: &'a [u8],
    pub(crate) crc32: u32,
    pub(crate) size: u32,
    pub(crate) name_length: u16,
    pub(crate) flags: GeneralPurposeFlag,
    pub(crate) local_header_offset: u32,
}

impl<'a> EntryRecord<'a> {
    pub(crate) fn new(entry: &'a Entry, local_header_offset: u32) -> Result<Self> {
        let name = utf8(entry.filename());
        let data = utf8(entry.content());

        Ok(Self {
            name,
            data,
            crc32: crc32(data),
            size: checked_u32(data.len() as u64)?,
            name_length: checked_filename_length(name.len())?,
            flags: GeneralPurposeFlag { filename_unicode: !entry.filename().is_ascii() },
            local_header_offset,
        })
    }

    /// The total length of this entry's local file header, filename, and data.
    pub(crate) fn local_block_length(&self) -> u64 {
        (SIGNATURE_LENGTH + LFH_LENGTH + self.name.len() + self.data.len()) as u64
    }

    /// The total length of this entry's central directory header and filename.
    pub(crate) fn central_block_length(&self) -> u64 {
        (SIGNATURE_LENGTH + CDH_LENGTH + self.name.len()) as u64
    }

    pub(crate) fn local_file_header(&self) -> LocalFileHeader {
        LocalFileHeader {
            version: VERSION,
            flags: self.flags,
            compression: METHOD_STORED,
            mod_time: 0,
            mod_date: 0,
            crc: self.crc32,
            compressed_size: self.size,
            uncompressed_size: self.size,
            file_name_length: self.name_length,
            extra_field_length: 0,
        }
    }

    pub(crate) fn central_directory_record(&self) -> CentralDirectoryRecord {
        let lfh = self.local_file_header();

        CentralDirectoryRecord {
            v_made_by: VERSION,
            v_needed: lfh.version,
            flags: lfh.flags,
            compression: lfh.compression,
            mod_time: lfh.mod_time,
            mod_date: lfh.mod_date,
            crc: lfh.crc,
            compressed_size: lfh.compressed_size,
            uncompressed_size: lfh.uncompressed_size,
            file_name_length: lfh.file_name_length,
            extra_field_length: lfh.extra_field_length,
            file_comment_length: 0,
            disk_start: 0,
            inter_attr: 0,
            exter_attr: 0,
            lh_offset: self.local_header_offset,
        }
    }
}

/// Builds the end of central directory record for a single-disk archive without a comment.
pub(crate) fn end_of_central_directory(entries: usize, cd_size: u64, cd_offset: u64) -> Result<EndOfCentralDirectoryHeader> {
    let num_of_entries = checked_entry_count(entries)?;

    Ok(EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: num_of_entries,
        num_of_entries,
        size_cent_dir: checked_u32(cd_size)?,
        cent_dir_offset: checked_u32(cd_offset)?,
        file_comm_length: 0,
    })
}

/// Writes a local file header followed by the entry's filename and data.
pub(crate) fn write_local_file_block<W: Write>(writer: &mut W, record: &EntryRecord<'_>) -> Result<()> {
    writer.write_all(&u32_le(LFH_SIGNATURE))?;
    writer.write_all(&record.local_file_header().as_slice())?;
    writer.write_all(record.name)?;
    writer.write_all(record.data)?;

    Ok(())
}

/// Writes a central directory header followed by the entry's filename.
pub(crate) fn write_central_directory_block<W: Write>(writer: &mut W, record: &EntryRecord<'_>) -> Result<()> {
    writer.write_all(&u32_le(CDH_SIGNATURE))?;
    writer.write_all(&record.central_directory_record().as_slice())?;
    writer.write_all(record.name)?;

    Ok(())
}

pub(crate) fn write_end_of_central_directory<W: Write>(writer: &mut W, header: &EndOfCentralDirectoryHeader) -> Result<()> {
    writer.write_all(&u32_le(EOCDR_SIGNATURE))?;
    writer.write_all(&header.as_slice())?;

    Ok(())
}
