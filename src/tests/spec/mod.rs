// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, GeneralPurposeFlag, LocalFileHeader};
use crate::tests::{read_u16, read_u32};

#[test]
fn general_purpose_flag() {
    assert_eq!(GeneralPurposeFlag { filename_unicode: false }.as_slice(), [0x00, 0x00]);
    assert_eq!(GeneralPurposeFlag { filename_unicode: true }.as_slice(), [0x00, 0x08]);
}

#[test]
fn local_file_header_layout() {
    let header = LocalFileHeader {
        version: 20,
        flags: GeneralPurposeFlag::default(),
        compression: 0,
        mod_time: 0,
        mod_date: 0,
        crc: 0x352441C2,
        compressed_size: 3,
        uncompressed_size: 3,
        file_name_length: 5,
        extra_field_length: 0,
    };
    let bytes = header.as_slice();

    assert_eq!(bytes.len(), 26);
    assert_eq!(read_u16(&bytes, 0), 20);
    assert_eq!(read_u32(&bytes, 10), 0x352441C2);
    assert_eq!(&bytes[10..14], &[0xC2, 0x41, 0x24, 0x35]);
    assert_eq!(read_u32(&bytes, 14), 3);
    assert_eq!(read_u32(&bytes, 18), 3);
    assert_eq!(read_u16(&bytes, 22), 5);
    assert_eq!(read_u16(&bytes, 24), 0);
}

#[test]
fn central_directory_record_layout() {
    let record = CentralDirectoryRecord {
        v_made_by: 20,
        v_needed: 20,
        flags: GeneralPurposeFlag { filename_unicode: true },
        compression: 0,
        mod_time: 0,
        mod_date: 0,
        crc: 0xDEADBEEF,
        compressed_size: 10,
        uncompressed_size: 10,
        file_name_length: 7,
        extra_field_length: 0,
        file_comment_length: 0,
        disk_start: 0,
        inter_attr: 0,
        exter_attr: 0,
        lh_offset: 0x01020304,
    };
    let bytes = record.as_slice();

    assert_eq!(bytes.len(), 42);
    assert_eq!(read_u16(&bytes, 0), 20);
    assert_eq!(read_u16(&bytes, 2), 20);
    assert_eq!(read_u16(&bytes, 4), 0x800);
    assert_eq!(read_u32(&bytes, 12), 0xDEADBEEF);
    assert_eq!(read_u16(&bytes, 24), 7);
    assert_eq!(&bytes[38..42], &[0x04, 0x03, 0x02, 0x01]);
}

#[test]
fn end_of_central_directory_layout() {
    let header = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: 2,
        num_of_entries: 2,
        size_cent_dir: 102,
        cent_dir_offset: 73,
        file_comm_length: 0,
    };
    let bytes = header.as_slice();

    assert_eq!(bytes, [0, 0, 0, 0, 2, 0, 2, 0, 102, 0, 0, 0, 73, 0, 0, 0, 0, 0]);
}
