// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

#![allow(dead_code)]

use std::io::{Cursor, Read};

use store_zip::ZipArchiveBuilder;

pub const FILE_LIST: &[(&str, &str)] = &[
    ("policies/url-filtering.yaml", "rules:\n  - name: block-gambling\n    action: BLOCK\n    categories: [GAMBLING]\n"),
    ("policies/firewall.json", "{\n  \"rules\": [\n    {\"name\": \"allow-dns\", \"port\": 53, \"action\": \"ALLOW\"}\n  ]\n}\n"),
    ("sdwan/site-a.cfg", "hostname site-a\ninterface ge0/0\n  ip address 10.0.0.1/24\n"),
    ("sdwan/empty.cfg", ""),
    ("README.md", "# Generated configuration\n\nN\u{e4}me: Z\u{fc}rich \u{2014} \u{1F6E1}\n"),
];

pub fn compress_to_mem(files: &[(&str, &str)]) -> Vec<u8> {
    let mut builder = ZipArchiveBuilder::new();

    for (name, content) in files {
        builder.add(*name, *content).unwrap();
    }

    builder.build().unwrap()
}

pub fn check_decompress_mem(zip_data: Vec<u8>, files: &[(&str, &str)]) {
    let mut zip = zip::ZipArchive::new(Cursor::new(zip_data)).unwrap();
    assert_eq!(zip.len(), files.len());

    for (idx, (fname, expected)) in files.iter().enumerate() {
        let mut entry = zip.by_index(idx).unwrap();
        assert_eq!(entry.name(), *fname, "expect entry {idx} to keep its insertion position");
        assert_eq!(entry.compression(), zip::CompressionMethod::Stored);
        assert_eq!(entry.size(), expected.len() as u64);
        assert_eq!(entry.compressed_size(), expected.len() as u64);
        assert_eq!(entry.crc32(), crc32fast::hash(expected.as_bytes()));

        let mut output = String::new();
        entry.read_to_string(&mut output).unwrap();
        assert_eq!(output, *expected, "for {fname}, expect zip data to match input data");
    }
}
