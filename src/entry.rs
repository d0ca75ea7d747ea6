// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// A named text payload to be stored within an archive.
///
/// # Note
/// The filename is written verbatim. It should be a relative path using forward slashes as separators; no further
/// validation of its legality is performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub(crate) filename: String,
    pub(crate) content: String,
}

impl Entry {
    /// Constructs a new entry from a filename and its textual content.
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self { filename: filename.into(), content: content.into() }
    }

    /// Constructs a new entry from raw bytes, each of which must be valid UTF-8.
    pub fn from_raw(filename: Vec<u8>, content: Vec<u8>) -> Result<Self> {
        let filename = String::from_utf8(filename).map_err(|_| ZipError::StringNotUtf8)?;
        let content = String::from_utf8(content).map_err(|_| ZipError::StringNotUtf8)?;

        Ok(Self { filename, content })
    }

    /// Returns the entry's filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the entry's content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl<N: Into<String>, C: Into<String>> From<(N, C)> for Entry {
    fn from((filename, content): (N, C)) -> Self {
        Self::new(filename, content)
    }
}
