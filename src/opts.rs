// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// The file name used by the file sink when none is configured.
pub const DEFAULT_ARCHIVE_NAME: &str = "archive.zip";

/// How an archive builder treats an entry whose filename is already present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Refuse the entry with [`crate::error::ZipError::DuplicateFilename`].
    #[default]
    Reject,
    /// Overwrite the existing entry's content, keeping its original position.
    Replace,
}

/// Options which apply to a whole archive.
#[derive(Clone, Debug)]
pub struct ArchiveOptions {
    pub(crate) duplicates: DuplicatePolicy,
    pub(crate) archive_name: String,
}

impl ArchiveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy applied to duplicate filenames.
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Sets the file name used when saving the archive to a directory.
    pub fn archive_name(mut self, name: impl Into<String>) -> Self {
        self.archive_name = name.into();
        self
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    pub fn name(&self) -> &str {
        &self.archive_name
    }
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self { duplicates: DuplicatePolicy::default(), archive_name: DEFAULT_ARCHIVE_NAME.to_string() }
    }
}
