// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which hands finished archives to an [`AsyncWrite`] implementer.
//!
//! # Example
//! ```
//! # use store_zip::write::ZipArchiveBuilder;
//! # use store_zip::error::ZipError;
//! # use futures_lite::io::Cursor;
//! #
//! # async fn run() -> Result<(), ZipError> {
//! let mut builder = ZipArchiveBuilder::new();
//! builder.add("foo.txt", "This is an example file.")?;
//!
//! let mut output = Cursor::new(Vec::new());
//! let written = builder.write_to(&mut output).await?;
//!
//! assert_eq!(written, output.into_inner().len() as u64);
//! #   Ok(())
//! # }
//! # futures_lite::future::block_on(run()).unwrap();
//! ```

use crate::error::Result;
use crate::write::ZipArchiveBuilder;

use futures_lite::io::{AsyncWrite, AsyncWriteExt};

/// Writes a complete archive to the given writer, flushing it afterwards.
///
/// Returns the number of bytes written.
#[tracing::instrument(skip_all, fields(length = archive.len()))]
pub async fn write_to<W: AsyncWrite + Unpin>(mut writer: W, archive: &[u8]) -> Result<u64> {
    writer.write_all(archive).await?;
    writer.flush().await?;

    Ok(archive.len() as u64)
}

impl ZipArchiveBuilder {
    /// Builds this archive and writes it to the given writer.
    ///
    /// Nothing is written if the build fails.
    pub async fn write_to<W: AsyncWrite + Unpin>(&self, writer: W) -> Result<u64> {
        let archive = self.build()?;
        write_to(writer, &archive).await
    }
}
