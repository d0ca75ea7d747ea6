// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A set of [`tokio`]-specific sinks.
//!
//! The [`crate::sink`] implementation operates over `futures-lite`'s IO traits. The functions within this module
//! internally convert a [`tokio`] writer via the compatibility layer provided by [`tokio_util`].

use crate::error::Result;
use crate::write::ZipArchiveBuilder;

#[cfg(feature = "tokio-fs")]
use std::path::{Path, PathBuf};

use ::tokio::io::AsyncWrite;
use tokio_util::compat::TokioAsyncWriteCompatExt;

/// Builds the archive and writes it to a [`tokio`] writer.
pub async fn write_to<W: AsyncWrite + Unpin>(builder: &ZipArchiveBuilder, writer: W) -> Result<u64> {
    builder.write_to(writer.compat_write()).await
}

/// Builds the archive and saves it within `dir`, under the configured archive name.
///
/// An existing file of the same name is overwritten. Returns the path of the written file.
#[cfg(feature = "tokio-fs")]
#[tracing::instrument(skip(builder, dir), fields(name = builder.options().name()))]
pub async fn save(builder: &ZipArchiveBuilder, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = dir.as_ref().join(builder.options().name());
    let file = ::tokio::fs::File::create(&path).await?;

    let written = write_to(builder, file).await?;
    tracing::debug!(path = %path.display(), written, "archive saved");

    Ok(path)
}
