//! Writes archive entries into a ZIP file using `async_zip`, driven by a
//! single-threaded tokio runtime so it can be used from synchronous code.

use std::path::Path;

use async_zip::tokio::write::ZipFileWriter;
use async_zip::{Compression, ZipEntryBuilder};
use clap::ValueEnum;
use dcmdeid::anonymize::ArchiveWriter;
use tokio::io::AsyncWriteExt;

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum ZipCompressionMethod {
  Stored,
  Deflate,
}

impl ZipCompressionMethod {
  pub fn to_async_zip_compression(self) -> Compression {
    match self {
      Self::Stored => Compression::Stored,
      Self::Deflate => Compression::Deflate,
    }
  }
}

impl core::fmt::Display for ZipCompressionMethod {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    match self {
      Self::Stored => write!(f, "stored"),
      Self::Deflate => write!(f, "deflate"),
    }
  }
}

pub struct ZipArchiveWriter {
  runtime: tokio::runtime::Runtime,
  zip_file_writer: ZipFileWriter<tokio::fs::File>,
  compression: Compression,
}

impl ZipArchiveWriter {
  /// Creates a new ZIP file, replacing any existing file at the path.
  ///
  pub fn create(
    path: &Path,
    compression_method: ZipCompressionMethod,
  ) -> std::io::Result<Self> {
    let runtime = tokio::runtime::Builder::new_current_thread()
      .enable_all()
      .build()?;

    let file = runtime.block_on(tokio::fs::File::create(path))?;

    Ok(Self {
      runtime,
      zip_file_writer: ZipFileWriter::with_tokio(file),
      compression: compression_method.to_async_zip_compression(),
    })
  }

  /// Writes the ZIP central directory and flushes the file. Entries added
  /// without calling this are not readable.
  ///
  pub fn finish(self) -> std::io::Result<()> {
    let Self {
      runtime,
      zip_file_writer,
      ..
    } = self;

    runtime.block_on(async move {
      let mut file = zip_file_writer
        .close()
        .await
        .map_err(std::io::Error::other)?
        .into_inner();

      file.flush().await?;
      file.sync_all().await
    })
  }
}

impl ArchiveWriter for ZipArchiveWriter {
  fn add_entry(&mut self, name: &str, data: &[u8]) -> std::io::Result<()> {
    let builder = ZipEntryBuilder::new(name.into(), self.compression);

    self
      .runtime
      .block_on(self.zip_file_writer.write_entry_whole(builder, data))
      .map_err(std::io::Error::other)
  }
}
