//! Manifest construction
//!
//! The manifest records, for every embedded file, where its bytes live in
//! the shared data buffer. Files are appended back to back in the order they
//! were processed, so offsets are contiguous:
//!
//! ```text
//! offset_0 = 0
//! offset_{i+1} = offset_i + size_i
//! data_len = sum(size_i)
//! ```
//!
//! The buffer is kept in its rendered form (byte literal lines) since the
//! only consumer is the renderer.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{self, Path};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::encoder;
use crate::error::{EmbedError, EncodeError};
use crate::expand;

/// Location and metadata of one embedded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Matched path with one leading separator removed
    pub name: String,
    /// Modification time in seconds since the Unix epoch, 0 if unknown
    pub timestamp: i64,
    /// Start of the file's bytes in the data buffer
    pub offset: usize,
    /// Length of the file in bytes
    pub size: usize,
}

impl FileEntry {
    /// One past the last byte of this file in the data buffer
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.size
    }
}

/// The complete set of embedded files for one run
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: BTreeMap<String, FileEntry>,
    filenames: Vec<String>,
    processed: Vec<FileEntry>,
    data_text: Vec<u8>,
    data_len: usize,
}

impl Manifest {
    /// Expand the patterns and embed every match
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, EmbedError> {
        if patterns.is_empty() {
            return Err(EmbedError::NoPatterns);
        }

        let mut builder = ManifestBuilder::new();
        for path in expand::expand_patterns(patterns)? {
            builder.add_path(&path)?;
        }
        builder.finish()
    }

    /// Look up an entry by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FileEntry> {
        self.entries.get(name)
    }

    /// Entries keyed by name, in byte order of the names
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.values()
    }

    /// Number of distinct names
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no files were embedded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every processed name, sorted by byte value (duplicates included)
    #[must_use]
    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    /// Every entry in processing order, including ones later overwritten
    #[must_use]
    pub fn processed(&self) -> &[FileEntry] {
        &self.processed
    }

    /// Number of files processed
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.processed.len()
    }

    /// Length of the data buffer in bytes
    #[must_use]
    pub const fn data_len(&self) -> usize {
        self.data_len
    }

    /// The data buffer rendered as byte literal lines
    #[must_use]
    pub fn data_text(&self) -> &[u8] {
        &self.data_text
    }
}

/// Accumulates files into a [`Manifest`]
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    manifest: Manifest,
}

impl ManifestBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open, timestamp and encode the file at `path`
    pub fn add_path(&mut self, path: &Path) -> Result<&FileEntry, EmbedError> {
        let mut file = File::open(path).map_err(|source| EmbedError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let timestamp = modification_time(&file);
        let name = entry_name(path);

        log::debug!("embedding {name}");
        self.add_reader(&name, timestamp, &mut file).map_err(|source| EmbedError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Encode `reader` to completion and record it under `name`
    ///
    /// One leading path separator is stripped from `name`. A name seen
    /// before is overwritten in the lookup map.
    pub fn add_reader<R: Read + ?Sized>(
        &mut self,
        name: &str,
        timestamp: i64,
        reader: &mut R,
    ) -> Result<&FileEntry, EncodeError> {
        let manifest = &mut self.manifest;

        writeln!(manifest.data_text, "{}// {}", encoder::LINE_INDENT, name.escape_debug())
            .map_err(EncodeError::Write)?;
        let stats = encoder::encode_bytes(&mut manifest.data_text, reader)?;

        let name = name.strip_prefix(path::is_separator).unwrap_or(name);
        let entry = FileEntry {
            name: name.to_string(),
            timestamp,
            offset: manifest.data_len,
            size: stats.bytes_read,
        };
        manifest.data_len += stats.bytes_read;
        manifest.filenames.push(entry.name.clone());
        manifest.entries.insert(entry.name.clone(), entry.clone());
        manifest.processed.push(entry);

        Ok(&manifest.processed[manifest.processed.len() - 1])
    }

    /// Finish the manifest, failing if nothing was added
    pub fn finish(mut self) -> Result<Manifest, EmbedError> {
        if self.manifest.processed.is_empty() {
            return Err(EmbedError::NoFiles);
        }
        self.manifest.filenames.sort_unstable();
        Ok(self.manifest)
    }
}

/// Manifest name for a matched path
///
/// Non-UTF-8 bytes become U+FFFD, so distinct paths can collapse to one name.
fn entry_name(path: &Path) -> Cow<'_, str> {
    if let Some(name) = path.to_str() {
        return Cow::Borrowed(name);
    }
    let name = path.to_string_lossy();
    log::warn!("{} is not valid UTF-8; embedding it as {name:?}", path.display());
    name
}

/// Best-effort modification time of an open file, 0 on failure
fn modification_time(file: &File) -> i64 {
    let Ok(modified) = file.metadata().and_then(|meta| meta.modified()) else {
        return 0;
    };
    unix_seconds(modified)
}

fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_secs()).map_or(i64::MIN, |secs| -secs),
    }
}
