//! End-to-end generation: patterns in, Rust module out

use std::fs::File;
use std::io::{self, BufWriter, Write};

use chrono::Utc;

use crate::config::{Config, Output};
use crate::error::EmbedError;
use crate::manifest::Manifest;
use crate::render;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Files processed (duplicates counted each time)
    pub files: usize,
    /// Length of the embedded data buffer
    pub bytes: usize,
    /// Where the module was written
    pub destination: Output,
}

/// Embed every file matched by `patterns` and write the module to the
/// configured destination
///
/// The manifest is fully built before the destination is opened, so glob,
/// read and "no files found" errors never leave output behind. A failure
/// while writing may leave a partial file.
pub fn generate<S: AsRef<str>>(config: &Config, patterns: &[S]) -> Result<Summary, EmbedError> {
    config.validate()?;
    let manifest = Manifest::from_patterns(patterns)?;

    let mut out = open_output(&config.output)?;
    generate_to(&mut out, config, &manifest)?;

    let summary = Summary {
        files: manifest.file_count(),
        bytes: manifest.data_len(),
        destination: config.output.clone(),
    };
    log::info!(
        "embedded {} file(s), {} byte(s) into {}",
        summary.files,
        summary.bytes,
        summary.destination
    );
    Ok(summary)
}

/// Render an already built manifest into `out` and flush it
pub fn generate_to<W: Write + ?Sized>(
    out: &mut W,
    config: &Config,
    manifest: &Manifest,
) -> Result<(), EmbedError> {
    render::render(out, config, manifest, Utc::now()).map_err(EmbedError::Write)?;
    out.flush().map_err(EmbedError::Write)
}

fn open_output(output: &Output) -> Result<Box<dyn Write>, EmbedError> {
    match output {
        Output::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        Output::File(path) => {
            let file = File::create(path).map_err(|source| EmbedError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        },
    }
}
