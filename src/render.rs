//! Rendering of the generated Rust module
//!
//! The output is one self-contained source unit:
//!
//! 1. a header comment with the generation time
//! 2. `pub mod <package>` containing the file-info, file-handle and
//!    file-system types
//! 3. the manifest static and its data buffer
//!
//! The shape of `open` depends on [`Config::include_http`]: either it
//! returns the concrete handle, or a boxed `HttpFile` trait object and the
//! file system implements `HttpFileSystem`.
//!
//! Item templates use `$P` for the type prefix derived from the var name.

use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::manifest::Manifest;

/// Layout of the generation timestamp, matching `date(1)` in UTC
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S UTC %Y";

const FILE_TYPES: &str = r#"
    /// Metadata describing one embedded file.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct $PFileInfo {
        name: &'static str,
        size: u64,
        mode: u32,
        ts: i64,
    }

    impl $PFileInfo {
        /// Base name of the file.
        pub fn name(&self) -> &'static str {
            self.name
        }

        /// Length of the file in bytes.
        pub fn size(&self) -> u64 {
            self.size
        }

        /// Permission bits; embedded files are readable by everyone.
        pub fn mode(&self) -> u32 {
            self.mode
        }

        /// Modification time of the source file when it was embedded.
        pub fn modified(&self) -> SystemTime {
            let secs = Duration::from_secs(self.ts.unsigned_abs());
            if self.ts < 0 {
                SystemTime::UNIX_EPOCH - secs
            } else {
                SystemTime::UNIX_EPOCH + secs
            }
        }

        /// Always false; directories are not embedded.
        pub fn is_dir(&self) -> bool {
            false
        }
    }

    /// Read handle over one embedded file.
    #[derive(Debug, Clone)]
    pub struct $PFile {
        reader: io::Cursor<&'static [u8]>,
        info: $PFileInfo,
    }

    impl $PFile {
        /// Metadata for this file.
        pub fn stat(&self) -> io::Result<$PFileInfo> {
            Ok(self.info)
        }

        /// Directory listing is not supported.
        pub fn read_dir(&self) -> io::Result<Vec<$PFileInfo>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }

        /// The complete contents of the file.
        pub fn contents(&self) -> &'static [u8] {
            *self.reader.get_ref()
        }
    }

    impl Read for $PFile {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reader.read(buf)
        }
    }

    impl BufRead for $PFile {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            self.reader.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.reader.consume(amt)
        }
    }

    impl Seek for $PFile {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.reader.seek(pos)
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct $PEntry {
        ts: i64,
        offset: usize,
        size: usize,
    }

    /// Read-only file system over the embedded files.
    #[derive(Debug)]
    pub struct $PFs {
        filenames: &'static [&'static str],
        files: &'static [(&'static str, $PEntry)],
        data: &'static [u8],
    }

    impl $PFs {
        /// Names of every embedded file, sorted.
        pub fn filenames(&self) -> &'static [&'static str] {
            self.filenames
        }

        fn lookup(&self, filename: &str) -> io::Result<$PFile> {
            let filename = filename.strip_prefix('/').unwrap_or(filename);
            let index = self
                .files
                .binary_search_by(|(name, _)| name.cmp(&filename))
                .map_err(|_| io::Error::from(io::ErrorKind::NotFound))?;
            let (name, entry) = self.files[index];
            let data: &'static [u8] = self.data;
            Ok($PFile {
                reader: io::Cursor::new(&data[entry.offset..entry.offset + entry.size]),
                info: $PFileInfo {
                    name: name.rsplit('/').next().unwrap_or(name),
                    size: entry.size as u64,
                    mode: 0o777,
                    ts: entry.ts,
                },
            })
        }
"#;

const OPEN_PLAIN: &str = r#"
        /// Opens the named file. A leading `/` is ignored.
        pub fn open(&self, filename: &str) -> io::Result<$PFile> {
            self.lookup(filename)
        }
    }
"#;

const OPEN_HTTP: &str = r#"
        /// Opens the named file. A leading `/` is ignored.
        pub fn open(&self, filename: &str) -> io::Result<Box<dyn HttpFile>> {
            Ok(Box::new(self.lookup(filename)?))
        }
    }

    /// A file as seen by a static file server.
    pub trait HttpFile: BufRead + Seek + Send + Sync {
        /// Base name of the file.
        fn name(&self) -> &str;

        /// Length of the file in bytes.
        fn size(&self) -> u64;

        /// Last modification time.
        fn modified(&self) -> SystemTime;

        /// Whether the handle refers to a directory.
        fn is_dir(&self) -> bool;
    }

    /// A file system a static file server can open request paths against.
    pub trait HttpFileSystem {
        /// Opens the file at `path`.
        fn open(&self, path: &str) -> io::Result<Box<dyn HttpFile>>;
    }

    impl HttpFile for $PFile {
        fn name(&self) -> &str {
            self.info.name()
        }

        fn size(&self) -> u64 {
            self.info.size()
        }

        fn modified(&self) -> SystemTime {
            self.info.modified()
        }

        fn is_dir(&self) -> bool {
            self.info.is_dir()
        }
    }

    impl HttpFileSystem for $PFs {
        fn open(&self, path: &str) -> io::Result<Box<dyn HttpFile>> {
            $PFs::open(self, path)
        }
    }
"#;

/// Write the complete generated module for `manifest`
pub fn render<W: Write + ?Sized>(
    out: &mut W,
    config: &Config,
    manifest: &Manifest,
    generated_at: DateTime<Utc>,
) -> io::Result<()> {
    let prefix = config.type_prefix();

    write_header(out, config, generated_at)?;
    write_template(out, FILE_TYPES, &prefix)?;
    if config.include_http {
        write_template(out, OPEN_HTTP, &prefix)?;
    } else {
        write_template(out, OPEN_PLAIN, &prefix)?;
    }
    write_manifest(out, config, manifest, &prefix)?;
    writeln!(out, "}}")
}

fn write_header<W: Write + ?Sized>(
    out: &mut W,
    config: &Config,
    generated_at: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(out, "// Code generated by embedfiles {}. DO NOT EDIT.", crate::VERSION)?;
    writeln!(out, "// at {}", generated_at.format(TIMESTAMP_FORMAT))?;
    writeln!(out)?;
    writeln!(out, "#[allow(dead_code, unused_imports, non_upper_case_globals, clippy::all)]")?;
    writeln!(out, "pub mod {} {{", config.package)?;
    writeln!(out, "    use std::io::{{self, BufRead, Read, Seek, SeekFrom}};")?;
    writeln!(out, "    use std::time::{{Duration, SystemTime}};")
}

fn write_template<W: Write + ?Sized>(out: &mut W, template: &str, prefix: &str) -> io::Result<()> {
    out.write_all(template.replace("$P", prefix).as_bytes())
}

fn write_manifest<W: Write + ?Sized>(
    out: &mut W,
    config: &Config,
    manifest: &Manifest,
    prefix: &str,
) -> io::Result<()> {
    let visibility = if config.is_exported() { "pub" } else { "pub(crate)" };
    let data_ident = config.data_ident();

    writeln!(out)?;
    writeln!(out, "    {visibility} static {}: {prefix}Fs = {prefix}Fs {{", config.var)?;

    writeln!(out, "        filenames: &[")?;
    for name in manifest.filenames() {
        writeln!(out, "            {name:?},")?;
    }
    writeln!(out, "        ],")?;

    writeln!(out, "        files: &[")?;
    for entry in manifest.entries() {
        writeln!(
            out,
            "            ({:?}, {prefix}Entry {{ ts: {}, offset: {}, size: {} }}),",
            entry.name, entry.timestamp, entry.offset, entry.size
        )?;
    }
    writeln!(out, "        ],")?;
    writeln!(out, "        data: &{data_ident},")?;
    writeln!(out, "    }};")?;

    writeln!(out)?;
    writeln!(out, "    static {data_ident}: [u8; {}] = [", manifest.data_len())?;
    out.write_all(manifest.data_text())?;
    writeln!(out, "    ];")
}
