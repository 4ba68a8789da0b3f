// Code generated by embedfiles 0.1.0. DO NOT EDIT.
// at Fri Jan  2 03:04:05 UTC 2026

#[allow(dead_code, unused_imports, non_upper_case_globals, clippy::all)]
pub mod plain {
    use std::io::{self, BufRead, Read, Seek, SeekFrom};
    use std::time::{Duration, SystemTime};

    /// Metadata describing one embedded file.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AssetsFileInfo {
        name: &'static str,
        size: u64,
        mode: u32,
        ts: i64,
    }

    impl AssetsFileInfo {
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
    pub struct AssetsFile {
        reader: io::Cursor<&'static [u8]>,
        info: AssetsFileInfo,
    }

    impl AssetsFile {
        /// Metadata for this file.
        pub fn stat(&self) -> io::Result<AssetsFileInfo> {
            Ok(self.info)
        }

        /// Directory listing is not supported.
        pub fn read_dir(&self) -> io::Result<Vec<AssetsFileInfo>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }

        /// The complete contents of the file.
        pub fn contents(&self) -> &'static [u8] {
            *self.reader.get_ref()
        }
    }

    impl Read for AssetsFile {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reader.read(buf)
        }
    }

    impl BufRead for AssetsFile {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            self.reader.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.reader.consume(amt)
        }
    }

    impl Seek for AssetsFile {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.reader.seek(pos)
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct AssetsEntry {
        ts: i64,
        offset: usize,
        size: usize,
    }

    /// Read-only file system over the embedded files.
    #[derive(Debug)]
    pub struct AssetsFs {
        filenames: &'static [&'static str],
        files: &'static [(&'static str, AssetsEntry)],
        data: &'static [u8],
    }

    impl AssetsFs {
        /// Names of every embedded file, sorted.
        pub fn filenames(&self) -> &'static [&'static str] {
            self.filenames
        }

        fn lookup(&self, filename: &str) -> io::Result<AssetsFile> {
            let filename = filename.strip_prefix('/').unwrap_or(filename);
            let index = self
                .files
                .binary_search_by(|(name, _)| name.cmp(&filename))
                .map_err(|_| io::Error::from(io::ErrorKind::NotFound))?;
            let (name, entry) = self.files[index];
            let data: &'static [u8] = self.data;
            Ok(AssetsFile {
                reader: io::Cursor::new(&data[entry.offset..entry.offset + entry.size]),
                info: AssetsFileInfo {
                    name: name.rsplit('/').next().unwrap_or(name),
                    size: entry.size as u64,
                    mode: 0o777,
                    ts: entry.ts,
                },
            })
        }

        /// Opens the named file. A leading `/` is ignored.
        pub fn open(&self, filename: &str) -> io::Result<AssetsFile> {
            self.lookup(filename)
        }
    }

    pub static Assets: AssetsFs = AssetsFs {
        filenames: &[
            "a.txt",
            "b.txt",
            "web/index.html",
        ],
        files: &[
            ("a.txt", AssetsEntry { ts: 1700000000, offset: 0, size: 3 }),
            ("b.txt", AssetsEntry { ts: 0, offset: 3, size: 0 }),
            ("web/index.html", AssetsEntry { ts: -86400, offset: 3, size: 18 }),
        ],
        data: &ASSETS_DATA,
    };

    static ASSETS_DATA: [u8; 21] = [
        // a.txt
        0x01, 0x02, 0x03,
        // b.txt
        // web/index.html
        0x3c, 0x68, 0x31, 0x3e, 0x65, 0x6d, 0x62, 0x65, 0x64, 0x64, 0x65, 0x64, 0x3c, 0x2f, 0x68, 0x31,
        0x3e, 0x0a,
    ];
}
