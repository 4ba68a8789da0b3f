//! Byte encoder - renders a byte stream as Rust `u8` literals
//!
//! Each read from the source becomes one output line:
//!
//! ```text
//!         0x89, 0x50, 0x4e, 0x47,
//! ```
//!
//! Only a small working buffer and one line are held in memory, so sources
//! of any size can be streamed.

use std::io::{self, Read, Write};

use crate::error::EncodeError;

/// Bytes requested per read
pub const CHUNK_SIZE: usize = 16;

/// Indentation of every data line in the generated module
pub const LINE_INDENT: &str = "        ";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Width of one rendered token plus its separator: `0xhh, `
const TOKEN_WIDTH: usize = 6;

/// Byte counts from one [`encode_bytes`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Bytes consumed from the source
    pub bytes_read: usize,
    /// Bytes of literal text produced
    pub bytes_written: usize,
}

/// Stream `input` to completion, writing one literal line per read
///
/// Interrupted reads are retried. The first other read or write error is
/// returned; bytes already written stay written.
pub fn encode_bytes<R, W>(out: &mut W, input: &mut R) -> Result<EncodeStats, EncodeError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = [0u8; CHUNK_SIZE];
    let mut line = Vec::with_capacity(LINE_INDENT.len() + CHUNK_SIZE * TOKEN_WIDTH);
    let mut stats = EncodeStats::default();

    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => return Ok(stats),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(EncodeError::Read(e)),
        };

        line.clear();
        line.extend_from_slice(LINE_INDENT.as_bytes());
        for (i, &byte) in buf[..n].iter().enumerate() {
            if i > 0 {
                line.push(b' ');
            }
            push_token(&mut line, byte);
        }
        line.push(b'\n');

        out.write_all(&line).map_err(EncodeError::Write)?;
        stats.bytes_read += n;
        stats.bytes_written += line.len();
    }
}

fn push_token(line: &mut Vec<u8>, byte: u8) {
    line.extend_from_slice(&[
        b'0',
        b'x',
        HEX_DIGITS[usize::from(byte >> 4)],
        HEX_DIGITS[usize::from(byte & 0x0f)],
        b',',
    ]);
}
