//! Versioned binary stream of `(key, aggregate)` records exchanged between
//! the map, combine, and reduce stages.
//!
//! Stream layout: a 4-byte magic, a 1-byte format version, then zero or
//! more records of `key_len: u32 BE`, the key's UTF-8 bytes, and the
//! 16-byte aggregate encoding defined by [`PartialAggregate::to_bytes`].
//! The payload layout lives in one place and is shared by the writer and
//! the reader.

use crate::core::{PartialAggregate, SeqdistError, SeqdistResult, ENCODED_LEN};
use crate::pipeline::AggregateMap;
use std::io::{Read, Write};

pub const WIRE_MAGIC: [u8; 4] = *b"SQDA";
pub const WIRE_VERSION: u8 = 1;

/// Keys longer than this are corrupt input, not data.
const MAX_KEY_LEN: usize = 1 << 20;

pub struct WireWriter<W: Write> {
    writer: W,
}

impl<W: Write> WireWriter<W> {
    /// Start a stream, writing the header immediately.
    pub fn new(mut writer: W) -> SeqdistResult<Self> {
        writer.write_all(&WIRE_MAGIC)?;
        writer.write_all(&[WIRE_VERSION])?;
        Ok(Self { writer })
    }

    pub fn write_record(&mut self, key: &str, value: &PartialAggregate) -> SeqdistResult<()> {
        let key_bytes = key.as_bytes();
        self.writer
            .write_all(&(key_bytes.len() as u32).to_be_bytes())?;
        self.writer.write_all(key_bytes)?;
        self.writer.write_all(&value.to_bytes())?;
        Ok(())
    }

    /// Write a whole aggregate map in sorted key order.
    pub fn write_map(&mut self, map: &AggregateMap) -> SeqdistResult<()> {
        for (key, value) in map.sorted_entries() {
            self.write_record(&key, &value)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> SeqdistResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct WireReader<R: Read> {
    reader: R,
}

impl<R: Read> WireReader<R> {
    /// Open a stream, validating the header.
    pub fn new(mut reader: R) -> SeqdistResult<Self> {
        let mut magic = [0u8; 4];
        if !read_exact_or_eof(&mut reader, &mut magic)? {
            return Err(SeqdistError::Wire("empty stream".to_string()));
        }
        if magic != WIRE_MAGIC {
            return Err(SeqdistError::Wire("bad magic".to_string()));
        }

        let mut version = [0u8; 1];
        if !read_exact_or_eof(&mut reader, &mut version)? {
            return Err(SeqdistError::Wire("truncated header".to_string()));
        }
        if version[0] != WIRE_VERSION {
            return Err(SeqdistError::Wire(format!(
                "unsupported version {}",
                version[0]
            )));
        }

        Ok(Self { reader })
    }

    /// Read the next record, or `None` at a clean end of stream.
    pub fn read_record(&mut self) -> SeqdistResult<Option<(String, PartialAggregate)>> {
        let mut len_bytes = [0u8; 4];
        if !read_exact_or_eof(&mut self.reader, &mut len_bytes)? {
            return Ok(None);
        }

        let key_len = u32::from_be_bytes(len_bytes) as usize;
        if key_len > MAX_KEY_LEN {
            return Err(SeqdistError::Wire(format!(
                "implausible key length {key_len}"
            )));
        }

        let mut key_bytes = vec![0u8; key_len];
        if !read_exact_or_eof(&mut self.reader, &mut key_bytes)? {
            return Err(SeqdistError::Wire("truncated record".to_string()));
        }
        let key = String::from_utf8(key_bytes)
            .map_err(|_| SeqdistError::Wire("key is not UTF-8".to_string()))?;

        let mut value_bytes = [0u8; ENCODED_LEN];
        if !read_exact_or_eof(&mut self.reader, &mut value_bytes)? {
            return Err(SeqdistError::Wire("truncated record".to_string()));
        }

        Ok(Some((key, PartialAggregate::from_bytes(value_bytes))))
    }

    /// Fold every remaining record into `acc`.
    pub fn fold_into(&mut self, acc: &mut AggregateMap) -> SeqdistResult<()> {
        while let Some((key, value)) = self.read_record()? {
            acc.add(&key, value);
        }
        Ok(())
    }
}

/// Fill `buf` completely. `Ok(false)` means a clean end of stream before
/// the first byte; ending mid-buffer is a truncation error.
fn read_exact_or_eof(reader: &mut impl Read, buf: &mut [u8]) -> SeqdistResult<bool> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            if filled == 0 {
                return Ok(false);
            }
            return Err(SeqdistError::Wire("truncated record".to_string()));
        }
        filled += n;
    }
    Ok(true)
}
