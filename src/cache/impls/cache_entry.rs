use std::collections::BTreeSet;
use std::io::{Cursor, Read};
use std::time::Duration;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use crate::cache::enums::compression_algorithm::CompressionAlgorithm;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::common::common::duration_to_millis;

pub const ENTRY_MAGIC: &[u8; 4] = b"MGCE";
pub const ENTRY_VERSION: u8 = 1;
const HEADER_LEN: usize = 4 + 1 + 1 + 4;

impl CacheEntry {
    pub fn new(key: &str, payload: Vec<u8>, ttl: Duration, now: i64) -> CacheEntry {
        CacheEntry {
            key: key.to_string(),
            payload,
            created_at: now,
            expires_at: now.saturating_add(duration_to_millis(ttl)),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> CacheEntry
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    pub fn remaining_millis(&self, now: i64) -> i64 {
        (self.expires_at - now).max(0)
    }

    /// Frame layout: magic, version, compression marker, big-endian body length, body.
    pub fn encode(&self, compression: CompressionAlgorithm) -> Result<Vec<u8>, CacheError> {
        let mut body = Vec::with_capacity(self.payload.len() + self.key.len() + 32);
        body.write_i64::<BigEndian>(self.created_at)?;
        body.write_i64::<BigEndian>(self.expires_at)?;
        Self::write_chunk(&mut body, self.key.as_bytes())?;
        body.write_u32::<BigEndian>(Self::chunk_len(self.tags.len())?)?;
        for tag in &self.tags {
            Self::write_chunk(&mut body, tag.as_bytes())?;
        }
        Self::write_chunk(&mut body, &self.payload)?;

        let body = compression.compress(&body)?;
        let mut frame = Vec::with_capacity(HEADER_LEN + body.len());
        frame.extend_from_slice(ENTRY_MAGIC);
        frame.push(ENTRY_VERSION);
        frame.push(compression.as_byte());
        frame.write_u32::<BigEndian>(Self::chunk_len(body.len())?)?;
        frame.extend_from_slice(&body);
        Ok(frame)
    }

    pub fn decode(data: &[u8]) -> Result<CacheEntry, CacheError> {
        if data.len() < HEADER_LEN {
            return Err(CacheError::SerializationError(format!("frame too short ({} bytes)", data.len())));
        }
        if &data[0..4] != ENTRY_MAGIC {
            return Err(CacheError::SerializationError(String::from("bad magic")));
        }
        if data[4] != ENTRY_VERSION {
            return Err(CacheError::SerializationError(format!("unsupported version {}", data[4])));
        }
        let compression = CompressionAlgorithm::from_byte(data[5])?;
        let mut header = Cursor::new(&data[6..HEADER_LEN]);
        let body_len = header.read_u32::<BigEndian>().map_err(Self::truncated)? as usize;
        if data.len() - HEADER_LEN != body_len {
            return Err(CacheError::SerializationError(format!(
                "body length mismatch (header {body_len}, actual {})", data.len() - HEADER_LEN
            )));
        }

        let body = compression.decompress(&data[HEADER_LEN..])?;
        let mut cursor = Cursor::new(body.as_slice());
        let created_at = cursor.read_i64::<BigEndian>().map_err(Self::truncated)?;
        let expires_at = cursor.read_i64::<BigEndian>().map_err(Self::truncated)?;
        let key = Self::read_string(&mut cursor)?;
        let tag_count = cursor.read_u32::<BigEndian>().map_err(Self::truncated)?;
        let mut tags = BTreeSet::new();
        for _ in 0..tag_count {
            tags.insert(Self::read_string(&mut cursor)?);
        }
        let payload = Self::read_chunk(&mut cursor)?;
        if (cursor.position() as usize) != body.len() {
            return Err(CacheError::SerializationError(String::from("trailing bytes after payload")));
        }

        Ok(CacheEntry { key, payload, created_at, expires_at, tags })
    }

    fn chunk_len(len: usize) -> Result<u32, CacheError> {
        u32::try_from(len).map_err(|_| CacheError::SerializationError(format!("chunk of {len} bytes is too large")))
    }

    fn write_chunk(buffer: &mut Vec<u8>, chunk: &[u8]) -> Result<(), CacheError> {
        buffer.write_u32::<BigEndian>(Self::chunk_len(chunk.len())?)?;
        buffer.extend_from_slice(chunk);
        Ok(())
    }

    fn read_chunk(cursor: &mut Cursor<&[u8]>) -> Result<Vec<u8>, CacheError> {
        let len = cursor.read_u32::<BigEndian>().map_err(Self::truncated)? as usize;
        let available = cursor.get_ref().len().saturating_sub(cursor.position() as usize);
        if len > available {
            return Err(CacheError::SerializationError(format!("chunk of {len} bytes exceeds remaining {available}")));
        }
        let mut chunk = vec![0u8; len];
        cursor.read_exact(&mut chunk).map_err(Self::truncated)?;
        Ok(chunk)
    }

    fn read_string(cursor: &mut Cursor<&[u8]>) -> Result<String, CacheError> {
        String::from_utf8(Self::read_chunk(cursor)?)
            .map_err(|e| CacheError::SerializationError(format!("invalid utf-8: {e}")))
    }

    fn truncated(error: std::io::Error) -> CacheError {
        CacheError::SerializationError(format!("truncated frame: {error}"))
    }
}
