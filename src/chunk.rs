use crate::error::{Error, Result};
use core::convert::TryInto;
use core::fmt;

/// Four byte identifier of a RIFF chunk
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChunkTag {
    /// `RIFF` container header
    Riff,
    /// `WAVE` form type following the RIFF header
    Wave,
    /// `fmt ` chunk
    Fmt,
    /// `data` chunk
    Data,
    /// Any other chunk, e.g. `fact`, `PEAK` or `LIST`
    Unknown([u8; 4]),
}

impl ChunkTag {
    /// Tags are compared as big-endian byte strings
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        match &bytes {
            b"RIFF" => ChunkTag::Riff,
            b"WAVE" => ChunkTag::Wave,
            b"fmt " => ChunkTag::Fmt,
            b"data" => ChunkTag::Data,
            _ => ChunkTag::Unknown(bytes),
        }
    }

    /// Raw identifier bytes
    pub fn to_bytes(self) -> [u8; 4] {
        match self {
            ChunkTag::Riff => *b"RIFF",
            ChunkTag::Wave => *b"WAVE",
            ChunkTag::Fmt => *b"fmt ",
            ChunkTag::Data => *b"data",
            ChunkTag::Unknown(bytes) => bytes,
        }
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.to_bytes() {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

/// Tag and little-endian size that precede every chunk body
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ChunkHeader {
    /// chunk identifier
    pub tag: ChunkTag,
    /// declared body size in bytes, excluding any pad byte
    pub size: u32,
}

/// Forward-only cursor over the bytes of a RIFF stream
pub struct ChunkReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ChunkReader<'a> {
    /// Create a reader positioned at the start of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// `true` once every byte has been consumed
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Take up to `len` bytes, fewer if the stream ends first
    pub fn take(&mut self, len: usize) -> &'a [u8] {
        let end = self.pos + len.min(self.remaining());
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        slice
    }

    /// Take exactly `len` bytes or fail with `CantParseChunk(tag)`
    pub fn take_exact(&mut self, len: usize, tag: ChunkTag) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(Error::CantParseChunk(tag));
        }
        Ok(self.take(len))
    }

    /// Skip up to `len` bytes
    pub fn skip(&mut self, len: usize) {
        self.take(len);
    }

    /// Read a four byte tag
    pub fn read_tag(&mut self, context: ChunkTag) -> Result<ChunkTag> {
        let bytes: [u8; 4] = self
            .take_exact(4, context)?
            .try_into()
            .map_err(|_| Error::CantParseChunk(context))?;
        Ok(ChunkTag::from_bytes(bytes))
    }

    /// Read a little-endian `u32`
    pub fn read_u32(&mut self, context: ChunkTag) -> Result<u32> {
        self.take_exact(4, context)?
            .try_into()
            .map_err(|_| Error::CantParseChunk(context))
            .map(u32::from_le_bytes)
    }

    /// Read the next chunk header, or `None` when the stream ends cleanly
    /// on a chunk boundary
    pub fn next_header(&mut self) -> Result<Option<ChunkHeader>> {
        if self.is_empty() {
            return Ok(None);
        }

        let tag = self.read_tag(ChunkTag::Unknown(*b"????"))?;
        let size = self.read_u32(tag)?;

        Ok(Some(ChunkHeader { tag, size }))
    }

    /// Skip the zero pad byte that follows an odd-sized chunk.
    ///
    /// Writers that omit the pad byte leave the next header in its place,
    /// so anything but a zero byte is left for the next read.
    pub fn skip_padding(&mut self, size: u32) {
        if size % 2 == 1 && self.bytes.get(self.pos) == Some(&0) {
            self.skip(1);
        }
    }
}
