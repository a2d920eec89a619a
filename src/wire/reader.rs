//! # Wire Reader
//!
//! Bounded decode cursor over a caller-owned byte slice.
//!
//! The cursor only ever advances, and never past `end` — which is the
//! buffer end for a top-level message, or the frame boundary derived from a
//! length prefix for a nested one. `bytes` and `string` reads borrow
//! slices of the input buffer; nothing is copied until a message struct
//! takes ownership.
//!
//! Malformed input (truncated buffer, overlong varint, length prefix past
//! the boundary) fails synchronously and abandons the in-progress message.

use tracing::trace;

use crate::config::LimitsConfig;
use crate::error::{Result, WireError};
use crate::wire::types::{Tag, WireType};
use crate::wire::varint::{read_varint, zigzag_decode32, zigzag_decode64};

/// Decode cursor for the binary wire format.
#[derive(Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
    end: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Reader<'a> {
    /// Cursor over `data` with the default recursion limit.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            buf: data,
            pos: 0,
            end: data.len(),
            depth: 0,
            max_depth: crate::config::DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Cursor over `data` honoring configured decode limits.
    ///
    /// Rejects input larger than `limits.max_message_bytes` up front, before
    /// any field is touched.
    pub fn with_limits(data: &'a [u8], limits: &LimitsConfig) -> Result<Self> {
        if data.len() > limits.max_message_bytes {
            return Err(WireError::OversizedMessage(data.len()));
        }
        Ok(Self {
            buf: data,
            pos: 0,
            end: data.len(),
            depth: 0,
            max_depth: limits.max_recursion_depth,
        })
    }

    /// Current read position, in bytes from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left before the current boundary.
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// True while fields remain before the current boundary.
    pub fn has_more(&self) -> bool {
        self.pos < self.end
    }

    /// Consume exactly `count` bytes, borrowing them from the input.
    #[inline]
    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(WireError::BufferUnderrun {
                needed: count,
                available: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + count];
        self.pos += count;
        Ok(slice)
    }

    // ── Varint reads ────────────────────────────────────────────────────

    #[inline]
    pub fn read_varint(&mut self) -> Result<u64> {
        let (value, new_pos) = read_varint(&self.buf[..self.end], self.pos)?;
        self.pos = new_pos;
        Ok(value)
    }

    /// Read one wire key and split it into field number and wire type.
    pub fn read_tag(&mut self) -> Result<Tag> {
        let key = self.read_varint()?;
        Tag::unpack(key)
    }

    #[inline]
    pub fn read_uint64(&mut self) -> Result<u64> {
        self.read_varint()
    }

    #[inline]
    pub fn read_uint32(&mut self) -> Result<u32> {
        Ok(self.read_varint()? as u32)
    }

    #[inline]
    pub fn read_int64(&mut self) -> Result<i64> {
        Ok(self.read_varint()? as i64)
    }

    /// `int32` arrives as a sign-extended 64-bit varint; truncate back.
    #[inline]
    pub fn read_int32(&mut self) -> Result<i32> {
        Ok(self.read_varint()? as i64 as i32)
    }

    #[inline]
    pub fn read_sint32(&mut self) -> Result<i32> {
        Ok(zigzag_decode32(self.read_varint()? as u32))
    }

    #[inline]
    pub fn read_sint64(&mut self) -> Result<i64> {
        Ok(zigzag_decode64(self.read_varint()?))
    }

    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_varint()? != 0)
    }

    // ── Fixed-width reads (little-endian) ───────────────────────────────

    #[inline]
    pub fn read_fixed64(&mut self) -> Result<u64> {
        let bytes = self.take(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(raw))
    }

    #[inline]
    pub fn read_sfixed64(&mut self) -> Result<i64> {
        Ok(self.read_fixed64()? as i64)
    }

    #[inline]
    pub fn read_fixed32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(raw))
    }

    #[inline]
    pub fn read_sfixed32(&mut self) -> Result<i32> {
        Ok(self.read_fixed32()? as i32)
    }

    #[inline]
    pub fn read_double(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_fixed64()?))
    }

    #[inline]
    pub fn read_float(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_fixed32()?))
    }

    // ── Length-delimited reads ──────────────────────────────────────────

    /// Length-prefixed byte run, borrowed from the input buffer.
    pub fn read_bytes(&mut self) -> Result<&'a [u8]> {
        let length = self.read_varint()?;
        if length > self.remaining() as u64 {
            return Err(WireError::LengthOverrun {
                length,
                remaining: self.remaining(),
            });
        }
        self.take(length as usize)
    }

    /// Length-prefixed UTF-8 text, borrowed from the input buffer.
    pub fn read_string(&mut self) -> Result<&'a str> {
        std::str::from_utf8(self.read_bytes()?).map_err(|_| WireError::InvalidUtf8)
    }

    // ── Nested-message framing ──────────────────────────────────────────

    /// Read a length prefix and decode the framed bytes with `f`.
    ///
    /// Within the closure the cursor's boundary is the frame end; reads
    /// past it fail. Bytes the closure leaves unread still belong to the
    /// frame and are stepped over, so the cursor lands exactly on the next
    /// tag of the enclosing message.
    pub fn read_nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let length = self.read_varint()?;
        if length > self.remaining() as u64 {
            return Err(WireError::LengthOverrun {
                length,
                remaining: self.remaining(),
            });
        }
        if self.depth >= self.max_depth {
            return Err(WireError::RecursionLimitExceeded(self.max_depth));
        }
        self.depth += 1;
        let frame_end = self.pos + length as usize;
        let saved_end = self.end;
        self.end = frame_end;

        let result = f(self);

        self.end = saved_end;
        self.depth -= 1;
        let value = result?;
        self.pos = frame_end;
        Ok(value)
    }

    /// Merge one occurrence of a packable repeated field into `out`.
    ///
    /// The format allows either encoding for the same field: a packed
    /// length-delimited run, or one tagged element at a time. Readers must
    /// accept both regardless of how the schema declares the field.
    pub fn merge_packed<T>(
        &mut self,
        wire_type: WireType,
        out: &mut Vec<T>,
        mut read_one: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<()> {
        if wire_type == WireType::LengthDelimited {
            self.read_nested(|r| {
                while r.has_more() {
                    out.push(read_one(r)?);
                }
                Ok(())
            })
        } else {
            out.push(read_one(self)?);
            Ok(())
        }
    }

    // ── Skipping ────────────────────────────────────────────────────────

    /// Step over one field's payload according to its wire type.
    ///
    /// This is the forward-compatibility path: fields added to a schema
    /// after this code was built decode as unknown tags and are skipped,
    /// never errored.
    pub fn skip_field(&mut self, wire_type: WireType) -> Result<()> {
        match wire_type {
            WireType::Varint => {
                self.read_varint()?;
            }
            WireType::Fixed64 => {
                self.take(8)?;
            }
            WireType::LengthDelimited => {
                let length = self.read_varint()?;
                if length > self.remaining() as u64 {
                    return Err(WireError::LengthOverrun {
                        length,
                        remaining: self.remaining(),
                    });
                }
                self.take(length as usize)?;
            }
            WireType::Fixed32 => {
                self.take(4)?;
            }
        }
        trace!(?wire_type, pos = self.pos, "skipped field");
        Ok(())
    }
}
