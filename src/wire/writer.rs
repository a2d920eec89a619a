//! # Wire Writer
//!
//! Append-only encoder over a growable byte buffer.
//!
//! Scalar methods emit a value in its wire representation; `*_field`
//! helpers prepend the tag and omit fields sitting at their default value,
//! matching the format's "don't encode defaults" rule. Nested messages are
//! framed with [`Writer::fork`] / [`Writer::ldelim`]: `fork` marks the spot
//! where a length prefix belongs, the nested content is written, and
//! `ldelim` splices the now-known length in — single-pass encoding despite
//! the prefix coming first on the wire.
//!
//! The writer exclusively owns its buffer for the duration of an encode;
//! [`Writer::into_bytes`] hands the finished buffer to the caller.

use bytes::Bytes;

use crate::error::{Result, WireError};
use crate::wire::types::{Tag, WireType};
use crate::wire::varint::{write_varint, zigzag_encode32, zigzag_encode64, MAX_VARINT_LEN};

/// Encoder for the binary wire format.
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
    forks: Vec<usize>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the output buffer when the caller knows the rough payload size.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            forks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Finish encoding and hand the buffer to the caller.
    ///
    /// Any still-open `fork` frame is a caller bug; the frame marker is
    /// simply dropped and the bytes written since the fork stay unframed.
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.buf)
    }

    // ── Tag / varint primitives ─────────────────────────────────────────

    /// Write a wire key for `field_number` with `wire_type`.
    #[inline]
    pub fn tag(&mut self, field_number: u32, wire_type: WireType) {
        let tag = Tag {
            field_number,
            wire_type,
        };
        write_varint(&mut self.buf, tag.pack());
    }

    #[inline]
    pub fn uint64(&mut self, value: u64) {
        write_varint(&mut self.buf, value);
    }

    #[inline]
    pub fn uint32(&mut self, value: u32) {
        write_varint(&mut self.buf, u64::from(value));
    }

    /// `int64` encodes two's-complement directly; negatives take 10 bytes.
    #[inline]
    pub fn int64(&mut self, value: i64) {
        write_varint(&mut self.buf, value as u64);
    }

    /// `int32` sign-extends to 64 bits first, so negatives take 10 bytes.
    /// Interoperability depends on this: other implementations decode the
    /// field as a 64-bit varint and truncate.
    #[inline]
    pub fn int32(&mut self, value: i32) {
        write_varint(&mut self.buf, i64::from(value) as u64);
    }

    #[inline]
    pub fn sint32(&mut self, value: i32) {
        write_varint(&mut self.buf, u64::from(zigzag_encode32(value)));
    }

    #[inline]
    pub fn sint64(&mut self, value: i64) {
        write_varint(&mut self.buf, zigzag_encode64(value));
    }

    #[inline]
    pub fn bool(&mut self, value: bool) {
        self.buf.push(u8::from(value));
    }

    // ── Fixed-width primitives (little-endian) ──────────────────────────

    #[inline]
    pub fn fixed64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn sfixed64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn fixed32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn sfixed32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn double(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn float(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    // ── Length-delimited primitives ─────────────────────────────────────

    /// Varint length prefix followed by the raw bytes.
    #[inline]
    pub fn bytes(&mut self, value: &[u8]) {
        write_varint(&mut self.buf, value.len() as u64);
        self.buf.extend_from_slice(value);
    }

    /// UTF-8 text as a length-prefixed byte run.
    #[inline]
    pub fn string(&mut self, value: &str) {
        self.bytes(value.as_bytes());
    }

    // ── Nested-message framing ──────────────────────────────────────────

    /// Open a frame whose length prefix is not yet known.
    ///
    /// Everything written until the matching [`Writer::ldelim`] belongs to
    /// the frame. Frames nest.
    pub fn fork(&mut self) {
        self.forks.push(self.buf.len());
    }

    /// Close the innermost frame: compute its length and splice the varint
    /// prefix in front of the framed bytes.
    pub fn ldelim(&mut self) -> Result<()> {
        let start = self.forks.pop().ok_or(WireError::UnbalancedFork)?;
        let length = (self.buf.len() - start) as u64;
        let mut prefix = Vec::with_capacity(MAX_VARINT_LEN);
        write_varint(&mut prefix, length);
        self.buf.splice(start..start, prefix);
        Ok(())
    }

    // ── Field helpers (tag + value, defaults omitted) ───────────────────

    pub fn uint64_field(&mut self, field_number: u32, value: u64) {
        if value != 0 {
            self.tag(field_number, WireType::Varint);
            self.uint64(value);
        }
    }

    pub fn uint32_field(&mut self, field_number: u32, value: u32) {
        if value != 0 {
            self.tag(field_number, WireType::Varint);
            self.uint32(value);
        }
    }

    pub fn int64_field(&mut self, field_number: u32, value: i64) {
        if value != 0 {
            self.tag(field_number, WireType::Varint);
            self.int64(value);
        }
    }

    pub fn int32_field(&mut self, field_number: u32, value: i32) {
        if value != 0 {
            self.tag(field_number, WireType::Varint);
            self.int32(value);
        }
    }

    pub fn sint32_field(&mut self, field_number: u32, value: i32) {
        if value != 0 {
            self.tag(field_number, WireType::Varint);
            self.sint32(value);
        }
    }

    pub fn sint64_field(&mut self, field_number: u32, value: i64) {
        if value != 0 {
            self.tag(field_number, WireType::Varint);
            self.sint64(value);
        }
    }

    pub fn bool_field(&mut self, field_number: u32, value: bool) {
        if value {
            self.tag(field_number, WireType::Varint);
            self.bool(value);
        }
    }

    pub fn fixed64_field(&mut self, field_number: u32, value: u64) {
        if value != 0 {
            self.tag(field_number, WireType::Fixed64);
            self.fixed64(value);
        }
    }

    pub fn sfixed64_field(&mut self, field_number: u32, value: i64) {
        if value != 0 {
            self.tag(field_number, WireType::Fixed64);
            self.sfixed64(value);
        }
    }

    pub fn fixed32_field(&mut self, field_number: u32, value: u32) {
        if value != 0 {
            self.tag(field_number, WireType::Fixed32);
            self.fixed32(value);
        }
    }

    pub fn sfixed32_field(&mut self, field_number: u32, value: i32) {
        if value != 0 {
            self.tag(field_number, WireType::Fixed32);
            self.sfixed32(value);
        }
    }

    pub fn double_field(&mut self, field_number: u32, value: f64) {
        if value != 0.0 {
            self.tag(field_number, WireType::Fixed64);
            self.double(value);
        }
    }

    pub fn float_field(&mut self, field_number: u32, value: f32) {
        if value != 0.0 {
            self.tag(field_number, WireType::Fixed32);
            self.float(value);
        }
    }

    pub fn string_field(&mut self, field_number: u32, value: &str) {
        if !value.is_empty() {
            self.tag(field_number, WireType::LengthDelimited);
            self.string(value);
        }
    }

    pub fn bytes_field(&mut self, field_number: u32, value: &[u8]) {
        if !value.is_empty() {
            self.tag(field_number, WireType::LengthDelimited);
            self.bytes(value);
        }
    }

    /// Repeated scalars as one packed, length-delimited run.
    ///
    /// An empty slice writes nothing; on the wire a zero-length packed run
    /// and an absent field are the same thing.
    pub fn packed_field<T: Copy>(
        &mut self,
        field_number: u32,
        values: &[T],
        mut write: impl FnMut(&mut Self, T),
    ) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        self.tag(field_number, WireType::LengthDelimited);
        self.fork();
        for &value in values {
            write(self, value);
        }
        self.ldelim()
    }
}
