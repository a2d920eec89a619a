//! # Wire Types and Tags
//!
//! A field on the wire is introduced by a single varint key:
//! `(field_number << 3) | wire_type`. The low three bits select how the
//! field's bytes are interpreted (and how an unknown field is skipped);
//! the rest is the schema-assigned field number.
//!
//! Field numbers are valid in `[1, 2^29 - 1]`, with 19000..=19999 reserved
//! by the format itself.

use crate::error::{Result, WireError};

/// Highest assignable field number: 2^29 - 1.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Field numbers reserved by the format for internal use.
pub const RESERVED_FIELD_NUMBERS: std::ops::RangeInclusive<u32> = 19_000..=19_999;

/// How a field's payload is laid out on the wire.
///
/// The deprecated group types (3 and 4) are deliberately absent; tags
/// carrying them fail to parse with [`WireError::InvalidWireType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    /// Base-128 varint payload.
    Varint = 0,
    /// 8 bytes, little-endian.
    Fixed64 = 1,
    /// Varint length prefix followed by that many raw bytes.
    LengthDelimited = 2,
    /// 4 bytes, little-endian.
    Fixed32 = 5,
}

impl WireType {
    /// Decode the low three bits of a wire key.
    pub fn from_raw(raw: u64) -> Result<Self> {
        match raw {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::LengthDelimited),
            5 => Ok(WireType::Fixed32),
            other => Err(WireError::InvalidWireType(other)),
        }
    }
}

/// A decoded wire key: field number plus wire type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub field_number: u32,
    pub wire_type: WireType,
}

impl Tag {
    /// Build a tag, validating the field number.
    pub fn new(field_number: u32, wire_type: WireType) -> Result<Self> {
        validate_field_number(field_number)?;
        Ok(Self {
            field_number,
            wire_type,
        })
    }

    /// Pack into the single-varint wire key.
    #[inline]
    pub fn pack(self) -> u64 {
        (u64::from(self.field_number) << 3) | self.wire_type as u64
    }

    /// Reconstruct a tag from a decoded wire key by shifting and masking.
    pub fn unpack(key: u64) -> Result<Self> {
        let wire_type = WireType::from_raw(key & 0x7)?;
        let field_number = key >> 3;
        if field_number == 0 || field_number > u64::from(MAX_FIELD_NUMBER) {
            return Err(WireError::InvalidFieldNumber(field_number));
        }
        Ok(Self {
            field_number: field_number as u32,
            wire_type,
        })
    }
}

/// Check a field number against the format's bounds and reserved range.
///
/// Writer-side check, used where numbers arrive at runtime (extension
/// registration). Decoders only reject zero and out-of-range numbers —
/// foreign data may legitimately carry any skippable field.
pub fn validate_field_number(field_number: u32) -> Result<()> {
    if field_number == 0
        || field_number > MAX_FIELD_NUMBER
        || RESERVED_FIELD_NUMBERS.contains(&field_number)
    {
        return Err(WireError::InvalidFieldNumber(u64::from(field_number)));
    }
    Ok(())
}
