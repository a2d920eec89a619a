//! # Error Types
//!
//! Comprehensive error handling for the wire-format codec.
//!
//! This module defines all error variants that can occur during encode and
//! decode operations, from low-level varint failures to message-level
//! validation problems.
//!
//! ## Error Categories
//! - **Decode Errors**: Truncated buffers, malformed varints, invalid tags
//! - **Limit Errors**: Oversized messages, recursion depth exceeded
//! - **Validation Errors**: Typed pre-encode verification failures
//! - **Schema Errors**: Required fields missing, invalid field numbers
//!
//! All errors are raised synchronously to the immediate caller; a failed
//! decode discards the whole in-progress message. There is no partial or
//! recoverable decode — corrupt wire data is not retryable without
//! re-fetching the bytes.
//!
//! ## Example Usage
//! ```rust
//! use proto_wire::error::{Result, WireError};
//! use proto_wire::wire::Reader;
//!
//! fn read_block_height(data: &[u8]) -> Result<u64> {
//!     let mut reader = Reader::new(data);
//!     reader.read_uint64()
//! }
//!
//! fn main() {
//!     match read_block_height(&[0x80]) {
//!         Ok(v) => println!("value: {v}"),
//!         Err(WireError::BufferUnderrun { .. }) => println!("truncated input"),
//!         Err(e) => println!("decode failed: {e}"),
//!     }
//! }
//! ```

use thiserror::Error;

use crate::message::verify::ValidationError;

/// Error message constants to reduce allocations in error paths.
/// Static strings are borrowed, avoiding heap allocations for common error cases.
pub mod constants {
    /// Varint decode errors
    pub const ERR_MALFORMED_VARINT: &str = "Varint exceeds 10 bytes (not a valid 64-bit value)";
    pub const ERR_TRUNCATED_VARINT: &str = "Buffer ended inside a varint";

    /// Framing errors
    pub const ERR_LENGTH_PAST_END: &str = "Length prefix points past the end of the buffer";
    pub const ERR_UNBALANCED_LDELIM: &str = "ldelim called without a matching fork";

    /// Tag errors
    pub const ERR_ZERO_FIELD_NUMBER: &str = "Field number 0 is not valid";
    pub const ERR_GROUP_WIRE_TYPE: &str = "Group wire types are not supported";

    /// Limit errors
    pub const ERR_RECURSION_LIMIT: &str = "Nested message depth exceeds the recursion limit";
    pub const ERR_MESSAGE_TOO_LARGE: &str = "Message exceeds the configured size limit";
}

/// WireError is the primary error type for all codec operations.
#[derive(Error, Debug)]
pub enum WireError {
    /// A varint ran to 10 bytes without a terminating byte, so the value
    /// cannot fit in 64 bits.
    #[error("Malformed varint: continuation past 10 bytes")]
    MalformedVarint,

    /// The cursor ran past the end of the buffer (or past the current
    /// nested-message boundary) mid-read.
    #[error("Buffer underrun: needed {needed} bytes, {available} available")]
    BufferUnderrun { needed: usize, available: usize },

    /// A tag carried a wire type the format does not define (or a
    /// deprecated group type, which this codec rejects).
    #[error("Invalid wire type: {0}")]
    InvalidWireType(u64),

    /// Field numbers must be in `[1, 2^29 - 1]` and outside the reserved
    /// range 19000..=19999.
    #[error("Invalid field number: {0}")]
    InvalidFieldNumber(u64),

    /// A `string` field held bytes that are not valid UTF-8.
    #[error("Invalid UTF-8 in string field")]
    InvalidUtf8,

    /// A length prefix claimed more bytes than remain in the enclosing
    /// buffer or message.
    #[error("Length prefix {length} overruns remaining {remaining} bytes")]
    LengthOverrun { length: u64, remaining: usize },

    /// Nested messages exceeded the configured recursion depth.
    #[error("Recursion limit of {0} exceeded")]
    RecursionLimitExceeded(usize),

    /// Input is larger than the configured maximum message size.
    #[error("Message too large: {0} bytes")]
    OversizedMessage(usize),

    /// A field marked `required` by its schema was absent after decode.
    #[error("Required field missing: {0}")]
    RequiredFieldMissing(&'static str),

    /// Pre-encode verification rejected a value.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// `ldelim` was called with no open `fork` frame.
    #[error("Unbalanced fork/ldelim")]
    UnbalancedFork,

    #[error("Extension registry error: {0}")]
    RegistryError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using WireError
pub type Result<T> = std::result::Result<T, WireError>;
