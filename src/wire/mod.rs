//! # Wire Format Core
//!
//! Low-level encoding primitives for the Protocol Buffers binary wire format.
//!
//! This module provides the foundation for the codec: varints, wire keys,
//! and the bounded writer/reader pair every message passes through.
//!
//! ## Components
//! - **Varint**: Base-128 integers and zig-zag signed mapping
//! - **Types**: Wire types, tags, and field-number rules
//! - **Writer**: Append-only encoder with fork/ldelim nested framing
//! - **Reader**: Bounded, forward-only decode cursor
//!
//! ## Wire Format
//! ```text
//! [Key(varint)] [Payload] [Key(varint)] [Payload] ...
//! Key = (field_number << 3) | wire_type
//! ```
//!
//! ## Security
//! - Length prefixes are validated before any allocation
//! - Nested-message depth is bounded (prevents stack exhaustion)
//! - Maximum input size is enforced up front (prevents memory exhaustion)

pub mod reader;
pub mod types;
pub mod varint;
pub mod writer;

pub use reader::Reader;
pub use types::{Tag, WireType, MAX_FIELD_NUMBER};
pub use writer::Writer;
