//! # proto-wire
//!
//! Fast, spec-faithful Protocol Buffers wire-format codec.
//!
//! This crate implements the binary wire format itself — varint and tag
//! encoding, length-delimited framing, field-presence rules, unknown-field
//! skipping — with bit-exact compatibility with every standard protobuf
//! implementation. It does not compile schemas and it does not speak any
//! RPC protocol; it is the layer those things sit on.
//!
//! ## Layers
//! - [`wire`]: varints, tags, and the [`wire::Writer`]/[`wire::Reader`]
//!   pair — everything needed to put typed values on the wire by hand
//! - [`message`]: the [`message::Message`] trait for whole message types,
//!   with the shared decode loop, verification, and extension registry
//! - [`config`], [`utils`]: decode limits, logging, and metrics
//!
//! ## Example
//! ```rust
//! use proto_wire::wire::{Reader, Writer};
//!
//! # fn main() -> proto_wire::Result<()> {
//! let mut writer = Writer::new();
//! writer.string_field(1, "uatom");
//! writer.string_field(2, "1000");
//! let bytes = writer.into_bytes();
//!
//! let mut reader = Reader::new(&bytes);
//! while reader.has_more() {
//!     let tag = reader.read_tag()?;
//!     match tag.field_number {
//!         1 => assert_eq!(reader.read_string()?, "uatom"),
//!         2 => assert_eq!(reader.read_string()?, "1000"),
//!         _ => reader.skip_field(tag.wire_type)?,
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure model
//! Malformed input fails synchronously and abandons the whole in-progress
//! message; there is no partial decode. Unknown field numbers are never an
//! error — they are skipped by wire type, which is what lets old readers
//! accept data from newer schemas.

#![warn(missing_debug_implementations)]
#![warn(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod error;
pub mod message;
pub mod utils;
pub mod wire;

pub use config::CodecConfig;
pub use error::{Result, WireError};
pub use message::{Any, ExtensionDescriptor, ExtensionRegistry, Message, ValidationError};
pub use wire::{Reader, Tag, WireType, Writer};
