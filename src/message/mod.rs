//! # Message Layer
//!
//! Ties typed structs to the wire format.
//!
//! This module provides the [`Message`] trait with its shared decode loop,
//! typed pre-encode verification, the extension registry, and the one
//! built-in message type (`google.protobuf.Any`).
//!
//! ## Components
//! - **Codec**: The `Message` trait and encode/decode entry points
//! - **Verify**: Typed validation errors for pre-encode checks
//! - **Any**: Opaque nested messages carried with their type URL
//! - **Extensions**: Typed descriptors for extension field numbers

pub mod any;
pub mod codec;
pub mod extensions;
pub mod verify;

pub use any::Any;
pub use codec::Message;
pub use extensions::{ExtensionDescriptor, ExtensionRegistry};
pub use verify::{ValidationError, ValidationErrorKind};
