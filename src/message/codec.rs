//! # Message Codec
//!
//! The [`Message`] trait ties a struct to the wire format: how its fields
//! are written, how one incoming field merges into it, and what counts as
//! valid. The decode loop lives here once, shared by every message type:
//! read a tag, dispatch on the field number, and silently skip anything
//! unknown — the format's forward/backward-compatibility contract.
//!
//! Decode failure is fatal to the message being decoded; no partially
//! decoded value escapes.

use bytes::Bytes;
use tracing::trace;

use crate::config::LimitsConfig;
use crate::error::Result;
use crate::message::verify::ValidationError;
use crate::utils::metrics::global_metrics;
use crate::wire::{Reader, Tag, WireType, Writer};

/// A type with a wire representation.
///
/// Implementations provide [`Message::encode_raw`] and
/// [`Message::merge_field`]; everything else has a default built on those
/// two. Scalar fields overwrite on repeat, repeated fields append, and
/// message-typed fields replace — last occurrence wins, as the format
/// prescribes for non-repeated fields.
pub trait Message: Default {
    /// Fully-qualified schema name, used for diagnostics and extension
    /// lookup.
    const NAME: &'static str;

    /// Append this message's fields to `w`, omitting defaults.
    fn encode_raw(&self, w: &mut Writer) -> Result<()>;

    /// Merge one decoded field into `self`.
    ///
    /// Returns `Ok(false)` when the field number is not part of this
    /// message's schema; the caller then skips the payload by wire type.
    fn merge_field(&mut self, tag: Tag, r: &mut Reader<'_>) -> Result<bool>;

    /// Pre-encode verification. Default: always valid.
    fn verify(&self) -> std::result::Result<(), ValidationError> {
        Ok(())
    }

    /// Post-decode check for fields the schema marks required.
    /// Default: nothing is required.
    fn check_required(&self) -> Result<()> {
        Ok(())
    }

    /// Decode fields from `r` until the current boundary.
    fn merge(&mut self, r: &mut Reader<'_>) -> Result<()> {
        while r.has_more() {
            let tag = r.read_tag()?;
            if !self.merge_field(tag, r)? {
                trace!(
                    msg_type = Self::NAME,
                    field_number = tag.field_number,
                    "skipping unknown field"
                );
                global_metrics().unknown_field_skipped();
                r.skip_field(tag.wire_type)?;
            }
        }
        Ok(())
    }

    /// Decode a complete message with default limits.
    ///
    /// An empty buffer is a valid message with every field at its zero
    /// value.
    fn decode(data: &[u8]) -> Result<Self> {
        Self::decode_with_limits(data, &LimitsConfig::default())
    }

    /// Decode a complete message honoring configured limits.
    fn decode_with_limits(data: &[u8], limits: &LimitsConfig) -> Result<Self> {
        let metrics = global_metrics();
        match decode_impl::<Self>(data, limits) {
            Ok(msg) => {
                metrics.message_decoded(data.len() as u64);
                Ok(msg)
            }
            Err(e) => {
                metrics.decode_error();
                Err(e)
            }
        }
    }

    /// Encode to a finished buffer.
    fn encode_to_bytes(&self) -> Result<Bytes> {
        let mut w = Writer::new();
        self.encode_raw(&mut w)?;
        global_metrics().message_encoded(w.len() as u64);
        Ok(w.into_bytes())
    }

    /// Verify, then encode.
    fn encode_checked(&self) -> Result<Bytes> {
        self.verify()?;
        self.encode_to_bytes()
    }

    /// Write this message as a length-delimited field of an enclosing
    /// message, single-pass via fork/ldelim.
    fn encode_field(&self, field_number: u32, w: &mut Writer) -> Result<()> {
        w.tag(field_number, WireType::LengthDelimited);
        w.fork();
        self.encode_raw(w)?;
        w.ldelim()
    }

    /// Decode a nested occurrence of this message, strictly within its own
    /// length prefix.
    fn merge_nested(r: &mut Reader<'_>) -> Result<Self> {
        r.read_nested(|r| {
            let mut msg = Self::default();
            msg.merge(r)?;
            msg.check_required()?;
            Ok(msg)
        })
    }
}

fn decode_impl<M: Message>(data: &[u8], limits: &LimitsConfig) -> Result<M> {
    let mut r = Reader::with_limits(data, limits)?;
    let mut msg = M::default();
    msg.merge(&mut r)?;
    msg.check_required()?;
    Ok(msg)
}
