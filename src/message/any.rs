//! # google.protobuf.Any
//!
//! The one schema type that is wire-format infrastructure rather than
//! application data: an encoded message carried opaquely next to the type
//! URL naming it. Decoding an `Any` never touches the inner bytes; callers
//! unpack when they know the concrete type.

use crate::error::Result;
use crate::message::codec::Message;
use crate::wire::{Reader, Tag, Writer};

/// A serialized message of arbitrary type, tagged with its type URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Any {
    /// Type URL, e.g. `type.googleapis.com/cosmos.base.v1beta1.Coin`.
    pub type_url: String,
    /// The inner message, already encoded.
    pub value: Vec<u8>,
}

impl Any {
    /// Encode `msg` and wrap it under `type_url`.
    pub fn pack<M: Message>(type_url: impl Into<String>, msg: &M) -> Result<Self> {
        Ok(Self {
            type_url: type_url.into(),
            value: msg.encode_to_bytes()?.to_vec(),
        })
    }

    /// Decode the inner bytes as `M`.
    ///
    /// The caller is responsible for matching `type_url` to `M`; this
    /// method only performs the decode.
    pub fn unpack<M: Message>(&self) -> Result<M> {
        M::decode(&self.value)
    }
}

impl Message for Any {
    const NAME: &'static str = "google.protobuf.Any";

    fn encode_raw(&self, w: &mut Writer) -> Result<()> {
        w.string_field(1, &self.type_url);
        w.bytes_field(2, &self.value);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, r: &mut Reader<'_>) -> Result<bool> {
        match tag.field_number {
            1 => self.type_url = r.read_string()?.to_owned(),
            2 => self.value = r.read_bytes()?.to_vec(),
            _ => return Ok(false),
        }
        Ok(true)
    }
}
