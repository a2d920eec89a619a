//! Shared message types for integration tests.
//!
//! These mirror the kinds of schemas the codec exists to carry: a coin
//! amount, a repeated-field query response, a proposal wrapping an opaque
//! `Any`, a type with required fields, and a packed-scalar vote tally.

#![allow(dead_code)]

use proto_wire::error::{Result, WireError};
use proto_wire::message::{Any, Message, ValidationError};
use proto_wire::wire::{Reader, Tag, WireType, Writer};

/// A denomination and a decimal amount, both strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Message for Coin {
    const NAME: &'static str = "cosmos.base.v1beta1.Coin";

    fn encode_raw(&self, w: &mut Writer) -> Result<()> {
        w.string_field(1, &self.denom);
        w.string_field(2, &self.amount);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, r: &mut Reader<'_>) -> Result<bool> {
        match tag.field_number {
            1 => self.denom = r.read_string()?.to_owned(),
            2 => self.amount = r.read_string()?.to_owned(),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn verify(&self) -> std::result::Result<(), ValidationError> {
        if self.denom.len() > 128 {
            return Err(ValidationError::invalid_length("denom", 128, self.denom.len()));
        }
        if !self.amount.is_empty() && !self.amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::type_mismatch("amount", "decimal string"));
        }
        Ok(())
    }
}

/// Query response carrying a repeated string field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryAdminsResponse {
    pub admins: Vec<String>,
}

impl Message for QueryAdminsResponse {
    const NAME: &'static str = "admin.QueryAdminsResponse";

    fn encode_raw(&self, w: &mut Writer) -> Result<()> {
        for admin in &self.admins {
            w.tag(1, WireType::LengthDelimited);
            w.string(admin);
        }
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, r: &mut Reader<'_>) -> Result<bool> {
        match tag.field_number {
            1 => self.admins.push(r.read_string()?.to_owned()),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Proposal submission wrapping an opaque nested message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgSubmitProposal {
    pub content: Option<Any>,
    pub proposer: String,
}

impl Message for MsgSubmitProposal {
    const NAME: &'static str = "admin.MsgSubmitProposal";

    fn encode_raw(&self, w: &mut Writer) -> Result<()> {
        if let Some(content) = &self.content {
            content.encode_field(1, w)?;
        }
        w.string_field(2, &self.proposer);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, r: &mut Reader<'_>) -> Result<bool> {
        match tag.field_number {
            1 => self.content = Some(Any::merge_nested(r)?),
            2 => self.proposer = r.read_string()?.to_owned(),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// A type whose schema marks both fields required; decode enforces
/// presence, not just defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePart {
    pub name_part: Option<String>,
    pub is_extension: Option<bool>,
}

impl Message for NamePart {
    const NAME: &'static str = "google.protobuf.UninterpretedOption.NamePart";

    fn encode_raw(&self, w: &mut Writer) -> Result<()> {
        if let Some(name_part) = &self.name_part {
            w.tag(1, WireType::LengthDelimited);
            w.string(name_part);
        }
        if let Some(is_extension) = self.is_extension {
            w.tag(2, WireType::Varint);
            w.bool(is_extension);
        }
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, r: &mut Reader<'_>) -> Result<bool> {
        match tag.field_number {
            1 => self.name_part = Some(r.read_string()?.to_owned()),
            2 => self.is_extension = Some(r.read_bool()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn check_required(&self) -> Result<()> {
        if self.name_part.is_none() {
            return Err(WireError::RequiredFieldMissing("name_part"));
        }
        if self.is_extension.is_none() {
            return Err(WireError::RequiredFieldMissing("is_extension"));
        }
        Ok(())
    }
}

/// Vote tally with a packed repeated scalar field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposalVotes {
    pub proposal_id: u64,
    pub counts: Vec<u64>,
}

impl Message for ProposalVotes {
    const NAME: &'static str = "admin.ProposalVotes";

    fn encode_raw(&self, w: &mut Writer) -> Result<()> {
        w.uint64_field(1, self.proposal_id);
        w.packed_field(2, &self.counts, Writer::uint64)?;
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, r: &mut Reader<'_>) -> Result<bool> {
        match tag.field_number {
            1 => self.proposal_id = r.read_uint64()?,
            2 => r.merge_packed(tag.wire_type, &mut self.counts, Reader::read_uint64)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// One field of every scalar kind, for exhaustive round-trip laws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scalars {
    pub u32_f: u32,
    pub u64_f: u64,
    pub i32_f: i32,
    pub i64_f: i64,
    pub s32_f: i32,
    pub s64_f: i64,
    pub bool_f: bool,
    pub fx32_f: u32,
    pub fx64_f: u64,
    pub sfx32_f: i32,
    pub sfx64_f: i64,
    pub float_f: f32,
    pub double_f: f64,
    pub string_f: String,
    pub bytes_f: Vec<u8>,
}

impl Message for Scalars {
    const NAME: &'static str = "test.Scalars";

    fn encode_raw(&self, w: &mut Writer) -> Result<()> {
        w.uint32_field(1, self.u32_f);
        w.uint64_field(2, self.u64_f);
        w.int32_field(3, self.i32_f);
        w.int64_field(4, self.i64_f);
        w.sint32_field(5, self.s32_f);
        w.sint64_field(6, self.s64_f);
        w.bool_field(7, self.bool_f);
        w.fixed32_field(8, self.fx32_f);
        w.fixed64_field(9, self.fx64_f);
        w.sfixed32_field(10, self.sfx32_f);
        w.sfixed64_field(11, self.sfx64_f);
        w.float_field(12, self.float_f);
        w.double_field(13, self.double_f);
        w.string_field(14, &self.string_f);
        w.bytes_field(15, &self.bytes_f);
        Ok(())
    }

    fn merge_field(&mut self, tag: Tag, r: &mut Reader<'_>) -> Result<bool> {
        match tag.field_number {
            1 => self.u32_f = r.read_uint32()?,
            2 => self.u64_f = r.read_uint64()?,
            3 => self.i32_f = r.read_int32()?,
            4 => self.i64_f = r.read_int64()?,
            5 => self.s32_f = r.read_sint32()?,
            6 => self.s64_f = r.read_sint64()?,
            7 => self.bool_f = r.read_bool()?,
            8 => self.fx32_f = r.read_fixed32()?,
            9 => self.fx64_f = r.read_fixed64()?,
            10 => self.sfx32_f = r.read_sfixed32()?,
            11 => self.sfx64_f = r.read_sfixed64()?,
            12 => self.float_f = r.read_float()?,
            13 => self.double_f = r.read_double()?,
            14 => self.string_f = r.read_string()?.to_owned(),
            15 => self.bytes_f = r.read_bytes()?.to_vec(),
            _ => return Ok(false),
        }
        Ok(true)
    }
}
