//! Wire-format round-trip tests against known byte sequences.
//!
//! These pin the encoder to the exact bytes any standard protobuf
//! implementation produces, then check the decoder reverses them.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{Coin, MsgSubmitProposal, ProposalVotes, QueryAdminsResponse};
use proto_wire::message::{Any, Message};
use proto_wire::wire::{Reader, WireType, Writer};

#[test]
fn test_coin_known_bytes() {
    let coin = Coin {
        denom: "uatom".to_string(),
        amount: "1000".to_string(),
    };

    let bytes = coin.encode_to_bytes().expect("encode should not fail");
    // tag 1 length-delimited "uatom", tag 2 length-delimited "1000"
    assert_eq!(
        bytes.as_ref(),
        &[0x0A, 0x05, 0x75, 0x61, 0x74, 0x6F, 0x6D, 0x12, 0x04, 0x31, 0x30, 0x30, 0x30]
    );

    let decoded = Coin::decode(&bytes).expect("decode should not fail");
    assert_eq!(decoded, coin);
}

#[test]
fn test_empty_repeated_field_encodes_to_empty_buffer() {
    let response = QueryAdminsResponse { admins: vec![] };
    let bytes = response.encode_to_bytes().unwrap();
    // A zero-length repeated field is indistinguishable from an absent one
    assert!(bytes.is_empty());
}

#[test]
fn test_empty_buffer_decodes_to_empty_vec_not_null() {
    let decoded = QueryAdminsResponse::decode(&[]).unwrap();
    assert_eq!(decoded.admins, Vec::<String>::new());
}

#[test]
fn test_repeated_string_roundtrip() {
    let response = QueryAdminsResponse {
        admins: vec![
            "cosmos1abc".to_string(),
            "cosmos1def".to_string(),
            "cosmos1ghi".to_string(),
        ],
    };
    let bytes = response.encode_to_bytes().unwrap();
    let decoded = QueryAdminsResponse::decode(&bytes).unwrap();
    assert_eq!(decoded, response);
}

#[test]
fn test_nested_any_respects_length_prefix() {
    // The Any's bytes must be consumed strictly within its own frame;
    // the proposer field after it belongs to the outer message.
    let inner = Coin {
        denom: "untrn".to_string(),
        amount: "25".to_string(),
    };
    let msg = MsgSubmitProposal {
        content: Some(Any::pack("type.googleapis.com/cosmos.base.v1beta1.Coin", &inner).unwrap()),
        proposer: "cosmos1proposer".to_string(),
    };

    let bytes = msg.encode_to_bytes().unwrap();
    let decoded = MsgSubmitProposal::decode(&bytes).unwrap();

    assert_eq!(decoded.proposer, "cosmos1proposer");
    let content = decoded.content.expect("content should be present");
    assert_eq!(content.type_url, "type.googleapis.com/cosmos.base.v1beta1.Coin");
    let unpacked: Coin = content.unpack().unwrap();
    assert_eq!(unpacked, inner);
}

#[test]
fn test_absent_message_field_is_none_absent_scalar_is_default() {
    // Presence semantics: scalars decode to zero values, message fields
    // to None — "default" and "not set" only differ for messages.
    let decoded = MsgSubmitProposal::decode(&[]).unwrap();
    assert!(decoded.content.is_none());
    assert_eq!(decoded.proposer, "");
}

#[test]
fn test_all_default_message_encodes_to_empty_buffer() {
    let bytes = Coin::default().encode_to_bytes().unwrap();
    assert!(bytes.is_empty());

    let bytes = MsgSubmitProposal::default().encode_to_bytes().unwrap();
    assert!(bytes.is_empty());

    let bytes = ProposalVotes::default().encode_to_bytes().unwrap();
    assert!(bytes.is_empty());
}

#[test]
fn test_packed_field_roundtrip() {
    let votes = ProposalVotes {
        proposal_id: 12,
        counts: vec![3, 270, 86942],
    };
    let bytes = votes.encode_to_bytes().unwrap();
    // field 1 varint, then field 2 as a single packed run
    assert_eq!(
        bytes.as_ref(),
        &[0x08, 0x0C, 0x12, 0x06, 0x03, 0x8E, 0x02, 0x9E, 0xA7, 0x05]
    );
    assert_eq!(ProposalVotes::decode(&bytes).unwrap(), votes);
}

#[test]
fn test_unpacked_encoding_of_packed_field_accepted() {
    // Same counts written one tagged element at a time; the reader must
    // accept either encoding for the same field
    let mut w = Writer::new();
    w.uint64_field(1, 12);
    for v in [3u64, 270, 86942] {
        w.tag(2, WireType::Varint);
        w.uint64(v);
    }
    let bytes = w.into_bytes();

    let decoded = ProposalVotes::decode(&bytes).unwrap();
    assert_eq!(decoded.proposal_id, 12);
    assert_eq!(decoded.counts, vec![3, 270, 86942]);
}

#[test]
fn test_unknown_fields_from_newer_schema_ignored() {
    // Simulate data produced by a schema that has grown fields 7 and 8
    let mut w = Writer::new();
    w.string_field(1, "uatom");
    w.tag(7, WireType::Varint);
    w.uint64(999);
    w.tag(8, WireType::LengthDelimited);
    w.bytes(b"new feature payload");
    w.string_field(2, "1000");
    let bytes = w.into_bytes();

    let decoded = Coin::decode(&bytes).unwrap();
    assert_eq!(decoded.denom, "uatom");
    assert_eq!(decoded.amount, "1000");
}

#[test]
fn test_unknown_fixed_width_fields_ignored() {
    let mut w = Writer::new();
    w.tag(20, WireType::Fixed64);
    w.fixed64(0xDEAD_BEEF);
    w.tag(21, WireType::Fixed32);
    w.fixed32(0xBEEF);
    w.string_field(1, "stake");
    let bytes = w.into_bytes();

    let decoded = Coin::decode(&bytes).unwrap();
    assert_eq!(decoded.denom, "stake");
}

#[test]
fn test_encoding_is_deterministic() {
    let msg = MsgSubmitProposal {
        content: Some(Any {
            type_url: "type.test/T".to_string(),
            value: vec![1, 2, 3],
        }),
        proposer: "cosmos1p".to_string(),
    };
    let first = msg.encode_to_bytes().unwrap();
    let second = msg.encode_to_bytes().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_doubly_nested_message_bounds() {
    // Any inside Any: each layer framed by its own length prefix
    let coin = Coin {
        denom: "uatom".to_string(),
        amount: "7".to_string(),
    };
    let inner = Any::pack("type.test/Coin", &coin).unwrap();
    let outer = Any::pack("type.test/Any", &inner).unwrap();

    let bytes = outer.encode_to_bytes().unwrap();
    let decoded = Any::decode(&bytes).unwrap();
    let mid: Any = decoded.unpack().unwrap();
    let out: Coin = mid.unpack().unwrap();
    assert_eq!(out, coin);
}

#[test]
fn test_manual_reader_agrees_with_message_decode() {
    // The low-level cursor view of the same bytes
    let coin = Coin {
        denom: "uatom".to_string(),
        amount: "1000".to_string(),
    };
    let bytes = coin.encode_to_bytes().unwrap();

    let mut r = Reader::new(&bytes);
    let tag = r.read_tag().unwrap();
    assert_eq!((tag.field_number, tag.wire_type), (1, WireType::LengthDelimited));
    assert_eq!(r.read_string().unwrap(), "uatom");
    let tag = r.read_tag().unwrap();
    assert_eq!((tag.field_number, tag.wire_type), (2, WireType::LengthDelimited));
    assert_eq!(r.read_string().unwrap(), "1000");
    assert!(!r.has_more());
}
