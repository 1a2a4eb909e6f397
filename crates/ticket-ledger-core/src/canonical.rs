//! Canonical CBOR encoding of blocks, the input to every block digest.
//!
//! This module implements RFC 8949 Core Deterministic Encoding:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - Floats always use the 8-byte form (the ledger itself never emits floats;
//!   timestamps are i64 milliseconds)
//!
//! The same block content yields the same bytes, and thus the same digest,
//! on every platform and in every process.

use ciborium::value::Value;

use crate::block::{Block, Payload, Record};
use crate::digest::BlockDigest;

/// Version tag written into every encoded block.
pub const BLOCK_ENCODING_VERSION: u8 = 0;

/// Block field keys. Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const VERSION: u64 = 0;
    pub const POSITION: u64 = 1;
    pub const CREATED_AT: u64 = 2;
    pub const PAYLOAD: u64 = 3;
    pub const PREVIOUS_DIGEST: u64 = 4;
}

/// Payload field keys and kind tags.
mod payload_keys {
    pub const KIND: u64 = 0;
    pub const BODY: u64 = 1;

    pub const KIND_GENESIS: u64 = 0;
    pub const KIND_RECORDS: u64 = 1;
}

/// Encode a block's content (everything except its own digest).
pub fn canonical_block_bytes<R: Record>(block: &Block<R>) -> Vec<u8> {
    canonical_value_bytes(&block_to_cbor_value(block))
}

/// Compute the digest of a block from its current content.
pub fn digest_of<R: Record>(block: &Block<R>) -> BlockDigest {
    BlockDigest::hash(&canonical_block_bytes(block))
}

/// Encode an arbitrary CBOR value canonically.
pub fn canonical_value_bytes(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_value_to(&mut buf, value);
    buf
}

fn block_to_cbor_value<R: Record>(block: &Block<R>) -> Value {
    let previous = match &block.previous_digest {
        Some(digest) => Value::Bytes(digest.0.to_vec()),
        None => Value::Null,
    };

    Value::Map(vec![
        (
            Value::Integer(keys::VERSION.into()),
            Value::Integer(BLOCK_ENCODING_VERSION.into()),
        ),
        (
            Value::Integer(keys::POSITION.into()),
            Value::Integer(block.position.into()),
        ),
        (
            Value::Integer(keys::CREATED_AT.into()),
            Value::Integer(block.created_at.into()),
        ),
        (
            Value::Integer(keys::PAYLOAD.into()),
            payload_to_cbor_value(&block.payload),
        ),
        (Value::Integer(keys::PREVIOUS_DIGEST.into()), previous),
    ])
}

fn payload_to_cbor_value<R: Record>(payload: &Payload<R>) -> Value {
    let (kind, body) = match payload {
        Payload::Genesis { message } => {
            (payload_keys::KIND_GENESIS, Value::Text(message.clone()))
        }
        Payload::Records(records) => (
            payload_keys::KIND_RECORDS,
            Value::Array(records.iter().map(R::canonical_value).collect()),
        ),
    };

    Value::Map(vec![
        (
            Value::Integer(payload_keys::KIND.into()),
            Value::Integer(kind.into()),
        ),
        (Value::Integer(payload_keys::BODY.into()), body),
    ])
}

fn encode_value_to(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Integer(i) => encode_integer(buf, *i),
        Value::Bytes(b) => {
            encode_uint(buf, 2, b.len() as u64);
            buf.extend_from_slice(b);
        }
        Value::Text(s) => {
            encode_uint(buf, 3, s.len() as u64);
            buf.extend_from_slice(s.as_bytes());
        }
        Value::Array(items) => {
            encode_uint(buf, 4, items.len() as u64);
            for item in items {
                encode_value_to(buf, item);
            }
        }
        Value::Map(entries) => encode_map_canonical(buf, entries),
        Value::Tag(tag, inner) => {
            encode_uint(buf, 6, *tag);
            encode_value_to(buf, inner);
        }
        Value::Bool(b) => buf.push(if *b { 0xf5 } else { 0xf4 }),
        Value::Null => buf.push(0xf6),
        Value::Float(f) => {
            buf.push(0xfb);
            buf.extend_from_slice(&f.to_bits().to_be_bytes());
        }
        // Variants added by later ciborium releases encode as `undefined`.
        _ => buf.push(0xf7),
    }
}

/// Major types 0 and 1.
fn encode_integer(buf: &mut Vec<u8>, i: ciborium::value::Integer) {
    let n: i128 = i.into();
    if n >= 0 {
        encode_uint(buf, 0, n as u64);
    } else {
        // CBOR encodes -1 as 0, -2 as 1, etc.
        encode_uint(buf, 1, (-1 - n) as u64);
    }
}

/// Write a major-type header with the shortest argument encoding.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Major type 5, keys sorted by their encoded bytes.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) {
    let mut encoded: Vec<(Vec<u8>, &Value)> = entries
        .iter()
        .map(|(k, v)| (canonical_value_bytes(k), v))
        .collect();
    encoded.sort_by(|a, b| a.0.cmp(&b.0));

    encode_uint(buf, 5, encoded.len() as u64);
    for (key_bytes, value) in encoded {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::tests::{note, Note};

    #[test]
    fn test_genesis_block_bytes() {
        let block: Block<Note> = Block::genesis("G", 1000);
        let bytes = canonical_block_bytes(&block);

        #[rustfmt::skip]
        let expected = vec![
            0xa5,                   // map(5)
            0x00, 0x00,             // version: 0
            0x01, 0x00,             // position: 0
            0x02, 0x19, 0x03, 0xe8, // created_at: 1000
            0x03, 0xa2,             // payload: map(2)
                0x00, 0x00,         //   kind: genesis
                0x01, 0x61, 0x47,   //   body: "G"
            0x04, 0xf6,             // previous_digest: null
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_record_block_bytes_include_back_link() {
        let prev = BlockDigest::from_bytes([0x11; 32]);
        let block = Block::new(1, 5, Payload::Records(vec![note("a")]), Some(prev));
        let bytes = canonical_block_bytes(&block);

        // payload: map(2) { 0: 1, 1: ["a"] }
        assert_eq!(&bytes[7..15], &[0x03, 0xa2, 0x00, 0x01, 0x01, 0x81, 0x61, b'a']);
        // previous_digest: bytes(32)
        assert_eq!(&bytes[15..18], &[0x04, 0x58, 0x20]);
        assert_eq!(&bytes[18..], &[0x11; 32]);
    }

    #[test]
    fn test_encoding_deterministic() {
        let block = Block::new(7, 1_736_870_400_000, Payload::Records(vec![note("x")]), None);
        assert_eq!(canonical_block_bytes(&block), canonical_block_bytes(&block));
        assert_eq!(digest_of(&block), digest_of(&block.clone()));
    }

    #[test]
    fn test_integer_encoding() {
        let mut buf = Vec::new();

        encode_uint(&mut buf, 0, 23);
        assert_eq!(buf, vec![0x17]);

        buf.clear();
        encode_uint(&mut buf, 0, 24);
        assert_eq!(buf, vec![0x18, 24]);

        buf.clear();
        encode_uint(&mut buf, 0, 256);
        assert_eq!(buf, vec![0x19, 0x01, 0x00]);

        buf.clear();
        encode_uint(&mut buf, 0, 65536);
        assert_eq!(buf, vec![0x1a, 0x00, 0x01, 0x00, 0x00]);

        buf.clear();
        encode_integer(&mut buf, (-1i64).into());
        assert_eq!(buf, vec![0x20]);

        buf.clear();
        encode_integer(&mut buf, (-500i64).into());
        assert_eq!(buf, vec![0x39, 0x01, 0xf3]);
    }

    #[test]
    fn test_map_key_ordering() {
        let entries = vec![
            (Value::Text("movie_name".into()), Value::Null),
            (Value::Text("customer_name".into()), Value::Null),
            (Value::Text("ticket_id".into()), Value::Null),
        ];
        let bytes = canonical_value_bytes(&Value::Map(entries));

        // Shorter encoded keys sort first.
        assert_eq!(bytes[0], 0xa3);
        assert_eq!(bytes[1], 0x69);
        assert_eq!(&bytes[2..11], b"ticket_id");
        assert_eq!(bytes[12], 0x6a);
        assert_eq!(&bytes[13..23], b"movie_name");
        assert_eq!(bytes[24], 0x6d);
        assert_eq!(&bytes[25..38], b"customer_name");
    }

    #[test]
    fn test_map_order_independent() {
        let a = Value::Map(vec![
            (Value::Text("b".into()), Value::Integer(2.into())),
            (Value::Text("a".into()), Value::Integer(1.into())),
        ]);
        let b = Value::Map(vec![
            (Value::Text("a".into()), Value::Integer(1.into())),
            (Value::Text("b".into()), Value::Integer(2.into())),
        ]);
        assert_eq!(canonical_value_bytes(&a), canonical_value_bytes(&b));
    }

    #[test]
    fn test_float_uses_eight_bytes() {
        let bytes = canonical_value_bytes(&Value::Float(1.5));
        assert_eq!(bytes, vec![0xfb, 0x3f, 0xf8, 0, 0, 0, 0, 0, 0]);
    }

    proptest::proptest! {
        #[test]
        fn prop_map_entry_order_is_irrelevant(
            entries in proptest::collection::btree_map("[a-z]{1,8}", proptest::num::i64::ANY, 0..8),
        ) {
            let forward: Vec<(Value, Value)> = entries
                .iter()
                .map(|(k, v)| (Value::Text(k.clone()), Value::Integer((*v).into())))
                .collect();
            let mut reversed = forward.clone();
            reversed.reverse();

            proptest::prop_assert_eq!(
                canonical_value_bytes(&Value::Map(forward)),
                canonical_value_bytes(&Value::Map(reversed))
            );
        }

        #[test]
        fn prop_uint_uses_shortest_form(n in proptest::num::u64::ANY) {
            let mut buf = Vec::new();
            encode_uint(&mut buf, 0, n);
            let expected_len = match n {
                0..=23 => 1,
                24..=0xff => 2,
                0x100..=0xffff => 3,
                0x1_0000..=0xffff_ffff => 5,
                _ => 9,
            };
            proptest::prop_assert_eq!(buf.len(), expected_len);
        }
    }
}
