//! Block: one sealed, digest-protected unit of ledger history.
//!
//! A block is built unsealed (no digest) and sealed exactly once, when the
//! [`Ledger`](crate::Ledger) appends it. After that it is never edited.

use ciborium::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::canonical::digest_of;
use crate::digest::{link_to_string, BlockDigest};

/// A domain record carried in a block's payload.
///
/// The ledger treats records as opaque. All it needs is a canonical CBOR
/// value to feed into the block digest. Map keys may be produced in any
/// order; the encoder sorts them.
pub trait Record: Clone + fmt::Debug {
    /// The record's content as a CBOR value.
    fn canonical_value(&self) -> Value;
}

/// What a block carries, fixed when the block is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload<R> {
    /// The descriptive message of the first block.
    Genesis { message: String },

    /// Zero or more domain records, in submission order.
    Records(Vec<R>),
}

impl<R> Payload<R> {
    /// The records, or an empty slice for a genesis payload.
    pub fn records(&self) -> &[R] {
        match self {
            Payload::Genesis { .. } => &[],
            Payload::Records(records) => records,
        }
    }

    /// The genesis message, if this is a genesis payload.
    pub fn genesis_message(&self) -> Option<&str> {
        match self {
            Payload::Genesis { message } => Some(message),
            Payload::Records(_) => None,
        }
    }

    pub fn is_genesis(&self) -> bool {
        matches!(self, Payload::Genesis { .. })
    }
}

/// A block in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block<R> {
    /// Index in the ledger (0 = genesis).
    pub position: u64,

    /// Sealing time (Unix milliseconds).
    pub created_at: i64,

    /// The block content.
    pub payload: Payload<R>,

    /// Digest of the preceding block. `None` is the genesis sentinel,
    /// rendered as `"0"`.
    pub previous_digest: Option<BlockDigest>,

    /// Digest over the four fields above. `None` until sealed.
    pub digest: Option<BlockDigest>,
}

impl<R: Record> Block<R> {
    /// Build an unsealed block from all of its content fields.
    pub fn new(
        position: u64,
        created_at: i64,
        payload: Payload<R>,
        previous_digest: Option<BlockDigest>,
    ) -> Self {
        Self {
            position,
            created_at,
            payload,
            previous_digest,
            digest: None,
        }
    }

    /// Build an unsealed genesis block.
    pub fn genesis(message: impl Into<String>, created_at: i64) -> Self {
        Self::new(
            0,
            created_at,
            Payload::Genesis {
                message: message.into(),
            },
            None,
        )
    }

    /// Build an unsealed record block. Position and back-link are assigned
    /// by [`Ledger::append`](crate::Ledger::append).
    pub fn candidate(created_at: i64, records: Vec<R>) -> Self {
        Self::new(0, created_at, Payload::Records(records), None)
    }

    /// Recompute the digest from the block's current content.
    pub fn compute_digest(&self) -> BlockDigest {
        digest_of(self)
    }

    pub fn is_sealed(&self) -> bool {
        self.digest.is_some()
    }

    pub fn is_genesis(&self) -> bool {
        self.payload.is_genesis()
    }

    pub fn records(&self) -> &[R] {
        self.payload.records()
    }

    /// The back-link as displayed: full hex, or `"0"` for genesis.
    pub fn previous_digest_string(&self) -> String {
        link_to_string(self.previous_digest.as_ref())
    }

    /// The digest as displayed: full hex, or `"None"` if unsealed.
    pub fn digest_string(&self) -> String {
        match &self.digest {
            Some(digest) => digest.to_hex(),
            None => "None".to_string(),
        }
    }
}

/// Current wall-clock time in Unix milliseconds.
pub fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
