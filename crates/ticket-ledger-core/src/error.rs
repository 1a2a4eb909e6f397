//! Error types for the ledger core.

use thiserror::Error;

use crate::digest::{link_to_string, BlockDigest};

/// Errors from ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The ledger holds no blocks. Unreachable for ledgers built with
    /// [`Ledger::new`](crate::Ledger::new).
    #[error("ledger has no blocks")]
    EmptyLedger,
}

/// The first invariant a chain was found to break.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("digest mismatch at position {position}: stored {stored}, computed {computed}")]
    DigestMismatch {
        position: u64,
        stored: BlockDigest,
        computed: BlockDigest,
    },

    #[error(
        "link mismatch at position {position}: expected {}, found {}",
        .expected.to_hex(),
        link_to_string(.found.as_ref())
    )]
    LinkMismatch {
        position: u64,
        expected: BlockDigest,
        found: Option<BlockDigest>,
    },

    #[error("block at index {index} claims position {found}")]
    PositionMismatch { index: u64, found: u64 },

    #[error("block at position {position} was never sealed")]
    Unsealed { position: u64 },

    #[error("malformed genesis block: {0}")]
    GenesisMalformed(String),
}

impl ValidationError {
    /// Position of the offending block.
    pub fn position(&self) -> u64 {
        match self {
            ValidationError::DigestMismatch { position, .. }
            | ValidationError::LinkMismatch { position, .. }
            | ValidationError::Unsealed { position } => *position,
            ValidationError::PositionMismatch { index, .. } => *index,
            ValidationError::GenesisMalformed(_) => 0,
        }
    }
}
