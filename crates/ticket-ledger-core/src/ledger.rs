//! Ledger: an ordered, append-only sequence of blocks.
//!
//! The ledger is created with a sealed genesis block and only ever grows
//! through [`Ledger::append`]. There is one linear history: no rollback,
//! no branches.

use tracing::{debug, warn};

use crate::block::{now_millis, Block, Record};
use crate::digest::BlockDigest;
use crate::error::{LedgerError, ValidationError};
use crate::validation::{verify_chain, ValidationPolicy};

/// The message carried by the genesis block unless configured otherwise.
pub const DEFAULT_GENESIS_MESSAGE: &str = "Genesis Block";

/// A hash-linked chain of blocks carrying records of type `R`.
#[derive(Debug, Clone)]
pub struct Ledger<R> {
    chain: Vec<Block<R>>,
    policy: ValidationPolicy,
}

impl<R: Record> Ledger<R> {
    /// Create a ledger with the default genesis message, stamped now.
    pub fn new() -> Self {
        Self::with_genesis(DEFAULT_GENESIS_MESSAGE, now_millis())
    }

    /// Create a ledger whose genesis block has the given message and time.
    pub fn with_genesis(message: impl Into<String>, created_at: i64) -> Self {
        let mut genesis = Block::genesis(message, created_at);
        let digest = genesis.compute_digest();
        genesis.digest = Some(digest);
        debug!(digest = %digest, "sealed genesis block");

        Self {
            chain: vec![genesis],
            policy: ValidationPolicy::default(),
        }
    }

    /// Rebuild a ledger from blocks produced elsewhere.
    ///
    /// Blocks are taken as-is, without re-sealing; call [`Ledger::verify`]
    /// to check them.
    pub fn from_blocks(blocks: Vec<Block<R>>) -> Result<Self, LedgerError> {
        if blocks.is_empty() {
            return Err(LedgerError::EmptyLedger);
        }
        Ok(Self {
            chain: blocks,
            policy: ValidationPolicy::default(),
        })
    }

    /// Replace the validation policy.
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// The last block.
    pub fn tail(&self) -> Result<&Block<R>, LedgerError> {
        self.chain.last().ok_or(LedgerError::EmptyLedger)
    }

    /// The first block.
    pub fn genesis(&self) -> Result<&Block<R>, LedgerError> {
        self.chain.first().ok_or(LedgerError::EmptyLedger)
    }

    /// Link a candidate block to the tail, seal it, and make it the new tail.
    ///
    /// Position and back-link are overwritten, so callers only provide the
    /// timestamp and payload. Returns the new block's digest.
    pub fn append(&mut self, mut candidate: Block<R>) -> Result<BlockDigest, LedgerError> {
        candidate.previous_digest = self.tail()?.digest;
        candidate.position = self.chain.len() as u64;

        let digest = candidate.compute_digest();
        candidate.digest = Some(digest);

        debug!(
            position = candidate.position,
            records = candidate.records().len(),
            digest = %digest,
            "appended block"
        );
        self.chain.push(candidate);
        Ok(digest)
    }

    /// Check every block, reporting the first broken invariant.
    pub fn verify(&self) -> Result<(), ValidationError> {
        let result = verify_chain(&self.chain, &self.policy);
        if let Err(e) = &result {
            warn!(position = e.position(), reason = %e, "chain validation failed");
        }
        result
    }

    /// Whether every block's digest and back-link check out.
    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always false for ledgers built with [`Ledger::new`].
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// The block at a position.
    pub fn get(&self, position: u64) -> Option<&Block<R>> {
        usize::try_from(position)
            .ok()
            .and_then(|i| self.chain.get(i))
    }

    /// Read-only view of every block, genesis first.
    pub fn blocks(&self) -> &[Block<R>] {
        &self.chain
    }

    /// Consume the ledger, returning its blocks.
    pub fn into_blocks(self) -> Vec<Block<R>> {
        self.chain
    }
}

impl<R: Record> Default for Ledger<R> {
    fn default() -> Self {
        Self::new()
    }
}
