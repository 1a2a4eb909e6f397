//! # Ticket Ledger Core
//!
//! Pure primitives for the ticket ledger: blocks, digests, canonical
//! encoding, and chain validation.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over a single in-memory chain.
//!
//! ## Key Types
//!
//! - [`Block`] - One sealed unit of history
//! - [`Payload`] - Genesis message or a sequence of records, fixed at construction
//! - [`BlockDigest`] - Blake3 digest over a block's canonical bytes
//! - [`Ledger`] - The append-only chain
//! - [`Record`] - The seam through which domain records enter a digest
//!
//! ## Canonicalization
//!
//! Digests are computed over deterministic CBOR. See [`canonical`] module.

pub mod block;
pub mod canonical;
pub mod digest;
pub mod error;
pub mod ledger;
pub mod validation;

pub use block::{now_millis, Block, Payload, Record};
pub use canonical::{canonical_block_bytes, canonical_value_bytes, digest_of};
pub use digest::{BlockDigest, DIGEST_DOMAIN, GENESIS_LINK};
pub use error::{LedgerError, ValidationError};
pub use ledger::{Ledger, DEFAULT_GENESIS_MESSAGE};
pub use validation::{verify_chain, ValidationPolicy};
