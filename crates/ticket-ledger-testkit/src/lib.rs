//! # Ticket Ledger Testkit
//!
//! Testing utilities for the ticket ledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed block inputs whose digests must be identical everywhere
//! - **Generators**: Proptest strategies for tickets and ticket batches
//! - **Fixtures**: A booking system with a deterministic clock
//!
//! ## Golden Vectors
//!
//! ```rust
//! use ticket_ledger_testkit::vectors::verify_all_vectors;
//!
//! for report in verify_all_vectors() {
//!     assert!(report.matches);
//!     println!("{}: {}", report.name, report.digest);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use ticket_ledger_testkit::generators::{booking_from_batches, ticket_batches};
//!
//! proptest! {
//!     #[test]
//!     fn chains_stay_valid(batches in ticket_batches(8, 4)) {
//!         prop_assert!(booking_from_batches(0, &batches).validate());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use ticket_ledger_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! fixture.book("Inception", "T1", "Alice");
//! assert!(fixture.booking.validate());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{with_forged_customer, TestFixture, FIXTURE_EPOCH};
pub use generators::{booking_from_batches, movie_ticket, ticket_batches};
pub use vectors::{
    all_vectors, block_from_vector, verify_all_vectors, verify_vector, GoldenVector, VectorReport,
};
