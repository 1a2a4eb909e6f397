//! # Ticket Ledger
//!
//! Movie ticket booking over an append-only, hash-linked ledger.
//!
//! ## Overview
//!
//! - **Tickets** are submitted into a pending buffer
//! - **Mining** seals the buffer into exactly one new block
//! - **Blocks** are linked by digest to their predecessor and never edited
//! - **Validation** recomputes every digest and back-link on demand
//!
//! The whole chain lives in memory for the life of the process. There is a
//! single writer; [`SharedBooking`] serializes writers when one booking system
//! is shared between threads.
//!
//! ## Usage
//!
//! ```rust
//! use ticket_ledger::{BookingConfig, TicketBooking};
//!
//! let mut booking = TicketBooking::new(BookingConfig::default());
//!
//! // Each booking is mined into its own block by default.
//! booking.submit_ticket("Inception", "T1", "Alice").unwrap();
//!
//! assert_eq!(booking.record_count(), 1);
//! assert_eq!(booking.list_tickets()[0].customer_name, "Alice");
//! assert!(booking.validate());
//!
//! for entry in booking.dump_chain() {
//!     println!("{entry}\n");
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `ticket_ledger::core` - Ledger primitives (Block, Ledger, BlockDigest, etc.)

pub mod booking;
pub mod config;
pub mod display;
pub mod error;
pub mod shared;
pub mod ticket;

pub use ticket_ledger_core as core;

pub use booking::TicketBooking;
pub use config::BookingConfig;
pub use display::ChainEntry;
pub use error::{BookingError, Result};
pub use shared::SharedBooking;
pub use ticket::MovieTicket;

pub use ticket_ledger_core::{
    Block, BlockDigest, Ledger, LedgerError, Payload, Record, ValidationError, ValidationPolicy,
};
