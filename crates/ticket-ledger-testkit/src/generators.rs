//! Proptest generators for property-based testing.

use proptest::prelude::*;

use ticket_ledger::{BookingConfig, MovieTicket, TicketBooking};
use ticket_ledger_core::BlockDigest;

/// Generate a movie title.
pub fn movie_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,15}( [A-Z][a-z]{0,10}){0,2}".prop_map(String::from)
}

/// Generate a ticket identifier.
pub fn ticket_id() -> impl Strategy<Value = String> {
    "T[0-9]{1,6}".prop_map(String::from)
}

/// Generate a customer name. Any unicode text is allowed.
pub fn customer_name() -> impl Strategy<Value = String> {
    "\\PC{0,24}".prop_map(String::from)
}

/// Generate a ticket.
pub fn movie_ticket() -> impl Strategy<Value = MovieTicket> {
    (movie_name(), ticket_id(), customer_name())
        .prop_map(|(movie, id, customer)| MovieTicket::new(movie, id, customer))
}

/// Generate a reasonable timestamp (Unix ms).
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=4_102_444_800_000i64
}

/// Generate a random digest.
pub fn block_digest() -> impl Strategy<Value = BlockDigest> {
    any::<[u8; 32]>().prop_map(BlockDigest::from_bytes)
}

/// Generate a sequence of batches, each of which becomes one block.
pub fn ticket_batches(
    max_batches: usize,
    max_batch_len: usize,
) -> impl Strategy<Value = Vec<Vec<MovieTicket>>> {
    prop::collection::vec(
        prop::collection::vec(movie_ticket(), 0..=max_batch_len),
        0..=max_batches,
    )
}

/// Build a booking system with one block per batch, mined at increasing
/// timestamps after `genesis_at`.
pub fn booking_from_batches(genesis_at: i64, batches: &[Vec<MovieTicket>]) -> TicketBooking {
    let mut booking = TicketBooking::with_genesis_time(BookingConfig::batched(), genesis_at);
    for (i, batch) in batches.iter().enumerate() {
        for ticket in batch {
            booking.submit(ticket.clone());
        }
        booking
            .mine_at(genesis_at + i as i64 + 1)
            .expect("generated ledger always has a genesis block");
    }
    booking
}
