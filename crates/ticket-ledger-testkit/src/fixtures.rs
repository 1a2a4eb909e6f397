//! Test fixtures and helpers.
//!
//! A fixture wraps a booking system with a deterministic clock so that every
//! chain it builds has reproducible digests.

use ticket_ledger::{BookingConfig, MovieTicket, TicketBooking};
use ticket_ledger_core::{Block, BlockDigest, Ledger, Payload};

/// Genesis timestamp used by fixtures (2025-01-14T16:00:00Z).
pub const FIXTURE_EPOCH: i64 = 1_736_870_400_000;

/// Milliseconds between consecutive fixture blocks.
pub const FIXTURE_TICK: i64 = 1_000;

/// A booking system with a fixed genesis time and a stepping clock.
pub struct TestFixture {
    pub booking: TicketBooking,
    next_tick: i64,
}

impl TestFixture {
    /// Auto-mining fixture, like the default booking configuration.
    pub fn new() -> Self {
        Self::with_config(BookingConfig::default())
    }

    /// Fixture that batches tickets until [`TestFixture::mine`].
    pub fn batched() -> Self {
        Self::with_config(BookingConfig::batched())
    }

    pub fn with_config(config: BookingConfig) -> Self {
        Self {
            booking: TicketBooking::with_genesis_time(config, FIXTURE_EPOCH),
            next_tick: FIXTURE_EPOCH + FIXTURE_TICK,
        }
    }

    /// Book a ticket, mining at the next tick when auto-mining.
    pub fn book(&mut self, movie: &str, ticket_id: &str, customer: &str) -> Option<BlockDigest> {
        let ticket = MovieTicket::new(movie, ticket_id, customer);
        self.booking.submit(ticket);
        if self.booking.config().auto_mine {
            Some(self.mine())
        } else {
            None
        }
    }

    /// Mine pending tickets at the next tick.
    pub fn mine(&mut self) -> BlockDigest {
        let at = self.tick();
        self.booking
            .mine_at(at)
            .expect("fixture ledger always has a genesis block")
    }

    /// Book `count` numbered tickets for one movie.
    pub fn book_many(&mut self, movie: &str, count: usize) {
        for i in 0..count {
            self.book(movie, &format!("T{}", i + 1), &format!("Customer {}", i + 1));
        }
    }

    /// A detached copy of the chain, for tampering.
    pub fn blocks(&self) -> Vec<Block<MovieTicket>> {
        self.booking.all_blocks()
    }

    fn tick(&mut self) -> i64 {
        let at = self.next_tick;
        self.next_tick += FIXTURE_TICK;
        at
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild a ledger from blocks after replacing the customer of the first
/// ticket at `position`.
pub fn with_forged_customer(
    mut blocks: Vec<Block<MovieTicket>>,
    position: usize,
    customer: &str,
) -> Ledger<MovieTicket> {
    if let Some(Payload::Records(tickets)) = blocks.get_mut(position).map(|b| &mut b.payload) {
        if let Some(ticket) = tickets.first_mut() {
            ticket.customer_name = customer.to_string();
        }
    }
    Ledger::from_blocks(blocks).expect("fixture blocks are never empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_is_reproducible() {
        let mut a = TestFixture::new();
        let mut b = TestFixture::new();
        a.book_many("Inception", 3);
        b.book_many("Inception", 3);

        assert_eq!(a.blocks(), b.blocks());
        assert_eq!(
            a.booking.ledger().tail().unwrap().digest,
            b.booking.ledger().tail().unwrap().digest
        );
    }

    #[test]
    fn test_fixture_clock_steps() {
        let mut fixture = TestFixture::new();
        fixture.book_many("Up", 2);

        let times: Vec<i64> = fixture.blocks().iter().map(|b| b.created_at).collect();
        assert_eq!(
            times,
            vec![FIXTURE_EPOCH, FIXTURE_EPOCH + 1_000, FIXTURE_EPOCH + 2_000]
        );
    }

    #[test]
    fn test_batched_fixture() {
        let mut fixture = TestFixture::batched();
        assert_eq!(fixture.book("Up", "T1", "Bob"), None);
        assert_eq!(fixture.book("Up", "T2", "Carol"), None);
        fixture.mine();

        assert_eq!(fixture.blocks().len(), 2);
        assert_eq!(fixture.booking.record_count(), 2);
    }

    #[test]
    fn test_forged_customer_is_invalid() {
        let mut fixture = TestFixture::new();
        fixture.book_many("Inception", 2);

        let tampered = with_forged_customer(fixture.blocks(), 1, "Mallory");
        assert!(!tampered.is_valid());
        assert!(fixture.booking.validate());
    }
}
