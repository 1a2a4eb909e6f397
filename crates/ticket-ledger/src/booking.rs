//! TicketBooking: the pending-ticket buffer, mining, and the read surface
//! consumed by front-ends.
//!
//! Submitting a ticket only buffers it. Mining seals the whole buffer,
//! possibly empty, into exactly one new block.

use tracing::{debug, info};

use ticket_ledger_core::{now_millis, Block, BlockDigest, Ledger};

use crate::config::BookingConfig;
use crate::display::ChainEntry;
use crate::error::Result;
use crate::ticket::MovieTicket;

/// A single-writer booking system over an in-memory ledger.
#[derive(Debug, Clone)]
pub struct TicketBooking {
    /// The chain of sealed blocks.
    ledger: Ledger<MovieTicket>,
    /// Tickets submitted since the last mine.
    pending: Vec<MovieTicket>,
    /// Configuration.
    config: BookingConfig,
}

impl TicketBooking {
    /// Create a booking system whose genesis block is stamped now.
    pub fn new(config: BookingConfig) -> Self {
        Self::with_genesis_time(config, now_millis())
    }

    /// Create a booking system with a fixed genesis timestamp.
    pub fn with_genesis_time(config: BookingConfig, created_at: i64) -> Self {
        let ledger = Ledger::with_genesis(config.genesis_message.clone(), created_at)
            .with_policy(config.validation);
        Self {
            ledger,
            pending: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// The underlying ledger, read-only.
    pub fn ledger(&self) -> &Ledger<MovieTicket> {
        &self.ledger
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Write Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Buffer a ticket. The chain is untouched until the next mine.
    pub fn submit(&mut self, ticket: MovieTicket) {
        debug!(ticket_id = %ticket.ticket_id, pending = self.pending.len() + 1, "buffered ticket");
        self.pending.push(ticket);
    }

    /// Book a ticket.
    ///
    /// With `auto_mine` set this seals the ticket into a new block at once and
    /// returns the block's digest; otherwise the ticket is only buffered.
    pub fn submit_ticket(
        &mut self,
        movie_name: impl Into<String>,
        ticket_id: impl Into<String>,
        customer_name: impl Into<String>,
    ) -> Result<Option<BlockDigest>> {
        self.submit(MovieTicket::new(movie_name, ticket_id, customer_name));
        if self.config.auto_mine {
            self.mine().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Seal the buffered tickets into a new block stamped now.
    pub fn mine(&mut self) -> Result<BlockDigest> {
        self.mine_at(now_millis())
    }

    /// Seal the buffered tickets into a new block with the given timestamp.
    ///
    /// An empty buffer still produces a block, with an empty ticket list.
    /// The buffer is cleared only once the block is on the chain.
    pub fn mine_at(&mut self, created_at: i64) -> Result<BlockDigest> {
        let candidate = Block::candidate(created_at, self.pending.clone());
        let digest = self.ledger.append(candidate)?;

        let tickets = self.pending.len();
        self.pending.clear();

        if tickets > 0 {
            info!(
                position = self.ledger.len() - 1,
                tickets,
                digest = %digest,
                "mined block"
            );
        } else {
            debug!(position = self.ledger.len() - 1, "mined empty block");
        }
        Ok(digest)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Tickets waiting for the next mine.
    pub fn pending(&self) -> &[MovieTicket] {
        &self.pending
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of tickets in the most recent block (0 while only genesis exists).
    pub fn record_count(&self) -> usize {
        self.ledger
            .tail()
            .map(|block| block.records().len())
            .unwrap_or(0)
    }

    /// Every sealed ticket, in chain order. The genesis message is excluded.
    pub fn list_tickets(&self) -> Vec<MovieTicket> {
        self.ledger
            .blocks()
            .iter()
            .flat_map(|block| block.records().iter().cloned())
            .collect()
    }

    /// The genesis block's message.
    pub fn genesis_message(&self) -> Option<&str> {
        self.ledger
            .genesis()
            .ok()
            .and_then(|block| block.payload.genesis_message())
    }

    /// Every block as a display row, genesis first.
    pub fn dump_chain(&self) -> Vec<ChainEntry> {
        self.ledger.blocks().iter().map(ChainEntry::from).collect()
    }

    /// A snapshot of every block.
    pub fn all_blocks(&self) -> Vec<Block<MovieTicket>> {
        self.ledger.blocks().to_vec()
    }

    /// Whether the chain is intact.
    pub fn validate(&self) -> bool {
        self.ledger.is_valid()
    }

    /// Like [`TicketBooking::validate`], reporting the first broken invariant.
    pub fn verify(&self) -> Result<()> {
        Ok(self.ledger.verify()?)
    }
}

impl Default for TicketBooking {
    fn default() -> Self {
        Self::new(BookingConfig::default())
    }
}
