//! A cloneable handle for sharing one booking system between threads.
//!
//! Appends are serialized behind the write lock, so reading the tail and
//! pushing the new block happen as one step. Readers hold the read lock for
//! the whole query and always see a consistent chain.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ticket_ledger_core::BlockDigest;

use crate::booking::TicketBooking;
use crate::display::ChainEntry;
use crate::error::Result;
use crate::ticket::MovieTicket;

/// Thread-safe handle to a [`TicketBooking`].
#[derive(Debug, Clone)]
pub struct SharedBooking {
    inner: Arc<RwLock<TicketBooking>>,
}

impl SharedBooking {
    pub fn new(booking: TicketBooking) -> Self {
        Self {
            inner: Arc::new(RwLock::new(booking)),
        }
    }

    /// Run a read-only query against one consistent view of the chain.
    pub fn read<T>(&self, f: impl FnOnce(&TicketBooking) -> T) -> T {
        f(&self.read_guard())
    }

    pub fn submit(&self, ticket: MovieTicket) {
        self.write_guard().submit(ticket);
    }

    pub fn submit_ticket(
        &self,
        movie_name: impl Into<String>,
        ticket_id: impl Into<String>,
        customer_name: impl Into<String>,
    ) -> Result<Option<BlockDigest>> {
        self.write_guard()
            .submit_ticket(movie_name, ticket_id, customer_name)
    }

    pub fn mine(&self) -> Result<BlockDigest> {
        self.write_guard().mine()
    }

    pub fn record_count(&self) -> usize {
        self.read(TicketBooking::record_count)
    }

    pub fn list_tickets(&self) -> Vec<MovieTicket> {
        self.read(TicketBooking::list_tickets)
    }

    pub fn dump_chain(&self) -> Vec<ChainEntry> {
        self.read(TicketBooking::dump_chain)
    }

    pub fn validate(&self) -> bool {
        self.read(TicketBooking::validate)
    }

    // A panic in another holder cannot leave the chain half-appended, so a
    // poisoned lock is still safe to use.
    fn read_guard(&self) -> RwLockReadGuard<'_, TicketBooking> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, TicketBooking> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<TicketBooking> for SharedBooking {
    fn from(booking: TicketBooking) -> Self {
        Self::new(booking)
    }
}
