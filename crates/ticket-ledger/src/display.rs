//! Owned, read-only rows handed to front-ends for rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

use ticket_ledger_core::{Block, Payload};

use crate::ticket::MovieTicket;

/// One block of the chain, detached from ledger storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainEntry {
    pub position: u64,
    /// Unix milliseconds.
    pub timestamp: i64,
    pub payload: Payload<MovieTicket>,
    /// Full hex, or `"0"` for genesis.
    pub previous_digest: String,
    /// Full hex.
    pub digest: String,
}

impl From<&Block<MovieTicket>> for ChainEntry {
    fn from(block: &Block<MovieTicket>) -> Self {
        Self {
            position: block.position,
            timestamp: block.created_at,
            payload: block.payload.clone(),
            previous_digest: block.previous_digest_string(),
            digest: block.digest_string(),
        }
    }
}

impl fmt::Display for ChainEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block: {}", self.position)?;
        writeln!(f, "Timestamp: {}", self.timestamp)?;
        writeln!(f, "Data: {}", PayloadDisplay(&self.payload))?;
        writeln!(f, "Previous Block Hash: {}", self.previous_digest)?;
        write!(f, "Hash: {}", self.digest)
    }
}

/// Single-line rendering of a payload.
struct PayloadDisplay<'a>(&'a Payload<MovieTicket>);

impl fmt::Display for PayloadDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Payload::Genesis { message } => write!(f, "{{message: {}}}", message),
            Payload::Records(tickets) => {
                write!(f, "[")?;
                for (i, t) in tickets.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(
                        f,
                        "{{movie: {}, ticket: {}, customer: {}}}",
                        t.movie_name, t.ticket_id, t.customer_name
                    )?;
                }
                write!(f, "]")
            }
        }
    }
}
