//! Booking configuration.

use serde::{Deserialize, Serialize};

use ticket_ledger_core::{ValidationPolicy, DEFAULT_GENESIS_MESSAGE};

/// Configuration for a [`TicketBooking`](crate::TicketBooking).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Message carried by the genesis block.
    pub genesis_message: String,
    /// Mine a block after every submitted ticket. When false, tickets
    /// accumulate until [`TicketBooking::mine`](crate::TicketBooking::mine).
    pub auto_mine: bool,
    /// Validation checks applied by `validate`.
    pub validation: ValidationPolicy,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            genesis_message: DEFAULT_GENESIS_MESSAGE.to_string(),
            auto_mine: true,
            validation: ValidationPolicy::default(),
        }
    }
}

impl BookingConfig {
    /// Batch tickets until an explicit mine.
    pub fn batched() -> Self {
        Self {
            auto_mine: false,
            ..Self::default()
        }
    }
}
