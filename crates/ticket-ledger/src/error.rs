//! Error types for the booking layer.

use thiserror::Error;
use ticket_ledger_core::{LedgerError, ValidationError};

/// Errors that can occur during booking operations.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Ledger error.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// The chain failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type for booking operations.
pub type Result<T> = std::result::Result<T, BookingError>;
