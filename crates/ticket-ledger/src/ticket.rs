//! MovieTicket: the record type stored in the booking ledger.

use ciborium::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

use ticket_ledger_core::Record;

/// Field names used in a ticket's canonical encoding.
mod keys {
    pub const MOVIE_NAME: &str = "movie_name";
    pub const TICKET_ID: &str = "ticket_id";
    pub const CUSTOMER_NAME: &str = "customer_name";
}

/// A booked movie ticket.
///
/// All fields are free text. No uniqueness or format rules apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieTicket {
    pub movie_name: String,
    pub ticket_id: String,
    pub customer_name: String,
}

impl MovieTicket {
    pub fn new(
        movie_name: impl Into<String>,
        ticket_id: impl Into<String>,
        customer_name: impl Into<String>,
    ) -> Self {
        Self {
            movie_name: movie_name.into(),
            ticket_id: ticket_id.into(),
            customer_name: customer_name.into(),
        }
    }
}

impl Record for MovieTicket {
    fn canonical_value(&self) -> Value {
        Value::Map(vec![
            (
                Value::Text(keys::MOVIE_NAME.to_string()),
                Value::Text(self.movie_name.clone()),
            ),
            (
                Value::Text(keys::TICKET_ID.to_string()),
                Value::Text(self.ticket_id.clone()),
            ),
            (
                Value::Text(keys::CUSTOMER_NAME.to_string()),
                Value::Text(self.customer_name.clone()),
            ),
        ])
    }
}

impl fmt::Display for MovieTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Movie: {}", self.movie_name)?;
        writeln!(f, "Ticket ID: {}", self.ticket_id)?;
        write!(f, "Customer: {}", self.customer_name)
    }
}
