//! Domain types for the ticket desk.
//!
//! This module contains the core domain model types that represent
//! validated ticket data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity. In particular, no ticket with a malformed time or a
//! non-positive fare can ever enter the store.

mod price;
mod ticket;
mod time;

pub use price::{InvalidPrice, Price};
pub use ticket::{Field, Ticket, TicketDraft, ValidationError};
pub use time::{TimeError, TimeOfDay};
