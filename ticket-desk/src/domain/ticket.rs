//! The ticket record and its field validation.

use std::fmt;

use super::{Price, TimeOfDay};

/// Identifies which field of a submitted draft failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TrainNumber,
    Destination,
    DepartureTime,
    TravelTime,
    Price,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::TrainNumber => "train number",
            Field::Destination => "destination",
            Field::DepartureTime => "departure time",
            Field::TravelTime => "travel time",
            Field::Price => "price",
        };
        f.write_str(name)
    }
}

/// Error returned when a submitted draft fails a field predicate.
///
/// Names the first offending field so the caller can re-collect exactly
/// that field and resubmit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    field: Field,
    reason: String,
}

impl ValidationError {
    fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// The field that failed its predicate.
    pub fn field(&self) -> Field {
        self.field
    }
}

/// A candidate ticket as entered, before validation.
///
/// All fields are raw: the times are strings and the price is whatever
/// number the caller parsed. `Ticket::validate` turns a draft into a
/// `Ticket` or reports the first offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketDraft {
    pub train_number: String,
    pub destination: String,
    pub departure: String,
    pub travel_time: String,
    pub price: f64,
}

/// One validated fare record.
///
/// Constructible only via `validate`, so every `Ticket` has a non-empty
/// train number and destination, well-formed times, and a positive fare.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    train_number: String,
    destination: String,
    departure: TimeOfDay,
    travel_time: TimeOfDay,
    price: Price,
}

impl Ticket {
    /// Validate a draft field by field.
    ///
    /// Checks run in field order and stop at the first failure, so the
    /// error always names a single field to re-collect.
    ///
    /// # Examples
    ///
    /// ```
    /// use ticket_desk::domain::{Field, Ticket, TicketDraft};
    ///
    /// let draft = TicketDraft {
    ///     train_number: "G102".into(),
    ///     destination: "Boston".into(),
    ///     departure: "08:30".into(),
    ///     travel_time: "02:15".into(),
    ///     price: 45.0,
    /// };
    /// let ticket = Ticket::validate(draft).unwrap();
    /// assert_eq!(ticket.destination(), "Boston");
    ///
    /// let bad = TicketDraft {
    ///     train_number: "G102".into(),
    ///     destination: "Boston".into(),
    ///     departure: "8:30".into(),
    ///     travel_time: "02:15".into(),
    ///     price: 45.0,
    /// };
    /// let err = Ticket::validate(bad).unwrap_err();
    /// assert_eq!(err.field(), Field::DepartureTime);
    /// ```
    pub fn validate(draft: TicketDraft) -> Result<Self, ValidationError> {
        if draft.train_number.is_empty() {
            return Err(ValidationError::new(
                Field::TrainNumber,
                "must not be empty",
            ));
        }
        if draft.destination.is_empty() {
            return Err(ValidationError::new(
                Field::Destination,
                "must not be empty",
            ));
        }

        let departure = TimeOfDay::parse(&draft.departure)
            .map_err(|e| ValidationError::new(Field::DepartureTime, e.to_string()))?;
        let travel_time = TimeOfDay::parse(&draft.travel_time)
            .map_err(|e| ValidationError::new(Field::TravelTime, e.to_string()))?;
        let price = Price::new(draft.price)
            .map_err(|e| ValidationError::new(Field::Price, e.to_string()))?;

        Ok(Self {
            train_number: draft.train_number,
            destination: draft.destination,
            departure,
            travel_time,
            price,
        })
    }

    /// Train identifier, e.g. "G102".
    pub fn train_number(&self) -> &str {
        &self.train_number
    }

    /// Destination station name.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Departure time of day.
    pub fn departure(&self) -> TimeOfDay {
        self.departure
    }

    /// Travel duration in the same HH:MM form.
    pub fn travel_time(&self) -> TimeOfDay {
        self.travel_time
    }

    /// Ticket fare.
    pub fn price(&self) -> Price {
        self.price
    }
}
