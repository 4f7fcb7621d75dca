//! The in-memory ticket collection and its operations.
//!
//! `TicketStore` is an ordered sequence of validated `Ticket` records.
//! Insertion order is preserved until `sort_by_departure_desc` reorders
//! the records in place. The store only ever grows; there is no delete or
//! update, and nothing persists across runs.

use tracing::debug;

use crate::domain::{Ticket, TicketDraft, ValidationError};

/// Error returned when an aggregate is asked of an empty store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no ticket data available")]
pub struct EmptyStore;

/// An ordered in-memory collection of validated ticket records.
///
/// # Examples
///
/// ```
/// use ticket_desk::domain::TicketDraft;
/// use ticket_desk::store::TicketStore;
///
/// let mut store = TicketStore::new();
/// store
///     .submit(TicketDraft {
///         train_number: "G102".into(),
///         destination: "Boston".into(),
///         departure: "08:30".into(),
///         travel_time: "02:15".into(),
///         price: 45.0,
///     })
///     .unwrap();
///
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.average_price().unwrap(), 45.0);
/// ```
#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Validate a draft and append the resulting ticket.
    ///
    /// The store is untouched when validation fails; the error names the
    /// offending field so the caller can re-collect just that one.
    pub fn submit(&mut self, draft: TicketDraft) -> Result<(), ValidationError> {
        let ticket = Ticket::validate(draft)?;
        debug!(
            train = %ticket.train_number(),
            destination = %ticket.destination(),
            "ticket added"
        );
        self.tickets.push(ticket);
        Ok(())
    }

    /// Current contents in current order.
    ///
    /// The empty slice is the "no data" signal; callers render a message
    /// rather than an empty table.
    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Arithmetic mean of all fares, at full precision.
    ///
    /// Rounding to two decimals happens only where the value is printed.
    pub fn average_price(&self) -> Result<f64, EmptyStore> {
        if self.tickets.is_empty() {
            return Err(EmptyStore);
        }
        let sum: f64 = self.tickets.iter().map(|t| t.price().value()).sum();
        Ok(sum / self.tickets.len() as f64)
    }

    /// Cheapest ticket whose destination matches exactly (case-sensitive,
    /// no normalization).
    ///
    /// Returns `None` when nothing matches. Ties on the minimum fare go
    /// to the first matching record in store order.
    pub fn cheapest_to(&self, destination: &str) -> Option<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.destination() == destination)
            .min_by(|a, b| a.price().total_cmp(&b.price()))
    }

    /// Reorder the records in place so the latest departure time comes
    /// first. A valid no-op on zero or one record.
    pub fn sort_by_departure_desc(&mut self) {
        self.tickets
            .sort_by(|a, b| b.departure().cmp(&a.departure()));
        debug!(tickets = self.tickets.len(), "sorted by departure, latest first");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    fn draft(train: &str, dest: &str, dep: &str, travel: &str, price: f64) -> TicketDraft {
        TicketDraft {
            train_number: train.into(),
            destination: dest.into(),
            departure: dep.into(),
            travel_time: travel.into(),
            price,
        }
    }

    #[test]
    fn submit_valid_grows_by_one_in_order() {
        let mut store = TicketStore::new();

        store.submit(draft("G1", "Boston", "08:00", "01:00", 50.0)).unwrap();
        store.submit(draft("G2", "NYC", "09:00", "02:00", 30.0)).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].train_number(), "G1");
        assert_eq!(store.all()[1].train_number(), "G2");
    }

    #[test]
    fn submit_invalid_leaves_store_unchanged() {
        let mut store = TicketStore::new();
        store.submit(draft("G1", "Boston", "08:00", "01:00", 50.0)).unwrap();

        let err = store
            .submit(draft("G2", "NYC", "09:00", "02:00", -5.0))
            .unwrap_err();

        assert_eq!(err.field(), Field::Price);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].train_number(), "G1");
    }

    #[test]
    fn all_on_empty_store_is_empty_slice() {
        let store = TicketStore::new();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }

    #[test]
    fn average_price_is_arithmetic_mean() {
        let mut store = TicketStore::new();
        store.submit(draft("G1", "A", "08:00", "01:00", 10.0)).unwrap();
        store.submit(draft("G2", "B", "09:00", "01:00", 20.0)).unwrap();
        store.submit(draft("G3", "C", "10:00", "01:00", 30.0)).unwrap();

        assert_eq!(store.average_price().unwrap(), 20.0);
    }

    #[test]
    fn average_price_on_empty_store_errors() {
        let store = TicketStore::new();
        assert_eq!(store.average_price().unwrap_err(), EmptyStore);
    }

    #[test]
    fn cheapest_to_picks_minimum_price() {
        let mut store = TicketStore::new();
        store.submit(draft("G1", "Boston", "08:00", "01:00", 50.0)).unwrap();
        store.submit(draft("G2", "Boston", "09:00", "01:00", 30.0)).unwrap();
        store.submit(draft("G3", "NYC", "10:00", "01:00", 10.0)).unwrap();

        let cheapest = store.cheapest_to("Boston").unwrap();
        assert_eq!(cheapest.train_number(), "G2");
        assert_eq!(cheapest.price().value(), 30.0);
    }

    #[test]
    fn cheapest_to_unknown_destination_is_none() {
        let mut store = TicketStore::new();
        store.submit(draft("G1", "Boston", "08:00", "01:00", 50.0)).unwrap();

        assert!(store.cheapest_to("Chicago").is_none());
    }

    #[test]
    fn cheapest_to_match_is_case_sensitive() {
        let mut store = TicketStore::new();
        store.submit(draft("G1", "Boston", "08:00", "01:00", 50.0)).unwrap();

        assert!(store.cheapest_to("boston").is_none());
        assert!(store.cheapest_to("Boston").is_some());
    }

    #[test]
    fn cheapest_to_tie_goes_to_first_in_store_order() {
        let mut store = TicketStore::new();
        store.submit(draft("G1", "Boston", "08:00", "01:00", 30.0)).unwrap();
        store.submit(draft("G2", "Boston", "09:00", "01:00", 30.0)).unwrap();

        assert_eq!(store.cheapest_to("Boston").unwrap().train_number(), "G1");
    }

    #[test]
    fn sort_orders_latest_departure_first() {
        let mut store = TicketStore::new();
        store.submit(draft("G1", "A", "08:00", "01:00", 10.0)).unwrap();
        store.submit(draft("G2", "B", "23:15", "01:00", 10.0)).unwrap();
        store.submit(draft("G3", "C", "08:00", "01:00", 10.0)).unwrap();

        store.sort_by_departure_desc();

        let times: Vec<String> = store.all().iter().map(|t| t.departure().to_string()).collect();
        assert_eq!(times, vec!["23:15", "08:00", "08:00"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut store = TicketStore::new();
        store.submit(draft("G1", "A", "12:00", "01:00", 10.0)).unwrap();
        store.submit(draft("G2", "B", "07:45", "01:00", 10.0)).unwrap();
        store.submit(draft("G3", "C", "19:30", "01:00", 10.0)).unwrap();

        store.sort_by_departure_desc();
        let once: Vec<String> = store.all().iter().map(|t| t.departure().to_string()).collect();

        store.sort_by_departure_desc();
        let twice: Vec<String> = store.all().iter().map(|t| t.departure().to_string()).collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn sort_is_a_noop_on_empty_and_single() {
        let mut store = TicketStore::new();
        store.sort_by_departure_desc();
        assert!(store.is_empty());

        store.submit(draft("G1", "A", "12:00", "01:00", 10.0)).unwrap();
        store.sort_by_departure_desc();
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].train_number(), "G1");
    }
}
