//! Ticket fare type.

use std::cmp::Ordering;
use std::fmt;

/// Error returned when constructing an invalid price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {reason}")]
pub struct InvalidPrice {
    reason: &'static str,
}

/// A validated ticket fare: a finite number strictly greater than zero.
///
/// # Examples
///
/// ```
/// use ticket_desk::domain::Price;
///
/// let fare = Price::new(42.5).unwrap();
/// assert_eq!(fare.value(), 42.5);
///
/// assert!(Price::new(0.0).is_err());
/// assert!(Price::new(-5.0).is_err());
/// assert!(Price::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    /// Construct a price, rejecting anything that is not a positive
    /// finite number.
    pub fn new(value: f64) -> Result<Self, InvalidPrice> {
        if !value.is_finite() {
            return Err(InvalidPrice {
                reason: "must be a finite number",
            });
        }
        if value <= 0.0 {
            return Err(InvalidPrice {
                reason: "must be greater than zero",
            });
        }
        Ok(Self(value))
    }

    /// Returns the fare as a plain number, at full precision.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total ordering over fares. Validated prices are finite, so this
    /// agrees with the usual numeric order.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fixed two decimals at the presentation boundary.
        write!(f, "{:.2}", self.0)
    }
}
