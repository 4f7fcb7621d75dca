//! In-memory train ticket desk.
//!
//! A menu-driven command-line tool that keeps a small in-memory collection
//! of train ticket records: validated entry, tabular listing, average fare,
//! cheapest ticket to a given destination, and in-place sorting by
//! departure time.

pub mod domain;
pub mod shell;
pub mod store;
