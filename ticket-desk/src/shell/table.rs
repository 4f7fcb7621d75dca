//! Fixed-width box-drawing tables for ticket records.

use crate::domain::Ticket;

const BORDER: &str =
    "+----------------+----------------------+----------------+--------------+-------------+";
const HEADER: &str =
    "| Train Number   | Destination Station  | Departure Time | Travel Time  | Price       |";

/// Render the full ticket list as a bordered table with a header row.
pub fn render_table(tickets: &[Ticket]) -> String {
    let mut buf = String::new();
    buf.push_str(BORDER);
    buf.push('\n');
    buf.push_str(HEADER);
    buf.push('\n');
    buf.push_str(BORDER);
    buf.push('\n');
    for ticket in tickets {
        push_row(&mut buf, ticket);
    }
    buf.push_str(BORDER);
    buf.push('\n');
    buf
}

/// Render a single ticket as a bordered one-row table, no header.
pub fn render_single(ticket: &Ticket) -> String {
    let mut buf = String::new();
    buf.push_str(BORDER);
    buf.push('\n');
    push_row(&mut buf, ticket);
    buf.push_str(BORDER);
    buf.push('\n');
    buf
}

fn push_row(buf: &mut String, ticket: &Ticket) {
    buf.push_str(&format!(
        "| {:<14} | {:<20} | {:<14} | {:<12} | {:<11.2} |\n",
        ticket.train_number(),
        ticket.destination(),
        ticket.departure().to_string(),
        ticket.travel_time().to_string(),
        ticket.price().value(),
    ));
}
