//! Interactive menu shell.
//!
//! A thin I/O layer over the store: the menu loop, the per-field
//! prompt/re-prompt loops, and table display. Every predicate lives in the
//! core; the shell only repeats a prompt until the corresponding predicate
//! holds. Reading and writing go through generic handles so the whole loop
//! can be driven from tests without a terminal.

mod table;

pub use table::{render_single, render_table};

use std::io::{self, BufRead, Write};

use crate::domain::{Price, TicketDraft, TimeOfDay};
use crate::store::TicketStore;

const MENU: &str = "\
=== Train Ticket Management System ===
1. Enter ticket data
2. Display all tickets
3. Calculate average ticket price
4. Find cheapest ticket to destination
5. Sort by departure time
6. Exit";

/// Run the menu loop until the user chooses to exit.
///
/// End of input is also treated as exit, so a piped session terminates
/// cleanly. Every error the core signals is reported and the loop
/// continues; nothing here aborts the process.
pub fn run<R: BufRead, W: Write>(
    store: &mut TicketStore,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "{MENU}")?;
        write!(out, "Enter your choice: ")?;
        out.flush()?;

        let Some(choice) = read_line(input)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => enter_ticket(store, input, out)?,
            "2" => display_all(store, out)?,
            "3" => show_average(store, out)?,
            "4" => find_cheapest(store, input, out)?,
            "5" => sort_by_departure(store, out)?,
            "6" => {
                writeln!(out, "Program terminated.")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice! Please enter 1-6.")?,
        }
    }
}

/// Read one trimmed line; `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Prompt until a non-empty line is entered; `None` on end of input.
fn prompt_nonempty<R: BufRead, W: Write>(
    label: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    loop {
        write!(out, "{label}: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if !line.is_empty() {
            return Ok(Some(line));
        }
        writeln!(out, "Error! This field cannot be empty.")?;
    }
}

/// Prompt until the line is a valid HH:MM token; `None` on end of input.
fn prompt_time<R: BufRead, W: Write>(
    label: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    loop {
        write!(out, "{label} (HH:MM): ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if TimeOfDay::parse(&line).is_ok() {
            return Ok(Some(line));
        }
        writeln!(out, "Invalid format! Please use HH:MM (24-hour format).")?;
    }
}

/// Prompt until the line parses as a positive number; `None` on end of
/// input. Non-numeric input re-prompts the same way a non-positive value
/// does.
fn prompt_positive<R: BufRead, W: Write>(
    label: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<f64>> {
    loop {
        write!(out, "{label}: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if let Ok(value) = line.parse::<f64>() {
            if Price::new(value).is_ok() {
                return Ok(Some(value));
            }
        }
        writeln!(out, "Error! Please enter a positive number.")?;
    }
}

fn enter_ticket<R: BufRead, W: Write>(
    store: &mut TicketStore,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Enter ticket details:")?;

    let Some(train_number) = prompt_nonempty("Train number", input, out)? else {
        return Ok(());
    };
    let Some(destination) = prompt_nonempty("Destination station", input, out)? else {
        return Ok(());
    };
    let Some(departure) = prompt_time("Departure time", input, out)? else {
        return Ok(());
    };
    let Some(travel_time) = prompt_time("Travel duration", input, out)? else {
        return Ok(());
    };
    let Some(price) = prompt_positive("Ticket price", input, out)? else {
        return Ok(());
    };

    let draft = TicketDraft {
        train_number,
        destination,
        departure,
        travel_time,
        price,
    };
    // Each field was collected against its own predicate, so submission
    // succeeds unless the core and the prompts ever disagree.
    match store.submit(draft) {
        Ok(()) => writeln!(out, "Ticket added successfully!")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}

fn display_all<W: Write>(store: &TicketStore, out: &mut W) -> io::Result<()> {
    if store.is_empty() {
        writeln!(out, "No ticket data available.")?;
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Ticket List:")?;
    write!(out, "{}", render_table(store.all()))?;
    Ok(())
}

fn show_average<W: Write>(store: &TicketStore, out: &mut W) -> io::Result<()> {
    match store.average_price() {
        Ok(avg) => writeln!(out, "Average ticket price: {avg:.2} USD")?,
        Err(_) => writeln!(out, "No data available for calculation.")?,
    }
    Ok(())
}

fn find_cheapest<R: BufRead, W: Write>(
    store: &TicketStore,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    if store.is_empty() {
        writeln!(out, "No ticket data available.")?;
        return Ok(());
    }

    let Some(destination) = prompt_nonempty("Enter destination station", input, out)? else {
        return Ok(());
    };

    match store.cheapest_to(&destination) {
        Some(ticket) => {
            writeln!(out)?;
            writeln!(out, "Cheapest ticket to '{destination}':")?;
            write!(out, "{}", render_single(ticket))?;
        }
        None => writeln!(out, "No tickets found for destination '{destination}'.")?,
    }
    Ok(())
}

fn sort_by_departure<W: Write>(store: &mut TicketStore, out: &mut W) -> io::Result<()> {
    if store.is_empty() {
        writeln!(out, "No data available for sorting.")?;
        return Ok(());
    }
    store.sort_by_departure_desc();
    writeln!(out, "Tickets sorted by departure time (newest first).")?;
    Ok(())
}
