use std::io;

use ticket_desk::shell;
use ticket_desk::store::TicketStore;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Log to stderr so the menu transcript on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut store = TicketStore::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    shell::run(&mut store, &mut input, &mut out)
}
