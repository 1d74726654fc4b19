//! Vending Machine CLI
//!
//! Command-line interface for the interactive vending machine.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! The program renders the menu on stdout and reads selections, payments
//! and confirmations from stdin until the customer exits with `0` or
//! declines another purchase.
//!
//! # Exit Codes
//!
//! - 0: Session ended normally (exit selection or declining another purchase)
//! - 1: Error (input closed mid-session, terminal write failure)

use std::process;
use vending_machine::cli;
use vending_machine::{Catalog, Session};

fn main() {
    // Parse command-line arguments using clap (no options, but this
    // rejects stray arguments and serves --help/--version)
    let _args = cli::parse_args();

    let mut catalog = Catalog::factory_default();

    // The whole interaction happens over locked stdin/stdout
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(&mut catalog, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
