//! Terminal rendering and amount parsing
//!
//! This module centralizes the console format concerns, providing:
//! - The one-time startup banner
//! - Menu rendering, grouped by category
//! - Parsing of customer-entered payment amounts
//!
//! All rendering goes through `&mut dyn Write`, so tests capture output
//! in memory and the session stays agnostic of the real terminal.

use crate::types::{Category, Item, VendingError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;
use std::str::FromStr;

/// Largest amount (in either direction) accepted from a single response
///
/// Keeps tendered totals far from the `Decimal` limits, so shortfall and
/// top-up arithmetic in the session can never overflow.
const MAX_AMOUNT: Decimal = dec!(1_000_000);

/// Horizontal rule printed between menu sections and after each outcome
pub const RULE: &str = "------------------------------------------------------------";

/// Startup banner, shown once per session
///
/// Kept narrower than [`RULE`] so the art never overhangs the menu.
const BANNER: &str = r"
__     __  _____   _   _   ____    ___   _   _    ____
\ \   / / | ____| | \ | | |  _ \  |_ _| | \ | |  / ___|
 \ \ / /  |  _|   |  \| | | | | |  | |  |  \| | | |  _
  \ V /   | |___  | |\  | | |_| |  | |  | |\  | | |_| |
   \_/    |_____| |_| \_| |____/  |___| |_| \_|  \____|

 __  __      _       ____   _   _   ___   _   _   _____
|  \/  |    / \     / ___| | | | | |_ _| | \ | | | ____|
| |\/| |   / _ \   | |     | |_| |  | |  |  \| | |  _|
| |  | |  / ___ \  | |___  |  _  |  | |  | |\  | | |___
|_|  |_| /_/   \_\  \____| |_| |_| |___| |_| \_| |_____|

            Welcome to Ty's Vending Machine";

/// Write the startup banner
pub fn write_banner(output: &mut dyn Write) -> Result<(), VendingError> {
    writeln!(output, "{}", BANNER)?;
    Ok(())
}

/// Write the full menu from pre-grouped catalog rows
///
/// Every category gets its own header row and column labels; items are
/// listed in catalog load order with prices shown to two decimal places.
/// Stock counts reflect the catalog at the moment of rendering.
///
/// # Arguments
///
/// * `groups` - Category groups as produced by `Catalog::grouped_by_category`
/// * `output` - Writer receiving the menu text
///
/// # Errors
///
/// Returns `VendingError::Io` if a write fails.
pub fn write_menu(
    groups: &[(Category, Vec<&Item>)],
    output: &mut dyn Write,
) -> Result<(), VendingError> {
    writeln!(output)?;
    writeln!(output, "MENU:")?;
    writeln!(output, "{}", RULE)?;

    for (category, items) in groups {
        writeln!(output, "{}:", category)?;
        writeln!(
            output,
            "{:<5} {:<20} {:<15} {}",
            "ID", "Item", "Price (AED)", "Stock Left"
        )?;
        writeln!(output, "{}", RULE)?;

        for item in items {
            writeln!(
                output,
                "{:<5} {:<20} {:<15} {}",
                item.id,
                item.name,
                format!("{:.2}", item.price),
                item.stock
            )?;
        }

        writeln!(output, "{}", RULE)?;
    }

    Ok(())
}

/// Parse a customer-entered amount
///
/// Accepts any decimal literal `rust_decimal` understands, with
/// surrounding whitespace ignored. No currency symbol or thousands
/// separators; the machine prompts in AED and expects a bare number.
/// Amounts beyond [`MAX_AMOUNT`] in either direction are rejected the
/// same way as unparseable input, so later arithmetic on the tendered
/// total stays well inside the `Decimal` range.
///
/// # Arguments
///
/// * `raw` - The response line as read from the console
///
/// # Returns
///
/// The parsed amount, or `VendingError::InvalidAmount` carrying the
/// offending input for the customer-facing message.
pub fn parse_amount(raw: &str) -> Result<Decimal, VendingError> {
    let trimmed = raw.trim();
    let amount =
        Decimal::from_str(trimmed).map_err(|_| VendingError::invalid_amount(trimmed))?;

    if amount.abs() > MAX_AMOUNT {
        return Err(VendingError::invalid_amount(trimmed));
    }

    Ok(amount)
}
