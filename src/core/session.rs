//! Interactive vending session
//!
//! This module provides the Session that drives one customer-facing run
//! of the machine: menu display, item selection, payment collection with
//! top-ups, confirmation, change calculation and stock decrement.
//!
//! The session enforces the transaction rules:
//! - Stock is checked at selection time and decremented only on completion
//! - Payment must fully cover the price before anything is dispensed
//! - A transaction abandoned at any point leaves the catalog untouched

use crate::core::catalog::Catalog;
use crate::io::console::Console;
use crate::io::display;
use crate::types::{Purchase, VendingError};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// Menu response that ends the session instead of selecting an item
const EXIT_SELECTION: &str = "0";

/// Interactive transaction loop over a catalog
///
/// Borrows the catalog mutably for the life of the session, so stock
/// changes made by completed purchases are visible to the caller
/// afterwards. Input and output are generic, which lets tests drive a
/// session from scripted byte slices.
pub struct Session<'a, R, W> {
    catalog: &'a mut Catalog,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a new Session over the given catalog and streams
    ///
    /// # Arguments
    ///
    /// * `catalog` - The catalog to sell from
    /// * `input` - Line-oriented customer input
    /// * `output` - Terminal output for prompts, the menu and messages
    pub fn new(catalog: &'a mut Catalog, input: R, output: W) -> Self {
        Session {
            catalog,
            console: Console::new(input, output),
        }
    }

    /// Run the session until the customer leaves or input ends
    ///
    /// Shows the banner once, then loops: render the menu, take a
    /// selection, and run one transaction. Recoverable errors are
    /// reported and the loop continues; fatal errors are returned.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The customer exited via the menu or declined another purchase
    /// * `Err(VendingError)` - Input ended mid-session or a write failed
    pub fn run(&mut self) -> Result<(), VendingError> {
        display::write_banner(self.console.writer())?;

        loop {
            display::write_menu(&self.catalog.grouped_by_category(), self.console.writer())?;

            let selection = self
                .console
                .prompt("\nEnter the item ID to purchase (or 0 to exit): ")?
                .to_uppercase();

            if selection == EXIT_SELECTION {
                return self.farewell();
            }

            match self.attempt_purchase(&selection) {
                Ok(purchase) => self.report_outcome(&purchase)?,
                Err(error) if error.is_recoverable() => {
                    self.console.write_line(&error.to_string())?;
                    self.console.write_line(display::RULE)?;

                    // Only a cancellation reaches the another-purchase
                    // question; other recoverable errors return straight
                    // to the menu.
                    if !matches!(error, VendingError::Cancelled) {
                        continue;
                    }
                }
                Err(error) => return Err(error),
            }

            if !self.confirmed("Would you like to make another purchase? (yes/no): ")? {
                return self.farewell();
            }
        }
    }

    /// Run one transaction for the selected item
    ///
    /// Validates the selection, collects payment, confirms, then loops on
    /// top-ups until the price is covered. Stock is decremented as the
    /// final step, so an abandoned transaction changes nothing.
    ///
    /// # Arguments
    ///
    /// * `code` - The uppercased selection to purchase
    ///
    /// # Returns
    ///
    /// * `Ok(Purchase)` - The completed purchase, change included
    /// * `Err(VendingError)` - Why the transaction did not complete
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The selection matches no item, or the item is out of stock
    /// - A payment or top-up response is not numeric
    /// - The customer declines at the confirmation prompt
    /// - Input ends or a write fails mid-transaction
    fn attempt_purchase(&mut self, code: &str) -> Result<Purchase, VendingError> {
        let item = self
            .catalog
            .get(code)
            .ok_or_else(|| VendingError::invalid_selection(code))?;

        if !item.in_stock() {
            return Err(VendingError::out_of_stock(&item.name));
        }

        let name = item.name.clone();
        let price = item.price;

        let mut tendered =
            self.prompt_amount(&format!("Enter payment for item ID {}: AED ", code))?;

        self.console
            .write_line(&format!("You have selected: {} for {:.2} AED.", name, price))?;

        if !self.confirmed("Do you want to proceed with the payment? (yes/no): ")? {
            return Err(VendingError::Cancelled);
        }

        // Collect top-ups until the price is covered. Accepted amounts
        // are range-checked at parse time and the arithmetic saturates,
        // so no tendered total can overflow the Decimal range.
        while tendered < price {
            let shortfall = price.saturating_sub(tendered);
            self.console.write_line(&format!(
                "Insufficient funds. Please insert {:.2} AED more.",
                shortfall
            ))?;
            tendered = tendered.saturating_add(self.prompt_amount("Enter additional funds: AED ")?);
        }

        // Payment settled; only now does stock move
        self.catalog.decrement_stock(code)?;

        Ok(Purchase::new(code, &name, price, tendered))
    }

    /// Prompt for an amount and parse it
    fn prompt_amount(&mut self, prompt: &str) -> Result<Decimal, VendingError> {
        let raw = self.console.prompt(prompt)?;
        display::parse_amount(&raw)
    }

    /// Ask a yes/no question
    ///
    /// Only a literal "yes" (any case) is affirmative; every other
    /// response counts as "no".
    fn confirmed(&mut self, prompt: &str) -> Result<bool, VendingError> {
        let answer = self.console.prompt(prompt)?;
        Ok(answer.to_lowercase() == "yes")
    }

    /// Report a completed purchase and any change due
    fn report_outcome(&mut self, purchase: &Purchase) -> Result<(), VendingError> {
        self.console
            .write_line(&format!("Thank you for purchasing {}!", purchase.name))?;

        if purchase.is_exact() {
            self.console.write_line("Exact amount received. No change.")?;
        } else {
            self.console
                .write_line(&format!("Your change is {:.2} AED.", purchase.change))?;
        }

        self.console.write_line(display::RULE)?;
        Ok(())
    }

    /// Print the goodbye message that closes every session
    fn farewell(&mut self) -> Result<(), VendingError> {
        self.console
            .write_line("Thank you for using Ty's Vending Machine. Goodbye!")?;
        self.console.write_line(display::RULE)?;
        Ok(())
    }
}
