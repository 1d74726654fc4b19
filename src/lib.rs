//! Vending Machine Library
//!
//! # Overview
//!
//! This library implements a single-session interactive vending machine:
//! a fixed catalog grouped into categories, sold over a line-oriented
//! console protocol with payment, top-ups and change.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Item, Category, Purchase, VendingError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::catalog`] - Item records, grouping and stock operations
//!   - [`core::session`] - The interactive transaction loop
//! - [`io`] - Console seam and terminal rendering
//!
//! # Transaction Flow
//!
//! A session loops through the following states until the customer exits:
//!
//! - **Menu**: The full catalog is rendered, grouped by category
//! - **Selection**: An item identifier is read; `0` ends the session
//! - **Payment**: An opening amount is collected for the selected item
//! - **Confirmation**: The purchase must be confirmed with a literal `yes`
//! - **Top-up**: Additional amounts are collected until the price is covered
//! - **Dispense**: Stock drops by one and any change is announced
//!
//! # Stock Rules
//!
//! - Stock is checked at selection time; exhausted items cannot be selected
//! - Stock moves only when a purchase completes; abandoning a transaction
//!   at any prompt leaves the catalog unchanged

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use self::core::{Catalog, Session};
pub use types::{Category, Item, ItemId, Purchase, VendingError};
