//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `item`: Item records, identifiers and menu categories
//! - `purchase`: Completed-purchase records
//! - `error`: Error types for the vending machine

pub mod error;
pub mod item;
pub mod purchase;

pub use error::VendingError;
pub use item::{Category, Item, ItemId};
pub use purchase::Purchase;
