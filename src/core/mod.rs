//! Core business logic module
//!
//! This module contains the core vending components:
//! - `catalog` - Item records, grouping and stock operations
//! - `session` - The interactive transaction loop

pub mod catalog;
pub mod session;

pub use catalog::Catalog;
pub use session::Session;
