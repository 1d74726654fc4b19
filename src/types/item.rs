//! Item-related types for the vending machine
//!
//! This module defines the item record held by the catalog and the fixed
//! category enumeration used to group items on the menu.

use rust_decimal::Decimal;
use std::fmt;

/// Item identifier
///
/// Short unique string key such as "A1" or "B7". Selection input is
/// uppercased before lookup, so identifiers are stored uppercase.
pub type ItemId = String;

/// Fixed set of menu categories
///
/// The menu renders categories in the order given by [`Category::ALL`];
/// that order is configuration, never derived from the catalog contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Shelf rows (the "A" identifiers)
    Snacks,

    /// Chilled rows (the "B" identifiers)
    Drinks,
}

impl Category {
    /// All categories in their fixed display order: Snacks before Drinks.
    pub const ALL: [Category; 2] = [Category::Snacks, Category::Drinks];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Snacks => "Snacks",
            Category::Drinks => "Drinks",
        };
        f.write_str(name)
    }
}

/// One purchasable item slot
///
/// Created once at catalog construction; only the stock count is ever
/// mutated afterwards (decremented by exactly 1 per completed purchase).
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique identifier, e.g. "A1"
    pub id: ItemId,

    /// Display name shown on the menu and in purchase messages
    pub name: String,

    /// Unit price in AED, fixed at construction time
    ///
    /// Non-negative by convention; prices are configuration data, not
    /// user input.
    pub price: Decimal,

    /// Remaining units; never goes negative (u32 plus checked decrement)
    pub stock: u32,

    /// Menu category this item is listed under
    pub category: Category,
}

impl Item {
    /// Create a new item record
    pub fn new(id: &str, name: &str, price: Decimal, stock: u32, category: Category) -> Self {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            price,
            stock,
            category,
        }
    }

    /// Whether at least one unit remains
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
