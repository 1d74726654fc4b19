//! Catalog management module
//!
//! This module provides the `Catalog` struct which maintains the machine's
//! item records and provides operations for lookup and stock mutation.
//!
//! The Catalog is responsible for:
//! - Holding item records keyed by identifier
//! - Preserving the listing order items were loaded in
//! - Grouping items by category for menu rendering
//! - Decrementing stock when a purchase completes

use crate::types::{Category, Item, ItemId, VendingError};
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Holds all item records and their stock levels
///
/// The Catalog maintains an in-memory map of item identifiers to item
/// records, plus the identifiers in load order so menu listings stay
/// stable across renders (HashMap iteration order is arbitrary).
pub struct Catalog {
    /// Map of item identifiers to item records
    items: HashMap<ItemId, Item>,

    /// Identifiers in the order items were first inserted
    order: Vec<ItemId>,
}

impl Catalog {
    /// Create a new Catalog with no items
    pub fn new() -> Self {
        Catalog {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a Catalog stocked with the factory planogram
    ///
    /// Seven snacks (A1-A7) and seven drinks (B1-B7), with the prices and
    /// starting stock the machine ships with. Prices are in AED.
    pub fn factory_default() -> Self {
        let mut catalog = Catalog::new();

        catalog.insert(Item::new("A1", "Lays Chips", dec!(1.50), 7, Category::Snacks));
        catalog.insert(Item::new("A2", "Oreo Cookies", dec!(2.75), 5, Category::Snacks));
        catalog.insert(Item::new("A3", "KitKat", dec!(1.50), 8, Category::Snacks));
        catalog.insert(Item::new("A4", "Cheetos Chips", dec!(3.70), 5, Category::Snacks));
        catalog.insert(Item::new("A5", "Mcvities Biscuits", dec!(4.00), 9, Category::Snacks));
        catalog.insert(Item::new("A6", "Cadbury Dairy Milk", dec!(2.50), 6, Category::Snacks));
        catalog.insert(Item::new("A7", "M&M Chocolate", dec!(2.75), 5, Category::Snacks));

        catalog.insert(Item::new("B1", "Coco Cola", dec!(2.50), 8, Category::Drinks));
        catalog.insert(Item::new("B2", "Sparkling Water", dec!(1.25), 10, Category::Drinks));
        catalog.insert(Item::new("B3", "Melco Mango Juice", dec!(1.50), 7, Category::Drinks));
        catalog.insert(Item::new("B4", "Pepsi", dec!(2.50), 9, Category::Drinks));
        catalog.insert(Item::new("B5", "Cold Coffee", dec!(4.50), 8, Category::Drinks));
        catalog.insert(Item::new("B6", "Red Bull", dec!(5.00), 6, Category::Drinks));
        catalog.insert(Item::new("B7", "Water", dec!(1.00), 6, Category::Drinks));

        catalog
    }

    /// Insert an item record
    ///
    /// A new identifier is appended to the listing order; inserting an
    /// identifier that already exists replaces its record in place
    /// without changing where it appears on the menu.
    pub fn insert(&mut self, item: Item) {
        let id = item.id.clone();
        if self.items.insert(id.clone(), item).is_none() {
            self.order.push(id);
        }
    }

    /// Look up an item by identifier
    ///
    /// # Arguments
    ///
    /// * `id` - The item identifier to look up (already uppercased)
    ///
    /// # Returns
    ///
    /// A reference to the item, or `None` if no item has that identifier
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Number of items in the catalog
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all items in load order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Group items by category for menu rendering
    ///
    /// Returns one entry per category in the fixed [`Category::ALL`]
    /// display order, each holding that category's items in load order.
    /// Categories with no items are still present, with an empty list.
    pub fn grouped_by_category(&self) -> Vec<(Category, Vec<&Item>)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let members = self.items().filter(|item| item.category == category).collect();
                (category, members)
            })
            .collect()
    }

    /// Remove one unit of stock from an item
    ///
    /// Called exactly once per completed purchase, after payment has been
    /// settled. Uses checked arithmetic so stock can never go negative.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier of the item that was bought
    ///
    /// # Returns
    ///
    /// * `Ok(remaining)` - The stock count left after the decrement
    /// * `Err(VendingError)` - If the item is unknown or already exhausted
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No item has the given identifier
    /// - The item's stock is already zero
    pub fn decrement_stock(&mut self, id: &str) -> Result<u32, VendingError> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| VendingError::invalid_selection(id))?;

        let remaining = item
            .stock
            .checked_sub(1)
            .ok_or_else(|| VendingError::out_of_stock(&item.name))?;

        item.stock = remaining;
        Ok(remaining)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snack(id: &str, stock: u32) -> Item {
        Item::new(id, "Test Snack", dec!(1.50), stock, Category::Snacks)
    }

    #[test]
    fn test_new_creates_empty_catalog() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
        assert!(catalog.get("A1").is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let mut catalog = Catalog::new();
        catalog.insert(snack("A1", 3));

        let item = catalog.get("A1").unwrap();
        assert_eq!(item.id, "A1");
        assert_eq!(item.name, "Test Snack");
        assert_eq!(item.price, dec!(1.50));
        assert_eq!(item.stock, 3);
        assert_eq!(item.category, Category::Snacks);
    }

    #[test]
    fn test_insert_replaces_existing_identifier() {
        let mut catalog = Catalog::new();
        catalog.insert(snack("A1", 3));
        catalog.insert(snack("A1", 9));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("A1").unwrap().stock, 9);

        // The replaced item keeps its single menu slot
        let grouped = catalog.grouped_by_category();
        assert_eq!(grouped[0].1.len(), 1);
    }

    #[test]
    fn test_items_iterates_in_load_order() {
        let mut catalog = Catalog::new();
        catalog.insert(Item::new("B1", "Cola", dec!(2.50), 8, Category::Drinks));
        catalog.insert(snack("A2", 4));
        catalog.insert(snack("A1", 4));

        let ids: Vec<&str> = catalog.items().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["B1", "A2", "A1"]);
    }

    #[test]
    fn test_grouped_by_category_orders_snacks_before_drinks() {
        let mut catalog = Catalog::new();

        // Insert a drink first to show grouping ignores insertion order
        // across categories
        catalog.insert(Item::new("B1", "Cola", dec!(2.50), 8, Category::Drinks));
        catalog.insert(Item::new("A1", "Chips", dec!(1.50), 7, Category::Snacks));

        let grouped = catalog.grouped_by_category();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, Category::Snacks);
        assert_eq!(grouped[0].1[0].id, "A1");
        assert_eq!(grouped[1].0, Category::Drinks);
        assert_eq!(grouped[1].1[0].id, "B1");
    }

    #[test]
    fn test_grouped_by_category_preserves_load_order_within_category() {
        let mut catalog = Catalog::new();
        catalog.insert(snack("A3", 1));
        catalog.insert(snack("A1", 1));
        catalog.insert(snack("A2", 1));

        let grouped = catalog.grouped_by_category();
        let ids: Vec<&str> = grouped[0].1.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["A3", "A1", "A2"]);
    }

    #[test]
    fn test_grouped_by_category_includes_empty_categories() {
        let mut catalog = Catalog::new();
        catalog.insert(snack("A1", 1));

        let grouped = catalog.grouped_by_category();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[1].0, Category::Drinks);
        assert!(grouped[1].1.is_empty());
    }

    #[test]
    fn test_decrement_stock_returns_remaining() {
        let mut catalog = Catalog::new();
        catalog.insert(snack("A1", 3));

        let remaining = catalog.decrement_stock("A1").unwrap();

        assert_eq!(remaining, 2);
        assert_eq!(catalog.get("A1").unwrap().stock, 2);
    }

    #[test]
    fn test_decrement_stock_at_zero_is_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(snack("A1", 1));

        assert_eq!(catalog.decrement_stock("A1").unwrap(), 0);

        let result = catalog.decrement_stock("A1");
        assert!(matches!(
            result.unwrap_err(),
            VendingError::OutOfStock { .. }
        ));

        // Stock must stay at zero, never wrap
        assert_eq!(catalog.get("A1").unwrap().stock, 0);
    }

    #[test]
    fn test_decrement_stock_unknown_identifier() {
        let mut catalog = Catalog::new();

        let result = catalog.decrement_stock("Z9");
        assert!(matches!(
            result.unwrap_err(),
            VendingError::InvalidSelection { .. }
        ));
    }

    #[test]
    fn test_factory_default_planogram() {
        let catalog = Catalog::factory_default();

        assert_eq!(catalog.len(), 14);

        let chips = catalog.get("A1").unwrap();
        assert_eq!(chips.name, "Lays Chips");
        assert_eq!(chips.price, dec!(1.50));
        assert_eq!(chips.stock, 7);
        assert_eq!(chips.category, Category::Snacks);

        let water = catalog.get("B7").unwrap();
        assert_eq!(water.name, "Water");
        assert_eq!(water.price, dec!(1.00));
        assert_eq!(water.stock, 6);
        assert_eq!(water.category, Category::Drinks);

        let grouped = catalog.grouped_by_category();
        let snack_ids: Vec<&str> = grouped[0].1.iter().map(|item| item.id.as_str()).collect();
        let drink_ids: Vec<&str> = grouped[1].1.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(snack_ids, vec!["A1", "A2", "A3", "A4", "A5", "A6", "A7"]);
        assert_eq!(drink_ids, vec!["B1", "B2", "B3", "B4", "B5", "B6", "B7"]);
    }
}
