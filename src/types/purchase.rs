//! Completed-purchase record
//!
//! A [`Purchase`] is produced only after payment has covered the price and
//! stock has been decremented; abandoned transactions never create one.

use rust_decimal::Decimal;

use crate::types::ItemId;

/// Outcome of one completed purchase
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    /// Identifier of the item bought
    pub item_id: ItemId,

    /// Item name, captured for the thank-you and change messages
    pub name: String,

    /// Unit price charged
    pub price: Decimal,

    /// Total amount tendered across the initial payment and all top-ups
    pub tendered: Decimal,

    /// Amount returned to the customer: `tendered - price`
    pub change: Decimal,
}

impl Purchase {
    /// Create a purchase record, computing the change owed
    ///
    /// Callers must only invoke this once `tendered >= price`; the payment
    /// loop enforces that, so `change` is always non-negative.
    pub fn new(item_id: &str, name: &str, price: Decimal, tendered: Decimal) -> Self {
        Purchase {
            item_id: item_id.to_string(),
            name: name.to_string(),
            price,
            tendered,
            change: tendered - price,
        }
    }

    /// Whether the exact price was tendered, leaving no change
    pub fn is_exact(&self) -> bool {
        self.change.is_zero()
    }
}
