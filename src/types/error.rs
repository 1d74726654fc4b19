//! Error types for the vending machine
//!
//! This module defines all error types that can occur during a vending
//! session. Error messages double as customer-facing output: for
//! recoverable errors the session prints the message and returns to the
//! menu, so the wording here is part of the console protocol.
//!
//! # Error Categories
//!
//! - **Selection Errors**: Unknown item identifier, item out of stock
//! - **Payment Errors**: Non-numeric amount, customer declining at confirmation
//! - **I/O Errors**: Input stream exhausted, failed terminal writes

use thiserror::Error;

/// Main error type for the vending machine
///
/// Recoverable variants abort the current transaction only; the session
/// reports them and offers the menu again. Fatal variants
/// ([`VendingError::InputClosed`] and [`VendingError::Io`]) end the
/// session with a non-zero exit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VendingError {
    /// Selection did not match any item identifier in the catalog
    ///
    /// This is a recoverable error - the menu is shown again.
    #[error("Invalid selection '{code}'. Please choose a valid item.")]
    InvalidSelection {
        /// The uppercased selection that failed to match
        code: String,
    },

    /// Selected item has zero units remaining
    ///
    /// This is a recoverable error - the menu is shown again.
    #[error("Sorry, {name} is out of stock.")]
    OutOfStock {
        /// Display name of the exhausted item
        name: String,
    },

    /// Customer declined the purchase at the confirmation prompt
    ///
    /// This is a recoverable error - no stock or money moves, and the
    /// session asks whether to make another purchase.
    #[error("Purchase cancelled.")]
    Cancelled,

    /// Payment or top-up input did not parse as a decimal amount
    ///
    /// This is a recoverable error - the transaction is abandoned with
    /// nothing taken, and the menu is shown again.
    #[error("Invalid amount '{input}'. Please enter a numeric value.")]
    InvalidAmount {
        /// The raw input that failed to parse
        input: String,
    },

    /// Input stream reached end-of-file while a prompt was waiting
    ///
    /// This is a fatal error - the session cannot continue without input.
    #[error("input stream closed while awaiting a response")]
    InputClosed,

    /// I/O error occurred while reading input or writing to the terminal
    ///
    /// This is a fatal error.
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to VendingError
impl From<std::io::Error> for VendingError {
    fn from(error: std::io::Error) -> Self {
        VendingError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl VendingError {
    /// Create an InvalidSelection error
    pub fn invalid_selection(code: &str) -> Self {
        VendingError::InvalidSelection {
            code: code.to_string(),
        }
    }

    /// Create an OutOfStock error
    pub fn out_of_stock(name: &str) -> Self {
        VendingError::OutOfStock {
            name: name.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        VendingError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Whether the session can keep running after reporting this error
    ///
    /// Recoverable errors abort at most the current transaction; fatal
    /// ones are propagated out of the session loop.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, VendingError::InputClosed | VendingError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_selection(
        VendingError::InvalidSelection { code: "Z9".to_string() },
        "Invalid selection 'Z9'. Please choose a valid item."
    )]
    #[case::out_of_stock(
        VendingError::OutOfStock { name: "Red Bull".to_string() },
        "Sorry, Red Bull is out of stock."
    )]
    #[case::cancelled(VendingError::Cancelled, "Purchase cancelled.")]
    #[case::invalid_amount(
        VendingError::InvalidAmount { input: "abc".to_string() },
        "Invalid amount 'abc'. Please enter a numeric value."
    )]
    #[case::input_closed(
        VendingError::InputClosed,
        "input stream closed while awaiting a response"
    )]
    #[case::io(
        VendingError::Io { message: "Broken pipe".to_string() },
        "I/O error: Broken pipe"
    )]
    fn test_error_display(#[case] error: VendingError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_selection(
        VendingError::invalid_selection("Z9"),
        VendingError::InvalidSelection { code: "Z9".to_string() }
    )]
    #[case::out_of_stock(
        VendingError::out_of_stock("Water"),
        VendingError::OutOfStock { name: "Water".to_string() }
    )]
    #[case::invalid_amount(
        VendingError::invalid_amount("1.2.3"),
        VendingError::InvalidAmount { input: "1.2.3".to_string() }
    )]
    fn test_helper_functions(#[case] result: VendingError, #[case] expected: VendingError) {
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case::invalid_selection(VendingError::invalid_selection("Z9"), true)]
    #[case::out_of_stock(VendingError::out_of_stock("Water"), true)]
    #[case::cancelled(VendingError::Cancelled, true)]
    #[case::invalid_amount(VendingError::invalid_amount("abc"), true)]
    #[case::input_closed(VendingError::InputClosed, false)]
    #[case::io(VendingError::Io { message: "Broken pipe".to_string() }, false)]
    fn test_recoverability(#[case] error: VendingError, #[case] expected: bool) {
        assert_eq!(error.is_recoverable(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: VendingError = io_error.into();
        assert!(matches!(error, VendingError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
        assert!(!error.is_recoverable());
    }
}
