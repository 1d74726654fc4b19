//! Console seam for prompting and line-oriented input
//!
//! Wraps the session's input and output streams behind a small API so the
//! interactive loop never touches stdin/stdout directly.
//!
//! # Design
//!
//! The Console is generic over `BufRead` and `Write`, which keeps the
//! production wiring (locked stdin/stdout) and the test wiring (byte
//! slices in, `Vec<u8>` out) identical in shape. Prompts are written
//! without a trailing newline and flushed before reading, so the cursor
//! sits on the prompt line exactly as a customer at the machine sees it.
//!
//! # Error Handling
//!
//! - End-of-file while a prompt is waiting yields `VendingError::InputClosed`
//! - Read and write failures surface as `VendingError::Io`
//! - Responses are trimmed; surrounding whitespace is never significant

use crate::types::VendingError;
use std::io::{BufRead, Write};

/// Line-oriented console over arbitrary input/output streams
///
/// # Examples
///
/// ```
/// use vending_machine::io::console::Console;
///
/// let input = b"A1\n" as &[u8];
/// let mut console = Console::new(input, Vec::new());
///
/// let selection = console.prompt("Enter the item ID: ").unwrap();
/// assert_eq!(selection, "A1");
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a new Console over the given streams
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Write a prompt and read the response line
    ///
    /// The prompt is written without a newline and the output is flushed
    /// so the text is visible before the read blocks.
    ///
    /// # Arguments
    ///
    /// * `text` - The prompt text, including any trailing spacing
    ///
    /// # Returns
    ///
    /// The response line with surrounding whitespace trimmed
    ///
    /// # Errors
    ///
    /// Returns `VendingError::InputClosed` if the input stream is
    /// exhausted, or `VendingError::Io` if reading or writing fails.
    pub fn prompt(&mut self, text: &str) -> Result<String, VendingError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line from the input stream
    ///
    /// # Errors
    ///
    /// Returns `VendingError::InputClosed` on end-of-file.
    pub fn read_line(&mut self) -> Result<String, VendingError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(VendingError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Write a full line to the output stream
    pub fn write_line(&mut self, text: &str) -> Result<(), VendingError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Borrow the underlying writer, for block rendering
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }
}
