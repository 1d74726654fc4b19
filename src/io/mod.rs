//! I/O module
//!
//! Handles console input and terminal rendering.
//!
//! # Components
//!
//! - `console` - Line-oriented prompt/response seam over BufRead + Write
//! - `display` - Banner and menu rendering, amount parsing

pub mod console;
pub mod display;

pub use console::Console;
pub use display::{parse_amount, write_banner, write_menu};
