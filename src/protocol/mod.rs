//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS protocol
//! used by Epson-compatible thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, feed, code page select)
//! - [`text`]: Text styling (alignment, fonts, bold, underline, print mode, margins)
//! - [`codepage`]: Unicode to single-byte code page conversion
//!
//! ## Usage Example
//!
//! ```
//! use etp::protocol::{codepage::CodePage, commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(CodePage::Pc852.select());
//! data.extend(text::align_center());
//! data.extend(text::bold_on());
//! data.extend(CodePage::Pc852.encode("ÚČTENKA\r\n")?);
//! data.extend(text::bold_off());
//! data.extend(commands::print_and_feed(3));
//! # Ok::<(), etp::EtpError>(())
//! ```
//!
//! Every builder returns final device bytes. None of them performs character
//! set conversion; only [`codepage`] does.

pub mod codepage;
pub mod commands;
mod cp437;
mod cp852;
pub mod text;
