//! # ESC/POS Text Styling Commands
//!
//! This module implements text formatting commands for ESC/POS printers.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Bold | ESC E n | **Emphasized** text |
//! | Double | ESC G n | Double size (double strike) text |
//! | Underline | ESC - n | 1 or 2 dot underline |
//! | Print mode | ESC ! n | Font, bold, width, height, underline in one byte |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```
//!
//! Parameterized commands with an enumerated range take a typed enum. The
//! `*_mode` variants accept a raw byte and reject values outside the range.

use super::commands::{ESC, GS, i16_le};
use crate::error::{EtpError, Result};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl TryFrom<u8> for Alignment {
    type Error = EtpError;

    fn try_from(n: u8) -> Result<Self> {
        match n {
            0 => Ok(Self::Left),
            1 => Ok(Self::Center),
            2 => Ok(Self::Right),
            _ => Err(EtpError::InvalidCommand(format!("unknown align mode {}", n))),
        }
    }
}

/// # Select Justification (ESC a n)
///
/// Aligns all data in one line. Only takes effect at the beginning of a line.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Example
///
/// ```
/// use etp::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

/// Alignment from a raw mode byte (0: left, 1: center, 2: right)
pub fn align_mode(n: u8) -> Result<Vec<u8>> {
    Alignment::try_from(n).map(align)
}

/// Convenience function for left alignment
#[inline]
pub fn align_left() -> Vec<u8> {
    align(Alignment::Left)
}

/// Convenience function for center alignment
#[inline]
pub fn align_center() -> Vec<u8> {
    align(Alignment::Center)
}

/// Convenience function for right alignment
#[inline]
pub fn align_right() -> Vec<u8> {
    align(Alignment::Right)
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Available fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Font A: 12×24 dots
    #[default]
    A = 0,
    /// Font B: 9×17 dots
    B = 1,
}

impl TryFrom<u8> for Font {
    type Error = EtpError;

    fn try_from(n: u8) -> Result<Self> {
        match n {
            0 => Ok(Self::A),
            1 => Ok(Self::B),
            _ => Err(EtpError::InvalidCommand(format!("unknown font type {}", n))),
        }
    }
}

/// # Select Character Font (ESC M n)
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC M n |
/// | Hex     | 1B 4D n |
/// | Decimal | 27 77 n |
///
/// ## Example
///
/// ```
/// use etp::protocol::text::{font, Font};
///
/// assert_eq!(font(Font::B), vec![0x1B, 0x4D, 0x01]);
/// ```
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f as u8]
}

/// Font from a raw byte (0: font A, 1: font B)
pub fn font_mode(n: u8) -> Result<Vec<u8>> {
    Font::try_from(n).map(font)
}

/// Print following text using font A
#[inline]
pub fn font_a() -> Vec<u8> {
    font(Font::A)
}

/// Print following text using font B
#[inline]
pub fn font_b() -> Vec<u8> {
    font(Font::B)
}

// ============================================================================
// TEXT EMPHASIS (BOLD)
// ============================================================================

/// # Turn Emphasized Mode On (ESC E 1)
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC E 1  |
/// | Hex     | 1B 45 01 |
/// | Decimal | 27 69 1  |
///
/// ## Example
///
/// ```
/// use etp::protocol::text::{bold_on, bold_off};
///
/// let mut data = Vec::new();
/// data.extend(bold_on());
/// data.extend(b"IMPORTANT");
/// data.extend(bold_off());
/// ```
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E', 1]
}

/// Turn emphasized mode off (ESC E 0)
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'E', 0]
}

// ============================================================================
// DOUBLE SIZE
// ============================================================================

/// # Turn Double Mode On (ESC G 1)
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC G 1  |
/// | Hex     | 1B 47 01 |
/// | Decimal | 27 71 1  |
///
/// Not every model implements this command; see [`crate::printer`].
#[inline]
pub fn double_on() -> Vec<u8> {
    vec![ESC, b'G', 1]
}

/// Turn double mode off (ESC G 0)
#[inline]
pub fn double_off() -> Vec<u8> {
    vec![ESC, b'G', 0]
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// Underline thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Underline {
    #[default]
    Off = 0,
    OneDot = 1,
    TwoDot = 2,
}

impl TryFrom<u8> for Underline {
    type Error = EtpError;

    fn try_from(n: u8) -> Result<Self> {
        match n {
            0 => Ok(Self::Off),
            1 => Ok(Self::OneDot),
            2 => Ok(Self::TwoDot),
            _ => Err(EtpError::InvalidCommand(format!(
                "unknown underline mode {}",
                n
            ))),
        }
    }
}

/// # Turn Underline Mode On/Off (ESC - n)
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC - n |
/// | Hex     | 1B 2D n |
/// | Decimal | 27 45 n |
///
/// ## Parameters
///
/// - `n = 0`: underline off
/// - `n = 1`: one-dot thick underline
/// - `n = 2`: two-dot thick underline
pub fn underline(mode: Underline) -> Vec<u8> {
    vec![ESC, b'-', mode as u8]
}

/// Underline from a raw mode byte
pub fn underline_mode(n: u8) -> Result<Vec<u8>> {
    Underline::try_from(n).map(underline)
}

/// Print following text with underline 1 dot
#[inline]
pub fn underline_on() -> Vec<u8> {
    underline(Underline::OneDot)
}

/// Print following text with underline 2 dot
#[inline]
pub fn underline_double() -> Vec<u8> {
    underline(Underline::TwoDot)
}

/// Print following text without underline
#[inline]
pub fn underline_off() -> Vec<u8> {
    underline(Underline::Off)
}

// ============================================================================
// PRINT MODE
// ============================================================================

/// Font B bit of the `ESC !` mode byte. Font A is the cleared bit.
const MODE_FONT_B: u8 = 1;
const MODE_BOLD: u8 = 1 << 3;
const MODE_DOUBLE_HEIGHT: u8 = 1 << 4;
const MODE_DOUBLE_WIDTH: u8 = 1 << 5;
const MODE_UNDERLINE: u8 = 1 << 7;

/// # Select Print Mode (ESC ! n)
///
/// Builds the mode byte from a string of option characters:
///
/// | Char | Meaning | Bit |
/// |------|---------|-----|
/// | `A` | font A | - |
/// | `B` | font B | 0 |
/// | `b` | bold | 3 |
/// | `h` | double height | 4 |
/// | `w` | double width | 5 |
/// | `u` | underline | 7 |
///
/// Exactly one of `A`/`B` must be present and no character may repeat.
///
/// ## Example
///
/// ```
/// use etp::protocol::text::print_mode;
///
/// assert_eq!(print_mode("Bb").unwrap(), vec![0x1B, 0x21, 0x09]);
/// assert!(print_mode("AB").is_err());
/// ```
pub fn print_mode(options: &str) -> Result<Vec<u8>> {
    let mut used: Vec<char> = Vec::with_capacity(options.len());
    let mut mode = 0u8;

    for c in options.chars() {
        if used.contains(&c) {
            return Err(mode_error(format!("duplicate '{}'", c)));
        }
        match c {
            'A' => {
                if used.contains(&'B') {
                    return Err(mode_error("already selected font B".to_string()));
                }
            }
            'B' => {
                if used.contains(&'A') {
                    return Err(mode_error("already selected font A".to_string()));
                }
                mode |= MODE_FONT_B;
            }
            'b' => mode |= MODE_BOLD,
            'h' => mode |= MODE_DOUBLE_HEIGHT,
            'w' => mode |= MODE_DOUBLE_WIDTH,
            'u' => mode |= MODE_UNDERLINE,
            _ => return Err(mode_error(format!("unknown '{}'", c))),
        }
        used.push(c);
    }

    if !used.contains(&'A') && !used.contains(&'B') {
        return Err(mode_error("no font selected".to_string()));
    }
    Ok(vec![ESC, b'!', mode])
}

fn mode_error(msg: String) -> EtpError {
    EtpError::InvalidCommand(msg)
}

// ============================================================================
// LAYOUT
// ============================================================================

/// # Set Left Margin (GS L nL nH)
///
/// ## Protocol Details
///
/// | Format  | Bytes         |
/// |---------|---------------|
/// | ASCII   | GS L nL nH    |
/// | Hex     | 1D 4C nL nH   |
/// | Decimal | 29 76 nL nH   |
///
/// ## Example
///
/// ```
/// use etp::protocol::text::margin_left;
///
/// assert_eq!(margin_left(300), vec![0x1D, 0x4C, 0x2C, 0x01]);
/// ```
pub fn margin_left(n: i16) -> Vec<u8> {
    let [lo, hi] = i16_le(n);
    vec![GS, b'L', lo, hi]
}

/// # Set Print Region Width (GS W nL nH)
///
/// | Format  | Bytes         |
/// |---------|---------------|
/// | Hex     | 1D 57 nL nH   |
pub fn print_region_width(n: i16) -> Vec<u8> {
    let [lo, hi] = i16_le(n);
    vec![GS, b'W', lo, hi]
}

// ============================================================================
// TESTS
// ============================================================================
