//! # ESC/POS Basic Commands
//!
//! This module implements the basic ESC/POS commands used by Epson-compatible
//! thermal receipt printers (TM-T88IV, TM-T20, TM-T70, etc.).
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `CR`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC d n`, `GS L nL nH`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - value 0x012C is sent as bytes `[0x2C, 0x01]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B). This byte signals the start
/// of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for layout commands such as left margin and print region width.
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

/// CR (Carriage Return)
///
/// With auto line feed disabled (the default), CR prints the buffer without
/// advancing the paper.
pub const CR: u8 = 0x0D;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets the printer modes to their power-on
/// defaults.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Bold, underline, double strike disabled
/// - Alignment reset to left
/// - Character code table reset to page 0 (PC437)
///
/// ## Example
///
/// ```
/// use etp::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Select Character Code Table (ESC t n)
///
/// Selects page `n` of the character code table. Bytes 0x80–0xFF of
/// subsequent text are rendered using the selected page.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC t n  |
/// | Hex     | 1B 74 n  |
/// | Decimal | 27 116 n |
///
/// ## Common Pages
///
/// | n  | Page |
/// |----|------|
/// | 0  | PC437 (U.S.A., Standard Europe) |
/// | 2  | PC850 (Multilingual) |
/// | 16 | WPC1252 |
/// | 18 | PC852 (Latin 2) |
/// | 19 | PC858 (Euro) |
///
/// The selection stays valid until `ESC @`, a reset, or power off.
#[inline]
pub fn select_code_page(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// Print and carriage return (CR)
#[inline]
pub fn cr() -> Vec<u8> {
    vec![CR]
}

/// Line feed (LF)
#[inline]
pub fn lf() -> Vec<u8> {
    vec![LF]
}

/// # Print and Feed n Lines (ESC d n)
///
/// Prints the data in the buffer and feeds the paper `n` lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC d n  |
/// | Hex     | 1B 64 n  |
/// | Decimal | 27 100 n |
///
/// ## Example
///
/// ```
/// use etp::protocol::commands;
///
/// assert_eq!(commands::print_and_feed(3), vec![0x1B, 0x64, 0x03]);
/// ```
#[inline]
pub fn print_and_feed(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode an i16 value as little-endian bytes [low, high]
///
/// Negative values are sent in two's complement, the way the printer reads
/// its `nL nH` parameter pairs.
///
/// ## Example
///
/// ```
/// use etp::protocol::commands::i16_le;
///
/// assert_eq!(i16_le(300), [0x2C, 0x01]);
/// assert_eq!(i16_le(-1), [0xFF, 0xFF]);
/// ```
#[inline]
pub const fn i16_le(value: i16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_cr_lf() {
        assert_eq!(cr(), vec![0x0D]);
        assert_eq!(lf(), vec![0x0A]);
    }

    #[test]
    fn test_print_and_feed() {
        assert_eq!(print_and_feed(0), vec![0x1B, 0x64, 0x00]);
        assert_eq!(print_and_feed(5), vec![0x1B, 0x64, 0x05]);
        assert_eq!(print_and_feed(255), vec![0x1B, 0x64, 0xFF]);
    }

    #[test]
    fn test_select_code_page() {
        assert_eq!(select_code_page(18), vec![0x1B, 0x74, 0x12]);
        assert_eq!(select_code_page(0), vec![0x1B, 0x74, 0x00]);
    }

    #[test]
    fn test_i16_le() {
        assert_eq!(i16_le(0), [0x00, 0x00]);
        assert_eq!(i16_le(0x00FF), [0xFF, 0x00]);
        assert_eq!(i16_le(300), [0x2C, 0x01]);
        assert_eq!(i16_le(0x1234), [0x34, 0x12]);
        assert_eq!(i16_le(i16::MAX), [0xFF, 0x7F]);
        assert_eq!(i16_le(i16::MIN), [0x00, 0x80]);
        assert_eq!(i16_le(-2), [0xFE, 0xFF]);
    }
}
