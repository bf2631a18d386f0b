//! Byte-carrying strings.
//!
//! The template engine works on `String`. Device bytes travel through it one
//! char per byte and are turned back into bytes once the render is complete.
//! ASCII bytes are carried as themselves. Bytes 0x80–0xFF are carried in the
//! private-use block U+E080–U+E0FF, so no encoded letter is ever whitespace
//! to the engine (0x85 and 0xA0 would be, as U+0085 and U+00A0).

/// First carrier char; byte `b >= 0x80` travels as `CARRIER_BASE + b`
const CARRIER_BASE: u32 = 0xE000;

/// Carry `bytes` as a string, one char per byte.
pub fn from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| carry(b)).collect()
}

/// Recover the carried bytes. Fails with the first char that is not a carrier.
pub fn to_bytes(s: &str) -> Result<Vec<u8>, char> {
    s.chars().map(|c| uncarry(c).ok_or(c)).collect()
}

fn carry(b: u8) -> char {
    if b.is_ascii() {
        char::from(b)
    } else {
        char::from_u32(CARRIER_BASE + u32::from(b)).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

fn uncarry(c: char) -> Option<u8> {
    match u32::from(c) {
        n @ 0x00..=0x7F => u8::try_from(n).ok(),
        n @ 0xE080..=0xE0FF => u8::try_from(n - CARRIER_BASE).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_bytes_survive() {
        let bytes = vec![0x1B, 0x40, 0x9F, 0xFF, 0x00];
        let carried = from_bytes(&bytes);
        assert_eq!(carried.chars().count(), 5);
        assert_eq!(to_bytes(&carried).unwrap(), bytes);
    }

    #[test]
    fn test_no_carrier_is_whitespace() {
        let all: Vec<u8> = (0x80..=0xFF).collect();
        assert!(from_bytes(&all).chars().all(|c| !c.is_whitespace()));
        assert_eq!(from_bytes(&[0x85, 0xA0]), "\u{e085}\u{e0a0}");
    }

    #[test]
    fn test_wide_char_rejected() {
        assert_eq!(to_bytes("ok č"), Err('č'));
    }

    #[test]
    fn test_latin1_char_rejected() {
        assert_eq!(to_bytes("a\u{a0}"), Err('\u{a0}'));
    }
}
