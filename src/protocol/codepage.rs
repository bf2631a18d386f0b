//! # Character Code Tables
//!
//! Converts Unicode text to the single-byte code page selected on the printer
//! with `ESC t n`. ASCII (U+0000–U+007F) passes through unchanged; the upper
//! half is looked up in the page's table. Characters the page cannot print
//! are an error, never a silent substitution.

use std::fmt;
use std::str::FromStr;

use super::{commands, cp437, cp852};
use crate::error::{EtpError, Result};

/// A printer code page the encoder can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodePage {
    /// Page 0: PC437 (U.S.A., Standard Europe)
    Pc437,
    /// Page 18: PC852 (Latin 2)
    #[default]
    Pc852,
}

impl CodePage {
    /// All supported code pages
    pub const ALL: [CodePage; 2] = [CodePage::Pc437, CodePage::Pc852];

    /// Human-readable page name
    pub fn name(self) -> &'static str {
        match self {
            Self::Pc437 => "PC437",
            Self::Pc852 => "PC852",
        }
    }

    /// Page number `n` for `ESC t n`
    pub fn page(self) -> u8 {
        match self {
            Self::Pc437 => 0,
            Self::Pc852 => 18,
        }
    }

    /// The `ESC t n` sequence selecting this page
    pub fn select(self) -> Vec<u8> {
        commands::select_code_page(self.page())
    }

    fn upper(self) -> &'static [char; 128] {
        match self {
            Self::Pc437 => &cp437::UPPER,
            Self::Pc852 => &cp852::UPPER,
        }
    }

    /// Map one character to its byte, if the page has it.
    pub fn encode_char(self, ch: char) -> Option<u8> {
        if ch.is_ascii() {
            return Some(ch as u8);
        }
        self.upper()
            .iter()
            .position(|&c| c == ch)
            .map(|i| 0x80 + i as u8)
    }

    /// Encode a Unicode string into this page.
    ///
    /// ## Example
    ///
    /// ```
    /// use etp::protocol::codepage::CodePage;
    ///
    /// assert_eq!(CodePage::Pc852.encode("Čaj").unwrap(), vec![0xAC, 0x61, 0x6A]);
    /// assert!(CodePage::Pc852.encode("★").is_err());
    /// ```
    pub fn encode(self, s: &str) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(s.len());
        for ch in s.chars() {
            let byte = self.encode_char(ch).ok_or(EtpError::Encoding {
                ch,
                code_page: self.name(),
            })?;
            out.push(byte);
        }
        Ok(out)
    }

    /// Decode bytes of this page back to Unicode. Every byte has a character.
    pub fn decode(self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|&b| {
                if b < 0x80 {
                    b as char
                } else {
                    self.upper()[(b - 0x80) as usize]
                }
            })
            .collect()
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodePage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pc437" | "cp437" | "437" => Ok(Self::Pc437),
            "pc852" | "cp852" | "852" | "latin2" => Ok(Self::Pc852),
            _ => Err(format!(
                "Unknown code page '{}'. Use 'pc852' or 'pc437'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        for page in CodePage::ALL {
            assert_eq!(page.encode("Hello, world!").unwrap(), b"Hello, world!");
            assert_eq!(page.encode("\x1b\r\n").unwrap(), b"\x1b\r\n");
        }
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(CodePage::Pc852.encode("").unwrap(), b"");
    }

    #[test]
    fn test_unmapped_char_fails() {
        let err = CodePage::Pc852.encode("a★b").unwrap_err();
        match err {
            EtpError::Encoding { ch, code_page } => {
                assert_eq!(ch, '★');
                assert_eq!(code_page, "PC852");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_inverts_encode() {
        for page in CodePage::ALL {
            let all: Vec<u8> = (0..=255).collect();
            let text = page.decode(&all);
            assert_eq!(page.encode(&text).unwrap(), all);
        }
    }

    #[test]
    fn test_select() {
        assert_eq!(CodePage::Pc852.select(), vec![0x1B, 0x74, 0x12]);
        assert_eq!(CodePage::Pc437.select(), vec![0x1B, 0x74, 0x00]);
    }

    #[test]
    fn test_default_is_latin2() {
        assert_eq!(CodePage::default(), CodePage::Pc852);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("cp852".parse::<CodePage>().unwrap(), CodePage::Pc852);
        assert_eq!("Latin2".parse::<CodePage>().unwrap(), CodePage::Pc852);
        assert_eq!("PC437".parse::<CodePage>().unwrap(), CodePage::Pc437);
        assert!("koi8".parse::<CodePage>().is_err());
    }
}
