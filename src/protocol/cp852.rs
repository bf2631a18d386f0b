//! # Code Page 852
//!
//! Central European (Latin-2) DOS character set, ESC/POS page 18.

/// Upper half of CP852: index `i` holds the character printed for byte `0x80 + i`.
pub(super) const UPPER: [char; 128] = [
    // 0x80
    'Ç', 'ü', 'é', 'â', 'ä', 'ů', 'ć', 'ç',
    // 0x88
    'ł', 'ë', 'Ő', 'ő', 'î', 'Ź', 'Ä', 'Ć',
    // 0x90
    'É', 'Ĺ', 'ĺ', 'ô', 'ö', 'Ľ', 'ľ', 'Ś',
    // 0x98
    'ś', 'Ö', 'Ü', 'Ť', 'ť', 'Ł', '×', 'č',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'Ą', 'ą', 'Ž', 'ž',
    // 0xA8
    'Ę', 'ę', '¬', 'ź', 'Č', 'ş', '«', '»',
    // 0xB0: shade blocks, box drawing
    '░', '▒', '▓', '│', '┤', 'Á', 'Â', 'Ě',
    // 0xB8
    'Ş', '╣', '║', '╗', '╝', 'Ż', 'ż', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', 'Ă', 'ă',
    // 0xC8
    '╚', '╔', '╩', '╦', '╠', '═', '╬', '¤',
    // 0xD0
    'đ', 'Đ', 'Ď', 'Ë', 'ď', 'Ň', 'Í', 'Î',
    // 0xD8
    'ě', '┘', '┌', '█', '▄', 'Ţ', 'Ů', '▀',
    // 0xE0
    'Ó', 'ß', 'Ô', 'Ń', 'ń', 'ň', 'Š', 'š',
    // 0xE8
    'Ŕ', 'Ú', 'ŕ', 'Ű', 'ý', 'Ý', 'ţ', '´',
    // 0xF0: soft hyphen, diacritics
    '\u{00AD}', '˝', '˛', 'ˇ', '˘', '§', '÷', '¸',
    // 0xF8
    '°', '¨', '˙', 'ű', 'Ř', 'ř', '■', '\u{00A0}',
];

#[cfg(test)]
mod tests {
    use super::super::codepage::CodePage;

    fn encode(s: &str) -> Vec<u8> {
        CodePage::Pc852.encode(s).unwrap()
    }

    #[test]
    fn test_czech_letters() {
        assert_eq!(encode("č"), vec![0x9F]);
        assert_eq!(encode("ž"), vec![0xA7]);
        assert_eq!(encode("ř"), vec![0xFD]);
        assert_eq!(encode("ů"), vec![0x85]);
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            encode("Příliš žluťoučký kůň"),
            vec![
                0x50, 0xFD, 0xA1, 0x6C, 0x69, 0xE7, 0x20, 0xA7, 0x6C, 0x75, 0x9C, 0x6F, 0x75, 0x9F,
                0x6B, 0xEC, 0x20, 0x6B, 0x85, 0xE5,
            ]
        );
    }

    #[test]
    fn test_shared_with_cp437() {
        assert_eq!(encode("é"), vec![0x82]);
        assert_eq!(encode("ß"), vec![0xE1]);
        assert_eq!(encode("═"), vec![0xCD]);
    }

    #[test]
    fn test_no_spanish_tilde() {
        assert!(CodePage::Pc852.encode("ñ").is_err());
    }
}
