//! # Code Page 437
//!
//! IBM PC character set (U.S.A., Standard Europe), ESC/POS page 0.
//! Reference: IBM Code Page 437 character set.

/// Upper half of CP437: index `i` holds the character printed for byte `0x80 + i`.
pub(super) const UPPER: [char; 128] = [
    // 0x80: accented uppercase/lowercase
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç',
    // 0x88
    'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù',
    // 0x98: currency, ƒ
    'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0: Spanish, fractions, punctuation
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º',
    // 0xA8
    '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0: shade blocks, box drawing
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖',
    // 0xB8
    '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟',
    // 0xC8
    '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫',
    // 0xD8: block elements
    '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0: Greek letters and math
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ',
    // 0xE8
    'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈',
    // 0xF8
    '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

#[cfg(test)]
mod tests {
    use super::super::codepage::CodePage;

    fn encode(s: &str) -> Vec<u8> {
        CodePage::Pc437.encode(s).unwrap()
    }

    #[test]
    fn test_accented_latin() {
        assert_eq!(encode("ñ"), vec![0xA4]);
        assert_eq!(encode("é"), vec![0x82]);
        assert_eq!(encode("ü"), vec![0x81]);
    }

    #[test]
    fn test_spanish_text() {
        // "¿Qué?" → ¿=0xA8, Q=0x51, u=0x75, é=0x82, ?=0x3F
        assert_eq!(encode("¿Qué?"), vec![0xA8, 0x51, 0x75, 0x82, 0x3F]);
    }

    #[test]
    fn test_box_frame() {
        assert_eq!(encode("┌──┐"), vec![0xDA, 0xC4, 0xC4, 0xBF]);
        assert_eq!(encode("╔═╗"), vec![0xC9, 0xCD, 0xBB]);
    }

    #[test]
    fn test_math_symbols() {
        assert_eq!(encode("°±²π"), vec![0xF8, 0xF1, 0xFD, 0xE3]);
    }

    #[test]
    fn test_latin2_letters_missing() {
        assert!(CodePage::Pc437.encode("č").is_err());
    }
}
