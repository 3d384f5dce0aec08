// Copyright (c) 2026 rezky_nightky

use std::char;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Charset(u32);

impl Charset {
    pub const NONE: Charset = Charset(0);
    pub const ENGLISH_LETTERS: Charset = Charset(0x1);
    pub const ENGLISH_DIGITS: Charset = Charset(0x2);
    pub const ENGLISH_PUNCTUATION: Charset = Charset(0x4);
    pub const KATAKANA: Charset = Charset(0x8);
    pub const GREEK: Charset = Charset(0x10);
    pub const CYRILLIC: Charset = Charset(0x20);
    pub const BINARY: Charset = Charset(0x40);
    pub const HEX: Charset = Charset(0x80);
    pub const SYMBOLS: Charset = Charset(0x100);

    /// Katakana + digits + symbols, the classic rain look.
    pub const MATRIX: Charset = Charset(0x8 | 0x2 | 0x100);
    /// Letters + digits + punctuation for terminals without wide glyphs.
    pub const ASCII_SAFE: Charset = Charset(0x1 | 0x2 | 0x4);

    pub fn contains(self, other: Charset) -> bool {
        (self.0 & other.0) != 0
    }
}

pub fn charset_from_str(spec: &str, default_to_ascii: bool) -> Result<Charset, String> {
    let spec = spec.trim().to_ascii_lowercase();
    match spec.as_str() {
        "auto" => Ok(if default_to_ascii {
            Charset::ASCII_SAFE
        } else {
            Charset::MATRIX
        }),
        "matrix" => Ok(Charset::MATRIX),
        "ascii" => Ok(Charset::ASCII_SAFE),
        "english" => Ok(Charset::ENGLISH_LETTERS),
        "digits" | "dec" | "decimal" => Ok(Charset::ENGLISH_DIGITS),
        "punc" => Ok(Charset::ENGLISH_PUNCTUATION),
        "bin" | "binary" | "01" => Ok(Charset::BINARY),
        "hex" | "hexadecimal" => Ok(Charset::HEX),
        "katakana" => Ok(Charset::KATAKANA),
        "greek" => Ok(Charset::GREEK),
        "cyrillic" => Ok(Charset::CYRILLIC),
        "symbols" => Ok(Charset::SYMBOLS),
        _ => Err(format!(
            "unsupported charset: {} (see --list-charsets)",
            spec
        )),
    }
}

fn push_range(out: &mut Vec<char>, start: u32, end: u32) {
    for v in start..=end {
        if let Some(ch) = char::from_u32(v) {
            out.push(ch);
        }
    }
}

pub fn build_glyphs(mut charset: Charset, default_to_ascii: bool) -> Vec<char> {
    if charset == Charset::NONE {
        charset = if default_to_ascii {
            Charset::ASCII_SAFE
        } else {
            Charset::MATRIX
        };
    }

    let mut out: Vec<char> = Vec::new();

    if charset.contains(Charset::BINARY) {
        push_range(&mut out, 0x30, 0x31);
    }
    if charset.contains(Charset::HEX) {
        push_range(&mut out, 0x30, 0x39);
        push_range(&mut out, 0x41, 0x46);
    }
    if charset.contains(Charset::ENGLISH_LETTERS) {
        push_range(&mut out, 0x41, 0x5A);
        push_range(&mut out, 0x61, 0x7A);
    }
    if charset.contains(Charset::ENGLISH_DIGITS) {
        push_range(&mut out, 0x30, 0x39);
    }
    if charset.contains(Charset::ENGLISH_PUNCTUATION) {
        push_range(&mut out, 0x21, 0x2F);
        push_range(&mut out, 0x3A, 0x40);
        push_range(&mut out, 0x5B, 0x60);
        push_range(&mut out, 0x7B, 0x7E);
    }
    if charset.contains(Charset::KATAKANA) {
        // Half-width forms, so every glyph stays one cell wide.
        push_range(&mut out, 0xFF66, 0xFF9D);
    }
    if charset.contains(Charset::GREEK) {
        push_range(&mut out, 0x0391, 0x03C9);
    }
    if charset.contains(Charset::CYRILLIC) {
        push_range(&mut out, 0x0410, 0x044F);
    }
    if charset.contains(Charset::SYMBOLS) {
        out.extend("Z:.\"=*+-<>¦|".chars());
    }

    if out.is_empty() {
        out.push('0');
        out.push('1');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_auto_selects_ascii_safe_when_non_utf() {
        let cs = charset_from_str("auto", true).unwrap();
        assert_eq!(cs, Charset::ASCII_SAFE);
        let cs = charset_from_str("auto", false).unwrap();
        assert_eq!(cs, Charset::MATRIX);
    }

    #[test]
    fn build_glyphs_binary_has_only_0_and_1() {
        let out = build_glyphs(Charset::BINARY, true);
        assert_eq!(out, vec!['0', '1']);
    }

    #[test]
    fn matrix_set_mixes_katakana_digits_and_symbols() {
        let out = build_glyphs(Charset::MATRIX, false);
        assert!(out.contains(&'ﾊ'));
        assert!(out.contains(&'7'));
        assert!(out.contains(&'¦'));
        assert!(!out.contains(&'q'));
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(charset_from_str("klingon", false).is_err());
    }

    #[test]
    fn empty_selection_falls_back_to_something_drawable() {
        let out = build_glyphs(Charset::NONE, true);
        assert!(!out.is_empty());
    }
}
