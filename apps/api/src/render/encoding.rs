//! WinAnsiEncoding for the standard Type 1 fonts.
//!
//! The fonts are declared with `/Encoding /WinAnsiEncoding`, so every string
//! shown with `Tj` has to be bytes in that code page. ASCII and most of
//! Latin-1 map to themselves; the 0x80..=0x9F block holds typographic
//! punctuation such as the bullet. Anything else becomes `?`.

const REPLACEMENT: u8 = b'?';

/// Encodes `text` as WinAnsi bytes.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{20}'..='\u{7E}' => c as u8,
        // Latin-1 supplement maps 1:1 (0xAD soft hyphen included)
        '\u{A0}'..='\u{FF}' => c as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        // control whitespace from textareas renders as a space, not a missing glyph
        '\t' | '\r' | '\n' => b' ',
        _ => REPLACEMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(encode_win_ansi("Hello (World)"), b"Hello (World)".to_vec());
    }

    #[test]
    fn test_bullet_maps_to_0x95() {
        assert_eq!(encode_win_ansi("• a"), vec![0x95, b' ', b'a']);
    }

    #[test]
    fn test_latin1_maps_to_itself() {
        assert_eq!(encode_win_ansi("Résumé"), vec![b'R', 0xE9, b's', b'u', b'm', 0xE9]);
    }

    #[test]
    fn test_smart_quotes_and_dashes() {
        assert_eq!(encode_win_ansi("“a”–b—"), vec![0x93, b'a', 0x94, 0x96, b'b', 0x97]);
    }

    #[test]
    fn test_unmappable_becomes_question_mark() {
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
        assert_eq!(encode_win_ansi("\u{7}"), b"?".to_vec());
    }

    #[test]
    fn test_line_breaks_become_spaces() {
        assert_eq!(encode_win_ansi("\r"), b" ".to_vec());
        assert_eq!(encode_win_ansi("\n"), b" ".to_vec());
        assert_eq!(encode_win_ansi("line1\r\nline2"), b"line1  line2".to_vec());
    }

    #[test]
    fn test_one_byte_per_char() {
        let text = "Ada • 555 • ☃";
        assert_eq!(encode_win_ansi(text).len(), text.chars().count());
    }
}
