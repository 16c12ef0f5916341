//! Codepage guard for the built-in Type1 fonts.
//!
//! The built-in Helvetica faces are written with WinAnsiEncoding
//! (cp1252), so only that set can reach the page. The flowing renderer
//! refuses anything outside it; the canvas and branded renderers
//! degrade out-of-set characters to `?` instead.

/// Returns true if `c` has a WinAnsi (cp1252) code point.
pub fn is_win_ansi(c: char) -> bool {
    matches!(c,
        '\u{20}'..='\u{7E}'
        | '\u{A0}'..='\u{FF}'
        | '€' | '‚' | 'ƒ' | '„' | '…' | '†' | '‡' | 'ˆ' | '‰' | 'Š' | '‹' | 'Œ' | 'Ž'
        | '‘' | '’' | '“' | '”' | '•' | '–' | '—' | '˜' | '™' | 'š' | '›' | 'œ' | 'ž' | 'Ÿ'
    )
}

/// Strict check over a whole text: the first unencodable character, if
/// any. Whitespace (newlines included) always passes; the wrap step
/// normalizes it away before drawing.
pub fn first_unencodable(text: &str) -> Option<char> {
    text.chars().find(|&c| !c.is_whitespace() && !is_win_ansi(c))
}

/// Lossy mapping: out-of-set characters become `?`, whitespace passes.
pub fn to_win_ansi_lossy(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_whitespace() || is_win_ansi(c) {
                c
            } else {
                '?'
            }
        })
        .collect()
}
