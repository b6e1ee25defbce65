//! Line terminator normalization.

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Replace `\r\n`, bare `\r`, and the Unicode line/paragraph separators
/// with `\n`, and drop leading byte order marks.
///
/// Applying it twice yields the same text as applying it once.
pub fn normalize_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\u{2028}' | '\u{2029}' => out.push('\n'),
            _ => out.push(c),
        }
    }

    match out.strip_prefix(BYTE_ORDER_MARK) {
        Some(_) => out.trim_start_matches(BYTE_ORDER_MARK).to_string(),
        None => out,
    }
}
