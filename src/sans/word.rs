//! Helper for resolving control words.

/// Resolve a control word name to its plain-text expansion, if it has one.
///
/// The paragraph and line breaks `par` and `line` expand to `\n`, and `tab`
/// to `\t`. A name of `u` followed by one or more decimal digits is a Unicode
/// escape, expanding to the character at the code point the digits name.
/// All other names carry no text content and resolve to `None`.
pub fn resolve(word: &str) -> Option<char> {
    match word {
        "par" | "line" => Some('\n'),
        "tab" => Some('\t'),
        _ => unicode_escape(word),
    }
}

/// Resolve a decimal Unicode escape, if the name is one.
///
/// A digit run naming no Unicode scalar value (a surrogate, or a value past
/// the last code point) resolves to `None`, like an unrecognized word.
fn unicode_escape(word: &str) -> Option<char> {
    let digits = word.strip_prefix('u').filter(|d| !d.is_empty())?;

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse::<u32>().ok().and_then(char::from_u32)
}
