//! Text helpers

/// Capitalize the first character of every space-separated word and lower-case
/// everything else
///
/// Only `' '` separates words; other whitespace and punctuation are treated as
/// word characters. Characters with multi-character case mappings expand in
/// place (`"ßa"` becomes `"SSa"`).
///
/// # Examples
///
/// ```
/// use moulberry_utils::text::capitalize_fully;
///
/// assert_eq!(capitalize_fully("hELLO wORLD"), "Hello World");
/// assert_eq!(capitalize_fully("  two  spaces"), "  Two  Spaces");
/// ```
#[must_use]
pub fn capitalize_fully(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for ch in input.chars() {
        if ch == ' ' {
            capitalize_next = true;
            out.push(ch);
        } else if capitalize_next {
            out.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}
