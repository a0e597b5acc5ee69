//! UTF-8-safe string helpers
//!
//! Legal text is full of multi-byte characters (á, é, í, ó, ú, ñ, ü, º), so
//! anything that slices node text for logging must respect char boundaries.

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Never panics on multi-byte input and never allocates.
///
/// # Examples
/// ```
/// # use kodegen_tools_lexscrape::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Disposición", 9), "Disposici");
/// assert_eq!(safe_truncate_chars("Año", 100), "Año");
/// ```
#[inline]
#[must_use]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Shorten node text for a log line, marking elided content with `…`.
#[must_use]
pub fn log_preview(s: &str, max_chars: usize) -> String {
    let truncated = safe_truncate_chars(s, max_chars);
    if truncated.len() < s.len() {
        format!("{truncated}…")
    } else {
        truncated.to_string()
    }
}
