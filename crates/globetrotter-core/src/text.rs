// crates/globetrotter-core/src/text.rs

//! # Text Folding
//!
//! The first stage of name normalization: trimming, Unicode → ASCII
//! transliteration and lowercasing. Alias resolution lives in
//! [`crate::alias`] and is layered on top of [`fold_key`].

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Trim surrounding whitespace
/// 2\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 3\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use globetrotter_core::text::fold_key;
///
/// assert_eq!(fold_key("  Türkiye "), "turkiye");
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("   "), "");
/// ```
pub fn fold_key(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_ascii() {
        return trimmed.to_ascii_lowercase();
    }
    deunicode::deunicode(trimmed).trim().to_lowercase()
}

/// Length used by the containment floor: characters, not bytes.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
