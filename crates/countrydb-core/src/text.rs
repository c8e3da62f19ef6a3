// crates/countrydb-core/src/text.rs

//! Text normalization shared by every case-insensitive comparison.
//!
//! Duplicate checks, name search, continent filtering and update lookups all
//! go through [`fold_case`], so the matching rules cannot drift apart.
//! [`fold_key`] is the looser accent-insensitive variant used only by the
//! folded name search.

/// Lower-case a string for case-insensitive comparison.
///
/// Storage keeps the original casing; only comparison keys are folded.
///
/// ```rust
/// use countrydb_core::text::fold_case;
///
/// assert_eq!(fold_case("JAPÓN"), "japón");
/// ```
#[inline]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality on [`fold_case`] keys.
#[inline]
pub fn equals_case_insensitive(a: &str, b: &str) -> bool {
    fold_case(a) == fold_case(b)
}

/// Convert a string into a folded key for accent-insensitive matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Japón` -> `Japon`)
/// 2\) Normalize to lowercase
///
/// ```rust
/// use countrydb_core::text::fold_key;
///
/// assert_eq!(fold_key("Perú"), "peru");
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after accent folding.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_case_keeps_accents() {
        assert_eq!(fold_case("México"), "méxico");
        assert!(!equals_case_insensitive("Mexico", "México"));
        assert!(equals_case_insensitive("ARGENTINA", "argentina"));
    }

    #[test]
    fn fold_key_drops_accents() {
        assert!(equals_folded("Mexico", "MÉXICO"));
        assert_eq!(fold_key("São Tomé"), "sao tome");
    }
}
