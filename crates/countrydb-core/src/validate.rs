// crates/countrydb-core/src/validate.rs

//! Field validation for raw text coming from the dataset or from a user.

/// Returns `true` if the trimmed input is a non-empty run of ASCII digits.
///
/// No sign and no decimal point are accepted. Leading zeros are fine.
///
/// ```rust
/// use countrydb_core::validate::is_valid_nonnegative_integer;
///
/// assert!(is_valid_nonnegative_integer(" 0042 "));
/// assert!(!is_valid_nonnegative_integer("-1"));
/// assert!(!is_valid_nonnegative_integer("1.5"));
/// assert!(!is_valid_nonnegative_integer("   "));
/// ```
pub fn is_valid_nonnegative_integer(text: &str) -> bool {
    let t = text.trim();
    !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if the trimmed input is non-empty.
pub fn is_valid_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Validate and parse a non-negative integer.
///
/// Returns `None` when the text is not a digit run, or when it is one but
/// does not fit in a `u64`.
pub fn parse_nonnegative_integer(text: &str) -> Option<u64> {
    if !is_valid_nonnegative_integer(text) {
        return None;
    }
    text.trim().parse::<u64>().ok()
}

/// Parse the two numeric columns of a row together.
///
/// Both must validate; there is no partial result.
pub fn parse_row_integers(raw_population: &str, raw_area: &str) -> Option<(u64, u64)> {
    let population = parse_nonnegative_integer(raw_population)?;
    let area = parse_nonnegative_integer(raw_area)?;
    Some((population, area))
}
