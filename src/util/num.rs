/// Number of decimals used when the interactive stack stores a computed
/// value.
pub const FIXED_DECIMALS: usize = 2;

/// Checks whether `text` is an unsigned decimal: ASCII digits with at most
/// one `.` and at least one digit.
///
/// ## Example
/// ```
/// use rpnstack::util::num::is_decimal;
///
/// assert!(is_decimal("3.14"));
/// assert!(is_decimal(".5"));
/// assert!(is_decimal("7."));
/// assert!(!is_decimal("."));
/// assert!(!is_decimal("1.2.3"));
/// assert!(!is_decimal("x1"));
/// ```
#[must_use]
pub fn is_decimal(text: &str) -> bool {
    let mut digits = 0;
    let mut dots = 0;

    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }

    digits > 0 && dots <= 1
}

/// Parses an unsigned decimal as accepted by [`is_decimal`].
///
/// ## Returns
/// - `Some(f64)`: The value, if `text` is a decimal.
/// - `None`: Otherwise.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    if !is_decimal(text) {
        return None;
    }
    text.parse().ok()
}

/// Parses a decimal that may carry a leading `-`.
///
/// Computed results on the interactive stack can be negative, and they must
/// stay numeric for the next operation. Anything else, including `.5abc`,
/// is symbolic.
///
/// ## Example
/// ```
/// use rpnstack::util::num::parse_signed_decimal;
///
/// assert_eq!(parse_signed_decimal("-1.50"), Some(-1.5));
/// assert_eq!(parse_signed_decimal("42"), Some(42.0));
/// assert_eq!(parse_signed_decimal(".5abc"), None);
/// assert_eq!(parse_signed_decimal("-"), None);
/// ```
#[must_use]
pub fn parse_signed_decimal(text: &str) -> Option<f64> {
    match text.strip_prefix('-') {
        Some(magnitude) => parse_decimal(magnitude).map(|v| -v),
        None => parse_decimal(text),
    }
}

/// Formats a value with [`FIXED_DECIMALS`] decimals, e.g. `7.00`.
#[must_use]
pub fn format_fixed(value: f64) -> String {
    format!("{value:.prec$}", prec = FIXED_DECIMALS)
}
