//! Comma-decimal number handling for the legacy export convention.
//!
//! The input files and the rendered table both write quantities with a
//! comma decimal separator ("10,5"). Values are normalized to a dot
//! before parsing, so dot-decimal input is accepted as well. Thousands
//! separators are not recognized.

/// Parse a displayed decimal value. Returns `None` for empty or
/// unparseable text.
pub fn parse_decimal(s: &str) -> Option<f64> {
    let normalized = s.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok()
}

/// Format a value with exactly two decimal places and a comma separator
pub fn format_decimal(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}
