//! Money helpers
//!
//! Form inputs arrive as strings and are coerced to `f64` before any
//! arithmetic. Internal computation keeps full float precision; rounding to
//! cents happens only at the presentation boundary.

/// Coerce raw form input to a number.
///
/// Malformed or non-finite input becomes `0.0` so the editor stays
/// renderable with partially-entered rows.
///
/// # Examples
///
/// ```
/// use shared::money::coerce_number;
///
/// assert_eq!(coerce_number("12.50"), 12.50);
/// assert_eq!(coerce_number(" 3 "), 3.0);
/// assert_eq!(coerce_number("abc"), 0.0);
/// assert_eq!(coerce_number(""), 0.0);
/// ```
pub fn coerce_number(input: &str) -> f64 {
    sanitize(input.trim().parse::<f64>().unwrap_or(0.0))
}

/// Replace NaN/infinite values with `0.0`
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Round to cents for display
///
/// # Examples
///
/// ```
/// use shared::money::round2;
///
/// assert_eq!(round2(26.249999), 26.25);
/// assert_eq!(round2(100.0 / 3.0), 33.33);
/// ```
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an amount as a currency string (euros)
///
/// # Examples
///
/// ```
/// use shared::money::format_eur;
///
/// assert_eq!(format_eur(12.5), "12.50€");
/// assert_eq!(format_eur(100.0), "100.00€");
/// ```
pub fn format_eur(value: f64) -> String {
    format!("{:.2}€", value)
}
