//! Display formatting for orbit quantities.
//!
//! Every number is shown in normalized scientific notation with exactly four
//! digits after the point and a signed, at-least-two-digit exponent, e.g.
//! `5.9720E+24` or `1.5401E+00`.

use std::fmt;

/// Formats `x` as `d.ddddE±XX`.
///
/// Infinities and NaN come out as `INF`, `-INF` and `NAN`.
pub fn scientific(x: f64) -> String {
    if x.is_nan() {
        return "NAN".to_owned();
    }
    if x.is_infinite() {
        return if x > 0.0 { "INF" } else { "-INF" }.to_owned();
    }

    // std gives us e.g. "5.9720E24" or "1.2000E-5"; we just need to fix up
    // the exponent. Rounding may have bumped the exponent, which std already
    // accounts for.
    let raw = format!("{:.4E}", x);
    match raw.split_once('E') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}E{}{:0>2}", mantissa, sign, digits)
        }
        None => raw,
    }
}

/// A labeled, unit-tagged value, as shown in the output list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl Quantity {
    pub fn new(label: &'static str, value: f64, unit: &'static str) -> Self {
        Quantity { label, value, unit }
    }

    /// Just the number, formatted.
    pub fn value_text(&self) -> String {
        scientific(self.value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.label, self.value_text(), self.unit)
    }
}
