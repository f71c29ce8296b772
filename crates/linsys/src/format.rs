//! Number formatting shared by the `Display` impls.

use std::fmt;

const DECIMALS: i32 = 3;

/// Rounds `value` to 3 decimal places, mapping `-0.0` to `0.0`.
pub(crate) fn round(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMALS);
    (value * scale).round() / scale + 0.0
}

/// Writes a signed term such as `x_1`, `- 3x_2` or `+ 0.5t_1`.
///
/// The leading term of an expression gets no `+` and no separating space. A coefficient whose
/// rounded magnitude is exactly 1 is omitted.
pub(crate) fn write_term(
    f: &mut fmt::Formatter<'_>,
    coefficient: f64,
    variable: fmt::Arguments<'_>,
    is_leading: bool,
) -> fmt::Result {
    let coefficient = round(coefficient);
    if coefficient < 0.0 {
        f.write_str("-")?;
    }
    if !is_leading {
        if coefficient > 0.0 {
            f.write_str("+")?;
        }
        f.write_str(" ")?;
    }
    if coefficient.abs() != 1.0 {
        write!(f, "{}", coefficient.abs())?;
    }
    f.write_fmt(variable)
}
