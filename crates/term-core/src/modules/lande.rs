//! Non-relativistic Landé g-factor (g_s taken as exactly 2).

use crate::domain::HalfInteger;

/// Returns 0 for J = 0, where g is undefined.
pub fn lande_g(j: f64, l: f64, s: f64) -> f64 {
    if j == 0.0 {
        return 0.0;
    }
    1.5 + (s * (s + 1.0) - l * (l + 1.0)) / (2.0 * j * (j + 1.0))
}

pub fn lande_g_for_term(j: HalfInteger, l: u32, spin: HalfInteger) -> f64 {
    lande_g(j.as_f64(), f64::from(l), spin.as_f64())
}
