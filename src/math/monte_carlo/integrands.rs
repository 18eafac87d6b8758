use std::f64::consts::PI;

use super::interval::Interval;

/// Exact value of the integral of sin²(x) over [0, π].
pub const SIN_SQUARED_INTEGRAL: f64 = PI / 2.0;

/// f(x) = sin²(x)
pub fn sin_squared(x: f64) -> f64 {
    let s = x.sin();
    s * s
}

/// The interval [0, π] that [`sin_squared`] is integrated over.
pub fn sin_squared_interval() -> Interval<f64> {
    Interval::new(0.0, PI).expect("0 < π")
}
