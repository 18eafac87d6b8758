use num_traits::Float;
use std::fmt::Debug;

use crate::error::{Error, Result};

/// A closed-open integration interval `[lo, hi)` with `lo < hi`.
///
/// Both bounds are finite. The interval cannot be mutated after construction,
/// so an estimation always sees the bounds it was started with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T>
where
    T: Float + Debug,
{
    lo: T,
    hi: T,
}

impl<T> Interval<T>
where
    T: Float + Debug,
{
    /// Creates a new interval, failing with [`Error::InvalidInterval`] unless
    /// both bounds and the width are finite and `lo < hi`.
    ///
    /// # Examples
    ///
    /// ```
    /// use montecarlo::math::monte_carlo::Interval;
    ///
    /// let interval = Interval::new(0.0, 2.0).unwrap();
    /// assert_eq!(interval.width(), 2.0);
    /// assert!(Interval::new(1.0, 1.0).is_err());
    /// ```
    pub fn new(lo: T, hi: T) -> Result<Self> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi || !(hi - lo).is_finite() {
            return Err(Error::InvalidInterval {
                lo: lo.to_f64().unwrap_or(f64::NAN),
                hi: hi.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { lo, hi })
    }

    /// Lower bound.
    pub fn lo(&self) -> T {
        self.lo
    }

    /// Upper bound.
    pub fn hi(&self) -> T {
        self.hi
    }

    /// Interval length `hi - lo`, the measure the sample mean is scaled by.
    pub fn width(&self) -> T {
        self.hi - self.lo
    }
}
