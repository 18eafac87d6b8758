/// Smallest number of samples an estimation will draw.
pub const MIN_SAMPLES: u64 = 100;

/// The number of samples an estimation actually draws.
///
/// Requests below the floor are replaced by the floor instead of being
/// rejected; requests at or above it are used unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCount {
    effective: u64,
    substituted: bool,
}

impl SampleCount {
    /// Applies the default floor ([`MIN_SAMPLES`]) to `requested`.
    ///
    /// ```
    /// use montecarlo::math::monte_carlo::SampleCount;
    ///
    /// assert_eq!(SampleCount::from_requested(1).get(), 100);
    /// assert_eq!(SampleCount::from_requested(1_000_000).get(), 1_000_000);
    /// ```
    pub fn from_requested(requested: i64) -> Self {
        Self::with_floor(requested, MIN_SAMPLES)
    }

    /// Applies a custom floor to `requested`. A floor of zero is raised to one
    /// so that the sample mean is always defined.
    pub fn with_floor(requested: i64, floor: u64) -> Self {
        let floor = floor.max(1);
        match u64::try_from(requested) {
            Ok(n) if n >= floor => Self {
                effective: n,
                substituted: false,
            },
            _ => Self {
                effective: floor,
                substituted: true,
            },
        }
    }

    /// Effective sample count.
    pub fn get(&self) -> u64 {
        self.effective
    }

    /// Whether the request was below the floor and replaced by it.
    pub fn was_substituted(&self) -> bool {
        self.substituted
    }
}
