//! Monte Carlo integration of scalar functions.
//!
//! The integral of `f` over `[lo, hi]` equals `(hi - lo)` times the expected
//! value of `f` under the uniform distribution on `[lo, hi]`. The estimator
//! draws uniform samples, averages `f` over them and scales the mean by the
//! interval width. Its variance falls as `1 / n` in the number of samples.
//!
//! Randomness is always supplied by the caller through a [`UniformSource`],
//! so a seeded [`RandomSource`] makes every estimate reproducible.
//!
//! # Examples
//!
//! ```rust
//! use montecarlo::math::monte_carlo::{
//!     monte_carlo_integration, sin_squared, RandomSource, SIN_SQUARED_INTEGRAL,
//! };
//! use std::f64::consts::PI;
//!
//! let mut source = RandomSource::seeded(7);
//! let estimate = monte_carlo_integration(sin_squared, 0.0, PI, 200_000, &mut source).unwrap();
//! assert!((estimate - SIN_SQUARED_INTEGRAL).abs() < 0.01);
//! ```

pub mod integrands;
pub mod interval;
pub mod monte_carlo_integration;
pub mod random_source;
pub mod sample_count;

pub use integrands::{sin_squared, sin_squared_interval, SIN_SQUARED_INTEGRAL};
pub use interval::Interval;
pub use monte_carlo_integration::{
    monte_carlo_integration, try_monte_carlo_integration, EstimateReport, Estimator, Fallible,
    Integrand, IntegrationConfig,
};
pub use random_source::{RandomSource, SharedSource, UniformSource};
pub use sample_count::{SampleCount, MIN_SAMPLES};
