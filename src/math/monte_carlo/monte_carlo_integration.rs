use log::{debug, trace};
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use std::fmt::Debug;

use super::interval::Interval;
use super::random_source::UniformSource;
use super::sample_count::{SampleCount, MIN_SAMPLES};
use crate::error::{Error, Result};

/// A scalar function that can be integrated.
///
/// Every `Fn(T) -> T` closure or function is an integrand that never fails.
/// Wrap a `Fn(T) -> Result<T>` in [`Fallible`] to let evaluation report an
/// [`Error::Evaluation`].
pub trait Integrand<T> {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: T) -> Result<T>;
}

impl<T, F> Integrand<T> for F
where
    F: Fn(T) -> T,
{
    fn evaluate(&self, x: T) -> Result<T> {
        Ok(self(x))
    }
}

/// An integrand whose evaluation may fail.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<T, F> Integrand<T> for Fallible<F>
where
    F: Fn(T) -> Result<T>,
{
    fn evaluate(&self, x: T) -> Result<T> {
        (self.0)(x)
    }
}

/// Configuration options for Monte Carlo integration.
///
/// Randomness is not configured here; the caller owns the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationConfig {
    /// Requests below this many samples are raised to it
    pub min_samples: u64,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            min_samples: MIN_SAMPLES,
        }
    }
}

impl IntegrationConfig {
    /// Applies this configuration's floor to a requested sample count.
    pub fn sample_count(&self, requested: i64) -> SampleCount {
        SampleCount::with_floor(requested, self.min_samples)
    }
}

/// Result of one estimation, with the statistics gathered while sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateReport<T> {
    /// The integral estimate
    pub estimate: T,
    /// Number of samples actually drawn
    pub samples: u64,
    /// Whether the requested count was below the floor
    pub substituted: bool,
    /// Standard error of the estimate, `None` for a single sample
    pub standard_error: Option<T>,
}

/// Estimates the integral of a fixed integrand over a fixed interval.
///
/// The estimator keeps no state between calls; every call owns its
/// accumulator and only consumes randomness from the source it is given.
///
/// # Examples
///
/// ```
/// use montecarlo::math::monte_carlo::{Estimator, RandomSource};
///
/// let estimator = Estimator::new(0.0, 2.0, |_x: f64| 3.0).unwrap();
/// let mut source = RandomSource::seeded(1);
/// let value = estimator.estimate(1_000, &mut source).unwrap();
/// assert!((value - 6.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Estimator<T, F>
where
    T: Float + Debug,
{
    interval: Interval<T>,
    integrand: F,
    config: IntegrationConfig,
}

impl<T, F> Estimator<T, F>
where
    T: Float + SampleUniform + Debug,
    F: Integrand<T>,
{
    /// Creates an estimator over `[lo, hi)` with the default configuration.
    pub fn new(lo: T, hi: T, integrand: F) -> Result<Self> {
        Ok(Self::over(Interval::new(lo, hi)?, integrand))
    }

    /// Creates an estimator over an already validated interval.
    pub fn over(interval: Interval<T>, integrand: F) -> Self {
        Self {
            interval,
            integrand,
            config: IntegrationConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: IntegrationConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the integral estimate for `requested` samples.
    pub fn estimate<S>(&self, requested: i64, source: &mut S) -> Result<T>
    where
        S: UniformSource<T> + ?Sized,
    {
        self.report(requested, source).map(|report| report.estimate)
    }

    /// Like [`Estimator::estimate`], but also returns the effective sample
    /// count and the standard error of the estimate.
    pub fn report<S>(&self, requested: i64, source: &mut S) -> Result<EstimateReport<T>>
    where
        S: UniformSource<T> + ?Sized,
    {
        let count = self.config.sample_count(requested);
        if count.was_substituted() {
            debug!(
                "Requested {} samples is below the floor, using {} instead.",
                requested,
                count.get()
            );
        }
        integrate(&self.integrand, &self.interval, count, source)
    }
}

/// Performs Monte Carlo integration of the function `f` over the interval
/// [a, b) using the requested number of samples.
///
/// Requests below [`MIN_SAMPLES`] draw [`MIN_SAMPLES`] samples instead.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] unless `a < b` with both bounds finite,
/// and [`Error::Evaluation`] if `f` produces a non-finite value.
///
/// # Examples
///
/// ```
/// use montecarlo::math::monte_carlo::{monte_carlo_integration, RandomSource};
///
/// let mut source = RandomSource::seeded(42);
/// // Integrate f(x) = x over [0, 1]. The exact value is 0.5.
/// let result = monte_carlo_integration(|x: f64| x, 0.0, 1.0, 100_000, &mut source).unwrap();
/// assert!((result - 0.5).abs() < 0.01);
/// ```
pub fn monte_carlo_integration<T, F, S>(f: F, a: T, b: T, samples: i64, source: &mut S) -> Result<T>
where
    T: Float + SampleUniform + Debug,
    F: Fn(T) -> T,
    S: UniformSource<T> + ?Sized,
{
    Estimator::new(a, b, f)?.estimate(samples, source)
}

/// Performs Monte Carlo integration of a function that may fail.
///
/// The first failing evaluation aborts the accumulation and its error is
/// returned; no partial estimate is produced.
pub fn try_monte_carlo_integration<T, F, S>(
    f: F,
    a: T,
    b: T,
    samples: i64,
    source: &mut S,
) -> Result<T>
where
    T: Float + SampleUniform + Debug,
    F: Fn(T) -> Result<T>,
    S: UniformSource<T> + ?Sized,
{
    Estimator::new(a, b, Fallible(f))?.estimate(samples, source)
}

fn integrate<T, F, S>(
    f: &F,
    interval: &Interval<T>,
    count: SampleCount,
    source: &mut S,
) -> Result<EstimateReport<T>>
where
    T: Float + SampleUniform + Debug,
    F: Integrand<T> + ?Sized,
    S: UniformSource<T> + ?Sized,
{
    let samples = count.get();
    debug!(
        "Integrating over [{:?}, {:?}) with {} samples.",
        interval.lo(),
        interval.hi(),
        samples
    );

    // Accumulated in f64 with an integer counter, so narrower float types
    // keep their precision at large sample counts. Plain running sum for the
    // estimate, Welford update for the spread.
    let mut sum = 0.0_f64;
    let mut mean = 0.0_f64;
    let mut m2 = 0.0_f64;
    let mut k: u64 = 0;

    for _ in 0..samples {
        let x = source.next(interval.lo(), interval.hi());
        let y = f.evaluate(x)?;
        if !y.is_finite() {
            return Err(Error::evaluation(
                to_f64(x),
                format!("integrand returned non-finite value {:?}", y),
            ));
        }
        let y = to_f64(y);

        sum += y;
        k += 1;
        let delta = y - mean;
        mean += delta / k as f64;
        m2 += delta * (y - mean);
    }

    let n = samples as f64;
    let width = to_f64(interval.width());
    let estimate = from_f64::<T>(sum / n * width);
    let standard_error = if samples > 1 {
        let variance = m2 / (n - 1.0);
        Some(from_f64::<T>(width * (variance / n).sqrt()))
    } else {
        None
    };

    trace!(
        "Estimate {:?} (standard error {:?}) from {} samples.",
        estimate,
        standard_error,
        samples
    );

    Ok(EstimateReport {
        estimate,
        samples,
        substituted: count.was_substituted(),
        standard_error,
    })
}

fn from_f64<T: Float>(v: f64) -> T {
    // Only values beyond the range of `T` fail to convert.
    T::from(v).unwrap_or_else(|| {
        if v > 0.0 {
            T::infinity()
        } else {
            T::neg_infinity()
        }
    })
}

fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
