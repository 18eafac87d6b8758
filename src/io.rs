//! Collaborators around the estimator: where the sample count comes from and
//! where the estimate goes.

pub mod provider;
pub mod sink;

use anyhow::{Context, Result};
use log::info;

use crate::math::monte_carlo::{
    sin_squared, sin_squared_interval, Estimator, IntegrationConfig, UniformSource,
};

pub use provider::{ArgumentCount, FixedCount, PromptCount, SampleCountProvider, DEFAULT_SAMPLES};
pub use sink::{MemorySink, ResultSink, WriterSink};

/// Reads one sample count, estimates the integral of sin²(x) over [0, π]
/// and reports the estimate to `sink`.
///
/// ```
/// use montecarlo::io::{run, FixedCount, MemorySink};
/// use montecarlo::math::monte_carlo::{IntegrationConfig, RandomSource};
///
/// let mut sink = MemorySink::default();
/// let estimate = run(
///     &mut FixedCount(50_000),
///     &mut sink,
///     &mut RandomSource::seeded(3),
///     &IntegrationConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(sink.values, vec![estimate]);
/// ```
pub fn run<P, K, S>(
    provider: &mut P,
    sink: &mut K,
    source: &mut S,
    config: &IntegrationConfig,
) -> Result<f64>
where
    P: SampleCountProvider + ?Sized,
    K: ResultSink + ?Sized,
    S: UniformSource<f64> + ?Sized,
{
    let requested = provider
        .provide_sample_count()
        .context("failed to read sample count")?;

    let estimator =
        Estimator::over(sin_squared_interval(), sin_squared).with_config(config.clone());
    let report = estimator.report(requested, source)?;
    info!(
        "Estimated {} from {} samples (standard error {:?}).",
        report.estimate, report.samples, report.standard_error
    );

    sink.report(report.estimate)?;
    Ok(report.estimate)
}
