use montecarlo::math::monte_carlo::{
    monte_carlo_integration, sin_squared, Estimator, RandomSource, SIN_SQUARED_INTEGRAL,
};
use montecarlo::Error;
use proptest::prelude::*;
use std::f64::consts::PI;

fn spread(values: &[f64]) -> f64 {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

#[test]
fn test_sin_squared_ten_million_samples() {
    let mut source = RandomSource::seeded(20_240_601);
    let estimate =
        monte_carlo_integration(sin_squared, 0.0, PI, 10_000_000, &mut source).unwrap();
    assert!(
        (estimate - SIN_SQUARED_INTEGRAL).abs() < 0.01,
        "estimate {} too far from π/2",
        estimate
    );
}

#[test]
fn test_request_of_one_uses_floor() {
    let estimator = Estimator::new(0.0, PI, sin_squared).unwrap();
    let report = estimator.report(1, &mut RandomSource::seeded(1)).unwrap();
    assert_eq!(report.samples, 100);
    assert!(report.substituted);

    // The floor run and an explicit request for 100 consume the same draws.
    let explicit = estimator.estimate(100, &mut RandomSource::seeded(1)).unwrap();
    assert_eq!(report.estimate.to_bits(), explicit.to_bits());
}

#[test]
fn test_larger_count_gives_tighter_spread() {
    let estimator = Estimator::new(0.0, PI, sin_squared).unwrap();
    let trials = 10;

    let floor_runs: Vec<f64> = (0..trials)
        .map(|seed| estimator.estimate(1, &mut RandomSource::seeded(seed)).unwrap())
        .collect();
    let large_runs: Vec<f64> = (0..trials)
        .map(|seed| {
            let report = estimator
                .report(1_000_000, &mut RandomSource::seeded(1000 + seed))
                .unwrap();
            assert_eq!(report.samples, 1_000_000);
            report.estimate
        })
        .collect();

    assert!(spread(&large_runs) < spread(&floor_runs) / 10.0);
}

#[test]
fn test_empty_and_reversed_intervals_fail() {
    let mut source = RandomSource::seeded(0);
    assert!(matches!(
        monte_carlo_integration(sin_squared, PI, PI, 1000, &mut source),
        Err(Error::InvalidInterval { .. })
    ));
    assert!(matches!(
        monte_carlo_integration(sin_squared, PI, 0.0, 1000, &mut source),
        Err(Error::InvalidInterval { .. })
    ));
}

#[test]
fn test_seeded_runs_are_bit_identical() {
    for seed in [0, 1, u64::MAX] {
        let a = monte_carlo_integration(sin_squared, 0.0, PI, 5_000, &mut RandomSource::seeded(seed))
            .unwrap();
        let b = monte_carlo_integration(sin_squared, 0.0, PI, 5_000, &mut RandomSource::seeded(seed))
            .unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

proptest! {
    #[test]
    fn constant_integrand_is_exact(
        lo in -1.0e3f64..1.0e3,
        width in 1.0e-3f64..1.0e3,
        c in -1.0e3f64..1.0e3,
        requested in -10i64..2_000,
        seed in any::<u64>(),
    ) {
        let hi = lo + width;
        prop_assume!(lo < hi);
        let mut source = RandomSource::seeded(seed);
        let estimate = monte_carlo_integration(|_| c, lo, hi, requested, &mut source).unwrap();
        let expected = c * (hi - lo);
        prop_assert!((estimate - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }
}
