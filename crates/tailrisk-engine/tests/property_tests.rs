//! Property-style tests for engine invariants.
//!
//! These verify mathematical properties that should hold for every input:
//! - the portfolio series is the weighted sum of its constituents
//! - 99% quantiles sit deeper in the tail than 95% ones
//! - historical VaR is deterministic
//! - annualization round-trips the mean daily return

use chrono::{Duration as ChronoDuration, NaiveDate};

use tailrisk_core::types::{PriceSeries, Symbol};
use tailrisk_engine::prelude::*;
use tailrisk_stats::SampleMoments;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517c_c1b7_2722_0a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517c_c1b7_2722_0a95);
    x ^= x >> 32;
    x
}

fn generate_prices(seed: u64, days: u32) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let mut price = 40.0 + (simple_hash(seed, 0) % 400) as f64;
    let mut closes = Vec::with_capacity(days as usize);
    for i in 0..days {
        let noise = (simple_hash(seed, u64::from(i) + 1) % 10_000) as f64 / 10_000.0 - 0.5;
        price *= 1.0 + 0.0003 + 0.03 * noise;
        closes.push((start + ChronoDuration::days(i64::from(i)), price));
    }
    PriceSeries::from_closes(closes)
}

fn generate_returns(seed: u64, days: u32) -> Vec<f64> {
    let prices = generate_prices(seed, days);
    let aligned = align_log_returns(&[(Symbol::new("X").unwrap(), prices)]).unwrap();
    aligned.series(&Symbol::new("X").unwrap()).unwrap().to_vec()
}

/// Weight vectors summing to 100, two to five positions.
fn weight_vectors() -> Vec<Vec<f64>> {
    vec![
        vec![60.0, 40.0],
        vec![50.0, 50.0],
        vec![80.0, 15.0, 5.0],
        vec![25.0, 25.0, 25.0, 25.0],
        vec![40.0, 30.0, 15.0, 10.0, 5.0],
    ]
}

// =============================================================================
// PROPERTY: PORTFOLIO SERIES IS THE WEIGHTED SUM
// =============================================================================

#[test]
fn property_portfolio_series_is_weighted_sum() {
    for seed in 0..8 {
        for weights in weight_vectors() {
            let series: Vec<(Symbol, PriceSeries)> = (0..weights.len())
                .map(|i| {
                    let ticker = format!("S{i}");
                    (
                        Symbol::new(&ticker).unwrap(),
                        generate_prices(seed * 31 + i as u64, 120),
                    )
                })
                .collect();

            let aligned = align_log_returns(&series).unwrap();
            let fractions = to_fractions(&weights);
            let combined = combine_returns(&aligned, &fractions).unwrap();

            let columns: Vec<&[f64]> = aligned.iter().map(|(_, r)| r).collect();
            for t in 0..combined.len() {
                let expected: f64 = columns
                    .iter()
                    .zip(&fractions)
                    .map(|(col, w)| w * col[t])
                    .sum();
                assert!(
                    (combined[t] - expected).abs() < 1e-12,
                    "date {t}: {} != {expected} (seed={seed})",
                    combined[t]
                );
            }
        }
    }
}

// =============================================================================
// PROPERTY: TAIL ORDERING AND DETERMINISM
// =============================================================================

#[test]
fn property_99_deeper_than_95() {
    for seed in 0..20 {
        let returns = generate_returns(seed, 252);
        let moments = SampleMoments::from_sample(&returns).unwrap();
        let (mean, std) = (moments.mean(), moments.std_dev());

        let n95 = normal_var(mean, std, CONFIDENCE_95).unwrap();
        let n99 = normal_var(mean, std, CONFIDENCE_99).unwrap();
        assert!(n99 < n95, "seed {seed}: {n99} !< {n95}");

        let h95 = historical_var(&returns, CONFIDENCE_95).unwrap();
        let h99 = historical_var(&returns, CONFIDENCE_99).unwrap();
        assert!(h99 <= h95, "seed {seed}: {h99} !<= {h95}");
    }
}

#[test]
fn property_historical_var_idempotent() {
    for seed in 0..10 {
        let returns = generate_returns(seed, 300);
        let first = historical_var(&returns, CONFIDENCE_95).unwrap();
        for _ in 0..5 {
            assert_eq!(historical_var(&returns, CONFIDENCE_95).unwrap(), first);
        }
    }
}

// =============================================================================
// PROPERTY: ANNUALIZATION ROUND-TRIPS
// =============================================================================

#[test]
fn property_expected_return_round_trips() {
    for seed in 0..10 {
        let returns = generate_returns(seed, 252);
        let mean = SampleMoments::from_sample(&returns).unwrap().mean();
        let annual = (1.0 + mean).powi(252) - 1.0;
        let recovered = (1.0 + annual).powf(1.0 / 252.0) - 1.0;
        assert!(
            (recovered - mean).abs() < 1e-12,
            "seed {seed}: {recovered} != {mean}"
        );
    }
}

// =============================================================================
// PROPERTY: CORNISH-FISHER COLLAPSES TO NORMAL
// =============================================================================

#[test]
fn property_cornish_fisher_reduces_to_normal() {
    for seed in 0..10 {
        let returns = generate_returns(seed, 252);
        let moments = SampleMoments::from_sample(&returns).unwrap();
        let (mean, std) = (moments.mean(), moments.std_dev());

        for confidence in [CONFIDENCE_95, CONFIDENCE_99] {
            let cf = cornish_fisher_var(mean, std, 0.0, 0.0, confidence).unwrap();
            let normal = normal_var(mean, std, confidence).unwrap();
            assert!(
                (cf - normal).abs() < 1e-9,
                "seed {seed}, c={confidence}: {cf} != {normal}"
            );
        }
    }
}
