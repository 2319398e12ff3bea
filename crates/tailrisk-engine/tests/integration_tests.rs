//! End-to-end tests for the full portfolio VaR pipeline.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, NaiveDate};

use tailrisk_core::types::{Lookback, PriceSeries, Symbol, PORTFOLIO_ENTRY};
use tailrisk_data::{DataError, DataResult, MemoryDataSource, PriceHistorySource};
use tailrisk_engine::prelude::*;
use tailrisk_stats::{normal_quantile, round_to, SampleMoments};

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

/// Generates a plausible daily price path: ~0.05% drift, ~1.2% noise.
fn generate_prices(seed: u64, days: u32) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    let mut price = 80.0 + (simple_hash(seed, 0) % 200) as f64;
    let mut closes = Vec::with_capacity(days as usize);
    for i in 0..days {
        let noise = (simple_hash(seed, u64::from(i) + 1) % 10_000) as f64 / 10_000.0 - 0.5;
        price *= 1.0 + 0.0005 + 0.024 * noise;
        closes.push((start + ChronoDuration::days(i64::from(i)), price));
    }
    PriceSeries::from_closes(closes)
}

fn sym(s: &str) -> Symbol {
    Symbol::new(s).unwrap()
}

fn two_stock_source() -> MemoryDataSource {
    MemoryDataSource::new()
        .with_series(sym("AAPL"), generate_prices(1, 260))
        .with_series(sym("MSFT"), generate_prices(2, 260))
}

fn seeded_calculator(source: MemoryDataSource) -> VarCalculator<MemoryDataSource> {
    VarCalculator::with_config(
        source,
        CalculatorConfig {
            seed: Some(99),
            ..CalculatorConfig::default()
        },
    )
}

// =============================================================================
// FULL PIPELINE
// =============================================================================

#[tokio::test]
async fn test_two_stock_portfolio_report() {
    let calculator = seeded_calculator(two_stock_source());
    let report = calculator
        .calculate_full_portfolio(&["AAPL", "MSFT"], &[60.0, 40.0])
        .await
        .unwrap();

    let names: Vec<_> = report.iter().map(|(name, _)| name.to_string()).collect();
    assert_eq!(names, vec!["AAPL", "MSFT", PORTFOLIO_ENTRY]);

    for (name, stats) in report.iter() {
        assert!(
            stats.normal_99 < stats.normal_95,
            "{name}: Normal99 must sit deeper in the tail"
        );
        assert!(stats.normal_95 < 0.0, "{name}: 95% VaR should be a loss");
        // Monte Carlo shares the generating distribution with the
        // parametric figure; 10k paths keeps it within ±10% relative.
        assert!((stats.mc_95 - stats.normal_95).abs() / stats.normal_95.abs() < 0.10);
        assert!((stats.mc_99 - stats.normal_99).abs() / stats.normal_99.abs() < 0.10);
    }
}

#[tokio::test]
async fn test_portfolio_normal_var_matches_closed_form() {
    let source = two_stock_source();
    let calculator = seeded_calculator(source.clone());
    let report = calculator
        .calculate_full_portfolio(&["AAPL", "MSFT"], &[60.0, 40.0])
        .await
        .unwrap();

    // Recompute the weighted-sum series independently.
    let fetched = source
        .adjusted_close(&[sym("AAPL"), sym("MSFT")], Lookback::ONE_YEAR)
        .await
        .unwrap();
    let aligned = align_log_returns(&[
        (sym("AAPL"), fetched[&sym("AAPL")].clone()),
        (sym("MSFT"), fetched[&sym("MSFT")].clone()),
    ])
    .unwrap();
    let combined = combine_returns(&aligned, &[0.6, 0.4]).unwrap();

    let moments = SampleMoments::from_sample(&combined).unwrap();
    let expected =
        normal_quantile(moments.mean(), moments.std_dev(), 0.05).unwrap();

    let portfolio = report.portfolio().unwrap();
    assert_eq!(portfolio.normal_95, round_to(expected, 6));
}

#[tokio::test]
async fn test_single_security_portfolio_mirrors_the_security() {
    let source = MemoryDataSource::new().with_series(sym("AAPL"), generate_prices(5, 260));
    let calculator = seeded_calculator(source);
    let report = calculator
        .calculate_full_portfolio(&["AAPL"], &[100.0])
        .await
        .unwrap();

    let security = report.get("AAPL").unwrap();
    let portfolio = report.portfolio().unwrap();
    // Weight 100 makes the portfolio series identical to the security's,
    // so every figure matches — Monte Carlo included, because the draw
    // stream is keyed on series content.
    assert_eq!(security, portfolio);
}

#[tokio::test]
async fn test_report_wire_shape() {
    let calculator = seeded_calculator(two_stock_source());
    let report = calculator
        .calculate_full_portfolio(&["aapl", "msft"], &[50.0, 50.0])
        .await
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    let portfolio = &json[PORTFOLIO_ENTRY];
    for key in [
        "Normal95", "Normal99", "Hist95", "Hist99", "MC95", "MC99", "CF95", "CF99", "ExpReturn",
    ] {
        assert!(portfolio.get(key).is_some(), "missing {key}");
    }
    // Case-normalized tickers key the map.
    assert!(json.get("AAPL").is_some());
    assert!(json.get("aapl").is_none());
}

#[tokio::test]
async fn test_seeded_runs_are_reproducible() {
    let a = seeded_calculator(two_stock_source())
        .calculate_full_portfolio(&["AAPL", "MSFT"], &[60.0, 40.0])
        .await
        .unwrap();
    let b = seeded_calculator(two_stock_source())
        .calculate_full_portfolio(&["AAPL", "MSFT"], &[60.0, 40.0])
        .await
        .unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// FAILURE MODES
// =============================================================================

#[tokio::test]
async fn test_overweight_request_rejected() {
    let calculator = seeded_calculator(two_stock_source());
    let err = calculator
        .calculate_full_portfolio(&["AAPL"], &[150.0])
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidWeight { .. }));
}

#[tokio::test]
async fn test_empty_request_rejected() {
    let calculator = seeded_calculator(two_stock_source());
    let symbols: [&str; 0] = [];
    let err = calculator
        .calculate_full_portfolio(&symbols, &[])
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidWeight { .. }));
}

#[tokio::test]
async fn test_unknown_ticker_aborts_whole_request() {
    let calculator = seeded_calculator(two_stock_source());
    let err = calculator
        .calculate_full_portfolio(&["AAPL", "ZZZZ"], &[50.0, 50.0])
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Data(DataError::NotFound { .. })));
}

#[tokio::test]
async fn test_constant_prices_are_degenerate() {
    let flat = PriceSeries::from_closes(
        (0..100)
            .map(|i| {
                (
                    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + ChronoDuration::days(i),
                    50.0,
                )
            })
            .collect(),
    );
    let source = MemoryDataSource::new().with_series(sym("FLAT"), flat);
    let err = seeded_calculator(source)
        .calculate_full_portfolio(&["FLAT"], &[100.0])
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::DegenerateSeries { .. }));
}

/// A source that never answers inside the configured bound.
struct StalledSource;

#[async_trait]
impl PriceHistorySource for StalledSource {
    async fn adjusted_close(
        &self,
        _symbols: &[Symbol],
        _lookback: Lookback,
    ) -> DataResult<HashMap<Symbol, PriceSeries>> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Err(DataError::unavailable("unreachable"))
    }
}

#[tokio::test]
async fn test_fetch_timeout() {
    let calculator = VarCalculator::with_config(
        StalledSource,
        CalculatorConfig {
            fetch_timeout: Duration::from_millis(20),
            ..CalculatorConfig::default()
        },
    );
    let err = calculator
        .calculate_full_portfolio(&["AAPL"], &[100.0])
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::FetchTimeout { .. }));
}
