//! Summary statistics over filtered salary amounts
//!
//! Percentiles use the R-7 (Excel-style) method: `rank = p/100 × (n−1)`,
//! linear interpolation between the two bracketing order statistics. This
//! gives the identities `percentile(0) == min`, `percentile(50) == median`,
//! `percentile(100) == max` that callers rely on.
//!
//! All arithmetic stays in fixed-point decimal; derived values are rounded
//! to the warehouse's 2-decimal scale.

use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Summary statistics for one filtered set of salary amounts
///
/// Immutable once produced. A zero-count result carries `Money::ZERO` in
/// every statistic: the neutral form, never a division by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryStats {
    /// Number of matching fact records
    pub count: u64,

    /// Smallest matching amount
    pub min: Money,

    /// Largest matching amount
    pub max: Money,

    /// Arithmetic mean, rounded to 2 decimal places
    pub mean: Money,

    /// 50th percentile
    pub median: Money,

    /// 25th percentile
    pub p25: Money,

    /// 75th percentile
    pub p75: Money,

    /// The percentile rank this summary was requested with (0-100)
    pub percentile_rank: f64,

    /// Value at the requested percentile rank
    pub percentile_value: Money,
}

impl SalaryStats {
    /// The neutral zero-count form
    pub fn empty(percentile_rank: f64) -> Self {
        Self {
            count: 0,
            min: Money::ZERO,
            max: Money::ZERO,
            mean: Money::ZERO,
            median: Money::ZERO,
            p25: Money::ZERO,
            p75: Money::ZERO,
            percentile_rank,
            percentile_value: Money::ZERO,
        }
    }
}

/// Value at percentile `p` of an ascending-sorted, non-empty slice
///
/// Linear interpolation between order statistics (R-7). `p` must be in
/// [0, 100]; the engine boundary enforces this before calling.
pub fn percentile(sorted: &[Money], p: f64) -> Money {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=100.0).contains(&p));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = p / 100.0 * (n - 1) as f64;
    let lo = (rank.floor() as usize).min(n - 1);
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;

    if frac == 0.0 || lo == hi {
        return sorted[lo];
    }

    // frac is in (0, 1); the conversion cannot fail for such values
    let frac = Money::from_f64(frac).unwrap_or(Money::ZERO);
    (sorted[lo] + (sorted[hi] - sorted[lo]) * frac).round_dp(2)
}

/// Compute summary statistics over a set of salary amounts
///
/// Takes ownership of the amounts; they are sorted in place. An empty input
/// yields [`SalaryStats::empty`].
pub fn summarize(mut amounts: Vec<Money>, percentile_rank: f64) -> SalaryStats {
    if amounts.is_empty() {
        return SalaryStats::empty(percentile_rank);
    }

    amounts.sort();
    let count = amounts.len() as u64;
    let sum: Money = amounts.iter().copied().sum();
    let mean = (sum / Money::from(count)).round_dp(2);

    SalaryStats {
        count,
        min: amounts[0],
        max: amounts[amounts.len() - 1],
        mean,
        median: percentile(&amounts, 50.0),
        p25: percentile(&amounts, 25.0),
        p75: percentile(&amounts, 75.0),
        percentile_rank,
        percentile_value: percentile(&amounts, percentile_rank),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(values: &[i64]) -> Vec<Money> {
        values.iter().map(|&v| Money::from(v)).collect()
    }

    #[test]
    fn test_percentile_identities() {
        let mut values = money(&[300, 100, 500, 200, 400]);
        values.sort();

        assert_eq!(percentile(&values, 0.0), Money::from(100));
        assert_eq!(percentile(&values, 100.0), Money::from(500));
        assert_eq!(percentile(&values, 50.0), Money::from(300));
    }

    #[test]
    fn test_reference_fixture() {
        // 5 records [100..500], p75: rank = 0.75 * 4 = 3.0, no interpolation
        let stats = summarize(money(&[100, 200, 300, 400, 500]), 75.0);

        assert_eq!(stats.count, 5);
        assert_eq!(stats.min, Money::from(100));
        assert_eq!(stats.max, Money::from(500));
        assert_eq!(stats.mean, Money::from(300));
        assert_eq!(stats.percentile_value, Money::from(400));
        assert_eq!(stats.p75, Money::from(400));
    }

    #[test]
    fn test_interpolated_percentile() {
        // p25 of [10, 20, 30, 40]: rank = 0.25 * 3 = 0.75 -> 10 + 0.75*10
        let mut values = money(&[10, 20, 30, 40]);
        values.sort();
        assert_eq!(percentile(&values, 25.0).to_string(), "17.50");
    }

    #[test]
    fn test_median_of_even_count() {
        let stats = summarize(money(&[10, 20]), 90.0);
        assert_eq!(stats.median, Money::from(15));
    }

    #[test]
    fn test_single_value() {
        let stats = summarize(money(&[42]), 90.0);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, stats.max);
        assert_eq!(stats.median, Money::from(42));
        assert_eq!(stats.percentile_value, Money::from(42));
    }

    #[test]
    fn test_empty_input_is_neutral() {
        let stats = summarize(Vec::new(), 90.0);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, Money::ZERO);
        assert_eq!(stats.percentile_value, Money::ZERO);
        assert_eq!(stats.percentile_rank, 90.0);
    }

    #[test]
    fn test_mean_rounding() {
        // (10 + 20 + 20) / 3 = 16.666... -> 16.67
        let stats = summarize(money(&[10, 20, 20]), 50.0);
        assert_eq!(stats.mean.to_string(), "16.67");
    }

    #[test]
    fn test_unsorted_input_is_sorted_internally() {
        let stats = summarize(money(&[500, 100, 300, 200, 400]), 75.0);
        assert_eq!(stats.p75, Money::from(400));
        assert_eq!(stats.min, Money::from(100));
    }
}
