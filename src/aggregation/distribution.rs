//! Salary distribution histograms
//!
//! Bucket policy: a caller-supplied count of equal-width buckets spanning
//! the [min, max] of the matching amounts. Lower bounds are inclusive;
//! upper bounds are exclusive except for the final bucket, which closes at
//! the observed maximum so the maximum itself is countable.
//!
//! Invariant: every matching record falls into exactly one bucket, so the
//! bucket counts always sum to the number of matching records.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// One histogram bucket over a salary range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionBucket {
    /// Lower bound, inclusive
    pub lower: Money,

    /// Upper bound, exclusive. In the final bucket of a distribution it
    /// equals the observed maximum and is inclusive
    pub upper: Money,

    /// Number of records falling in this bucket
    pub count: u64,
}

/// Partition amounts into `bucket_count` equal-width buckets
///
/// Returns an ordered sequence covering [min, max] with no gaps. Empty
/// input (or a zero bucket count) yields an empty sequence; a degenerate
/// range where every amount is equal collapses to a single closed bucket.
pub fn equal_width_buckets(amounts: &[Money], bucket_count: usize) -> Vec<DistributionBucket> {
    if amounts.is_empty() || bucket_count == 0 {
        return Vec::new();
    }

    let mut min = amounts[0];
    let mut max = amounts[0];
    for &amount in &amounts[1..] {
        if amount < min {
            min = amount;
        }
        if amount > max {
            max = amount;
        }
    }

    if min == max {
        return vec![DistributionBucket {
            lower: min,
            upper: max,
            count: amounts.len() as u64,
        }];
    }

    let width = (max - min) / Money::from(bucket_count as u64);

    let mut counts = vec![0u64; bucket_count];
    for &amount in amounts {
        // The maximum lands at index == bucket_count; clamping folds it
        // into the final (closed) bucket
        let index = ((amount - min) / width)
            .floor()
            .to_usize()
            .unwrap_or(0)
            .min(bucket_count - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = min + width * Money::from(i as u64);
            let upper = if i + 1 == bucket_count {
                max
            } else {
                min + width * Money::from((i + 1) as u64)
            };
            DistributionBucket {
                lower,
                upper,
                count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(values: &[i64]) -> Vec<Money> {
        values.iter().map(|&v| Money::from(v)).collect()
    }

    #[test]
    fn test_reference_fixture() {
        // [10, 20, 30] with 2 buckets -> [10,20) count=1, [20,30] count=2
        let buckets = equal_width_buckets(&money(&[10, 20, 30]), 2);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].lower, Money::from(10));
        assert_eq!(buckets[0].upper, Money::from(20));
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[1].lower, Money::from(20));
        assert_eq!(buckets[1].upper, Money::from(30));
        assert_eq!(buckets[1].count, 2);
    }

    #[test]
    fn test_counts_partition_all_records() {
        let amounts = money(&[5, 12, 19, 23, 31, 44, 44, 58, 60, 75]);
        for bucket_count in 1..=8 {
            let buckets = equal_width_buckets(&amounts, bucket_count);
            let total: u64 = buckets.iter().map(|b| b.count).sum();
            assert_eq!(total, amounts.len() as u64, "buckets={}", bucket_count);
        }
    }

    #[test]
    fn test_buckets_are_contiguous() {
        let buckets = equal_width_buckets(&money(&[0, 7, 13, 29, 100]), 4);

        assert_eq!(buckets.len(), 4);
        for pair in buckets.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
        }
        assert_eq!(buckets[0].lower, Money::from(0));
        assert_eq!(buckets[3].upper, Money::from(100));
    }

    #[test]
    fn test_maximum_is_counted_in_final_bucket() {
        let buckets = equal_width_buckets(&money(&[0, 50, 100]), 2);
        assert_eq!(buckets[1].count, 2); // 50 and 100
    }

    #[test]
    fn test_empty_input() {
        assert!(equal_width_buckets(&[], 5).is_empty());
    }

    #[test]
    fn test_degenerate_range_single_bucket() {
        let buckets = equal_width_buckets(&money(&[40, 40, 40]), 5);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].lower, Money::from(40));
        assert_eq!(buckets[0].upper, Money::from(40));
        assert_eq!(buckets[0].count, 3);
    }

    #[test]
    fn test_fractional_width() {
        // Range [0, 10] with 3 buckets: width 3.33...
        let buckets = equal_width_buckets(&money(&[0, 3, 4, 7, 10]), 3);
        assert_eq!(buckets.len(), 3);
        let total: u64 = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 5);
        assert_eq!(buckets[2].upper, Money::from(10));
    }
}
