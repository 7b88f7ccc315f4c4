//! Time-series aggregation over calendar periods
//!
//! A series request names a granularity and a period count N; the output is
//! always exactly N points, chronologically ascending, covering the N most
//! recent *complete* periods at or before the anchor date. Periods with no
//! matching records still appear, with no average and a zero count:
//! callers plot the series as a continuous axis and must not see silent
//! gaps.
//!
//! Weeks start on Monday; quarters are calendar quarters. Date arithmetic
//! saturates at the calendar bounds rather than failing.

use std::collections::HashMap;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{FactRecord, Money};

/// Calendar granularity of a time series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    /// One point per calendar day
    Day,

    /// One point per ISO week (Monday through Sunday)
    Week,

    /// One point per calendar month
    Month,

    /// One point per calendar quarter
    Quarter,

    /// One point per calendar year
    Year,
}

impl Granularity {
    /// First day of the period containing `date`
    pub fn period_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => date,
            Granularity::Week => {
                let back = date.weekday().num_days_from_monday() as u64;
                date.checked_sub_days(Days::new(back)).unwrap_or(date)
            }
            Granularity::Month => date.with_day(1).unwrap_or(date),
            Granularity::Quarter => {
                let month = ((date.month() - 1) / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
            }
            Granularity::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        }
    }

    /// First day of the period after the one starting at `start`
    pub fn next_start(&self, start: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => start.checked_add_days(Days::new(1)),
            Granularity::Week => start.checked_add_days(Days::new(7)),
            Granularity::Month => start.checked_add_months(Months::new(1)),
            Granularity::Quarter => start.checked_add_months(Months::new(3)),
            Granularity::Year => start.checked_add_months(Months::new(12)),
        }
        .unwrap_or(NaiveDate::MAX)
    }

    /// First day of the period before the one starting at `start`
    pub fn prev_start(&self, start: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => start.checked_sub_days(Days::new(1)),
            Granularity::Week => start.checked_sub_days(Days::new(7)),
            Granularity::Month => start.checked_sub_months(Months::new(1)),
            Granularity::Quarter => start.checked_sub_months(Months::new(3)),
            Granularity::Year => start.checked_sub_months(Months::new(12)),
        }
        .unwrap_or(NaiveDate::MIN)
    }

    /// Start of the most recent period that is complete at the anchor
    ///
    /// The anchor's own period counts only when the anchor is its final
    /// day; otherwise the previous period is the last complete one.
    pub fn last_complete_start(&self, anchor: NaiveDate) -> NaiveDate {
        let start = self.period_start(anchor);
        let final_day = self.next_start(start).pred_opt().unwrap_or(start);
        if anchor >= final_day {
            start
        } else {
            self.prev_start(start)
        }
    }
}

/// One point of an aggregated salary time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// First day of the period
    pub period_start: NaiveDate,

    /// Average salary in the period, absent when the period has no records
    pub avg_salary: Option<Money>,

    /// Number of matching records in the period
    pub count: u64,
}

/// Build a series of exactly `periods` points ending at the last complete
/// period at or before `anchor`
///
/// Facts outside the covered window are ignored; periods without facts are
/// emitted with `avg_salary = None` and `count = 0`.
pub fn build_series(
    facts: &[FactRecord],
    granularity: Granularity,
    periods: usize,
    anchor: NaiveDate,
) -> Vec<TimeSeriesPoint> {
    if periods == 0 {
        return Vec::new();
    }

    let mut starts = Vec::with_capacity(periods);
    let mut cursor = granularity.last_complete_start(anchor);
    for _ in 0..periods {
        starts.push(cursor);
        cursor = granularity.prev_start(cursor);
    }
    starts.reverse();

    let mut totals: HashMap<NaiveDate, (Money, u64)> = HashMap::new();
    for fact in facts {
        let key = granularity.period_start(fact.date);
        let entry = totals.entry(key).or_insert((Money::ZERO, 0));
        entry.0 += fact.amount;
        entry.1 += 1;
    }

    starts
        .into_iter()
        .map(|period_start| match totals.get(&period_start) {
            Some(&(sum, count)) if count > 0 => TimeSeriesPoint {
                period_start,
                avg_salary: Some((sum / Money::from(count)).round_dp(2)),
                count,
            },
            _ => TimeSeriesPoint {
                period_start,
                avg_salary: None,
                count: 0,
            },
        })
        .collect()
}
