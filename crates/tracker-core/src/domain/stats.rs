//! Per-owner aggregates over job records.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use super::JobStatus;

/// Number of most recent months reported.
pub const MONTHLY_WINDOW: usize = 6;

/// Job counts per status. A status with no jobs is `None`, not zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: Option<u64>,
    pub interview: Option<u64>,
    pub declined: Option<u64>,
}

impl StatusCounts {
    pub fn from_counts(counts: impl IntoIterator<Item = (JobStatus, u64)>) -> Self {
        let mut stats = Self::default();
        for (status, count) in counts {
            let slot = match status {
                JobStatus::Pending => &mut stats.pending,
                JobStatus::Interview => &mut stats.interview,
                JobStatus::Declined => &mut stats.declined,
            };
            *slot = Some(slot.unwrap_or(0) + count);
        }
        stats
    }
}

/// Jobs created in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
    pub count: u64,
}

/// A labelled monthly count, e.g. `"Oct 2026"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyApplications {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStats {
    pub default_stats: StatusCounts,
    pub monthly_applications: Vec<MonthlyApplications>,
}

/// Count creation timestamps per (year, month).
pub fn group_by_month(dates: impl IntoIterator<Item = DateTime<Utc>>) -> Vec<MonthBucket> {
    let mut groups: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for date in dates {
        *groups.entry((date.year(), date.month())).or_default() += 1;
    }
    groups
        .into_iter()
        .map(|((year, month), count)| MonthBucket { year, month, count })
        .collect()
}

/// Keep the most recent [`MONTHLY_WINDOW`] months, oldest first.
///
/// Months without jobs are not padded in.
pub fn monthly_applications(mut buckets: Vec<MonthBucket>) -> Vec<MonthlyApplications> {
    buckets.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
    buckets.truncate(MONTHLY_WINDOW);
    buckets.reverse();

    buckets
        .into_iter()
        .filter_map(|bucket| {
            NaiveDate::from_ymd_opt(bucket.year, bucket.month, 1).map(|first| MonthlyApplications {
                date: first.format("%b %Y").to_string(),
                count: bucket.count,
            })
        })
        .collect()
}
