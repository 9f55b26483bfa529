use crate::classify::BucketCounts;
use serde::{Deserialize, Serialize};

/// Share of projects per bucket, each in whole percent.
///
/// Buckets are rounded independently (half away from zero), so the three
/// values can add up to 99 or 101.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub total: u64,
    pub win: u32,
    pub draw: u32,
    pub lose: u32,
}

fn percentage(count: u64, total: u64) -> u32 {
    (count as f64 / total as f64 * 100.0).round() as u32
}

impl From<BucketCounts> for Distribution {
    fn from(counts: BucketCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self::default();
        }
        Self {
            total,
            win: percentage(counts.win, total),
            draw: percentage(counts.draw, total),
            lose: percentage(counts.lose, total),
        }
    }
}
