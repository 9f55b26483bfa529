pub mod aggregate;
pub mod classify;
pub mod manager;

pub use aggregate::Distribution;
pub use classify::{classify, Bucket, BucketCounts, FractionThresholds};
pub use manager::{StatisticsManager, DEFAULT_SCORE_FIELD};
