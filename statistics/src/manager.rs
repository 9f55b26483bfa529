use crate::aggregate::Distribution;
use crate::classify::{BucketCounts, FractionThresholds};
use database::storage::{ProjectStore, ThresholdStore};
use model::{DashboardError, Result};
use tracing::{info, warn};

pub const DEFAULT_SCORE_FIELD: &str = "finalScore";

/// Computes the win/draw/lose distribution of all stored projects.
///
/// Nothing is cached: every run reads the projects, then the threshold setting
/// for `score_field` when there is at least one project.
#[derive(Debug, Clone)]
pub struct StatisticsManager {
    score_field: String,
}

impl Default for StatisticsManager {
    fn default() -> Self {
        Self::new(DEFAULT_SCORE_FIELD)
    }
}

impl StatisticsManager {
    pub fn new(score_field: impl Into<String>) -> Self {
        Self {
            score_field: score_field.into(),
        }
    }

    pub fn score_field(&self) -> &str {
        &self.score_field
    }

    pub async fn run(
        &self,
        projects: &dyn ProjectStore,
        thresholds: &dyn ThresholdStore,
    ) -> Result<Distribution> {
        let projects = projects.list_projects().await?;
        if projects.is_empty() {
            return Ok(Distribution::default());
        }

        let Some(setting) = thresholds.get_threshold(&self.score_field).await? else {
            warn!(
                "no color setting for {}, refusing to compute statistics",
                self.score_field
            );
            return Err(DashboardError::ConfigurationMissing(self.score_field.clone()));
        };

        let fractions = FractionThresholds::from(setting.pair);
        let counts = BucketCounts::tally(
            projects.iter().map(|project| project.final_score()),
            &fractions,
        );
        let distribution = Distribution::from(counts);

        info!(
            "Statistics computed - total= {}, win= {}%, draw= {}%, lose= {}% (high= {}, low= {})",
            distribution.total,
            distribution.win,
            distribution.draw,
            distribution.lose,
            setting.pair.high,
            setting.pair.low,
        );
        Ok(distribution)
    }
}
