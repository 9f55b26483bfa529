use crate::error::{DashboardError, Result};
use chrono::{DateTime, Utc};
use entity::color_settings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_HIGH_THRESHOLD: f64 = 90.0;
pub const DEFAULT_LOW_THRESHOLD: f64 = 70.0;

/// High/low bounds for one field, in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub high: f64,
    pub low: f64,
}

impl Default for ThresholdPair {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_THRESHOLD,
            low: DEFAULT_LOW_THRESHOLD,
        }
    }
}

impl ThresholdPair {
    /// Builds a pair, rejecting bounds outside 0-100 or `low > high`.
    pub fn new(high: f64, low: f64) -> Result<Self> {
        for (name, value) in [("high", high), ("low", low)] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(DashboardError::InvalidThreshold(format!(
                    "{name} must be between 0 and 100, got {value}"
                )));
            }
        }
        if low > high {
            return Err(DashboardError::InvalidThreshold(format!(
                "low ({low}) must not exceed high ({high})"
            )));
        }
        Ok(Self { high, low })
    }
}

/// One entry of a `PUT /api/color-settings` body.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ThresholdInput {
    pub high: Option<f64>,
    pub low: Option<f64>,
}

impl ThresholdInput {
    pub fn resolve(self) -> Result<ThresholdPair> {
        ThresholdPair::new(
            self.high.unwrap_or(DEFAULT_HIGH_THRESHOLD),
            self.low.unwrap_or(DEFAULT_LOW_THRESHOLD),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdSetting {
    pub field_name: String,
    pub pair: ThresholdPair,
    pub updated_at: DateTime<Utc>,
}

impl From<color_settings::Model> for ThresholdSetting {
    fn from(value: color_settings::Model) -> Self {
        Self {
            field_name: value.field_name,
            // stored rows are not re-validated; old data may predate validation
            pair: ThresholdPair {
                high: value.high_threshold,
                low: value.low_threshold,
            },
            updated_at: DateTime::<Utc>::from_naive_utc_and_offset(value.updated_at, Utc),
        }
    }
}

/// Field name -> pair, the shape served by `GET /api/color-settings`.
pub fn settings_map(settings: Vec<ThresholdSetting>) -> BTreeMap<String, ThresholdPair> {
    settings
        .into_iter()
        .map(|setting| (setting.field_name, setting.pair))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_bounds_use_defaults() {
        let pair = ThresholdInput::default().resolve().unwrap();
        assert_eq!(pair, ThresholdPair { high: 90.0, low: 70.0 });

        let pair = ThresholdInput { high: Some(95.0), low: None }.resolve().unwrap();
        assert_eq!(pair, ThresholdPair { high: 95.0, low: 70.0 });
    }

    #[test]
    fn test_low_above_high_is_rejected() {
        let err = ThresholdPair::new(60.0, 80.0).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidThreshold(_)));
        // the default low (70) is above an explicit high of 50
        assert!(ThresholdInput { high: Some(50.0), low: None }.resolve().is_err());
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert!(ThresholdPair::new(101.0, 10.0).is_err());
        assert!(ThresholdPair::new(50.0, -1.0).is_err());
        assert!(ThresholdPair::new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_equal_bounds_are_allowed() {
        assert!(ThresholdPair::new(80.0, 80.0).is_ok());
        assert!(ThresholdPair::new(100.0, 0.0).is_ok());
    }

    #[test]
    fn test_settings_map() {
        let now = Utc::now();
        let map = settings_map(vec![
            ThresholdSetting {
                field_name: "finalScore".to_owned(),
                pair: ThresholdPair::default(),
                updated_at: now,
            },
            ThresholdSetting {
                field_name: "elecPassRate".to_owned(),
                pair: ThresholdPair { high: 95.0, low: 85.0 },
                updated_at: now,
            },
        ]);
        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value["finalScore"]["high"], 90.0);
        assert_eq!(value["elecPassRate"]["low"], 85.0);
    }
}
