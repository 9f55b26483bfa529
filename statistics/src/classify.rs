use model::threshold::ThresholdPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Win,
    Draw,
    Lose,
}

/// Threshold pair converted from percent to the fraction scale scores use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionThresholds {
    pub high: f64,
    pub low: f64,
}

impl From<ThresholdPair> for FractionThresholds {
    fn from(pair: ThresholdPair) -> Self {
        Self {
            high: pair.high / 100.0,
            low: pair.low / 100.0,
        }
    }
}

/// Both bounds are inclusive: a score equal to `high` wins, equal to `low` draws.
/// NaN never satisfies either bound and ends up in `Lose`.
pub fn classify(score: f64, thresholds: &FractionThresholds) -> Bucket {
    match score {
        s if s >= thresholds.high => Bucket::Win,
        s if s >= thresholds.low => Bucket::Draw,
        _ => Bucket::Lose,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub win: u64,
    pub draw: u64,
    pub lose: u64,
}

impl BucketCounts {
    pub fn tally<I>(scores: I, thresholds: &FractionThresholds) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        scores
            .into_iter()
            .fold(Self::default(), |mut counts, score| {
                counts.add(classify(score, thresholds));
                counts
            })
    }

    pub fn add(&mut self, bucket: Bucket) {
        match bucket {
            Bucket::Win => self.win += 1,
            Bucket::Draw => self.draw += 1,
            Bucket::Lose => self.lose += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.win + self.draw + self.lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds(high: f64, low: f64) -> FractionThresholds {
        ThresholdPair { high, low }.into()
    }

    #[test]
    fn test_percent_is_converted_once() {
        let t = thresholds(90.0, 70.0);
        assert_eq!(t, FractionThresholds { high: 0.9, low: 0.7 });
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let t = thresholds(90.0, 70.0);
        assert_eq!(classify(0.9, &t), Bucket::Win);
        assert_eq!(classify(0.7, &t), Bucket::Draw);
        assert_eq!(classify(0.6999, &t), Bucket::Lose);
        assert_eq!(classify(1.0, &t), Bucket::Win);
    }

    #[test]
    fn test_equal_bounds_have_no_draw() {
        let t = thresholds(80.0, 80.0);
        assert_eq!(classify(0.8, &t), Bucket::Win);
        assert_eq!(classify(0.79, &t), Bucket::Lose);
    }

    #[test]
    fn test_nan_is_lose() {
        assert_eq!(classify(f64::NAN, &thresholds(90.0, 70.0)), Bucket::Lose);
    }

    #[test]
    fn test_every_score_lands_in_one_bucket() {
        let pairs = [(90.0, 70.0), (100.0, 0.0), (50.0, 50.0), (0.0, 0.0), (100.0, 100.0)];
        let scores: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
        for (high, low) in pairs {
            let counts = BucketCounts::tally(scores.iter().copied(), &thresholds(high, low));
            assert_eq!(counts.total(), scores.len() as u64, "pair {high}/{low}");
        }
    }

    #[test]
    fn test_tally_example() {
        let counts = BucketCounts::tally([0.95, 0.85, 0.75, 0.65], &thresholds(90.0, 70.0));
        assert_eq!(counts, BucketCounts { win: 1, draw: 2, lose: 1 });
    }
}
