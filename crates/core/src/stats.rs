//! Aggregate statistics over a set of ratings.

use serde::Serialize;

/// Histogram of scores 1 through 5.
///
/// Every bucket is always present in the serialized form, even when zero,
/// so clients can render a fixed five-bar chart without key checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreDistribution {
    #[serde(rename = "1")]
    pub one: i64,
    #[serde(rename = "2")]
    pub two: i64,
    #[serde(rename = "3")]
    pub three: i64,
    #[serde(rename = "4")]
    pub four: i64,
    #[serde(rename = "5")]
    pub five: i64,
}

impl ScoreDistribution {
    /// Record `count` observations of `score`. Scores outside 1..=5 are
    /// ignored; the store's CHECK constraint keeps them from ever appearing.
    fn add(&mut self, score: i16, count: i64) {
        match score {
            1 => self.one += count,
            2 => self.two += count,
            3 => self.three += count,
            4 => self.four += count,
            5 => self.five += count,
            _ => {}
        }
    }

    /// Sum across all buckets.
    pub fn total(&self) -> i64 {
        self.one + self.two + self.three + self.four + self.five
    }
}

/// Average, count, and histogram for a set of ratings.
///
/// Computed over the same filtered set as the listing it accompanies, so a
/// score-filtered page never shows statistics for ratings it excludes.
#[derive(Debug, Clone, Serialize)]
pub struct RatingStatistics {
    pub average_rating: f64,
    pub total_ratings: i64,
    pub rating_distribution: ScoreDistribution,
}

impl RatingStatistics {
    /// Fold `(score, count)` pairs from a grouped aggregate into the
    /// average / total / histogram triple.
    ///
    /// Pairs with a score outside 1..=5 are skipped so the average, total,
    /// and histogram always agree. An empty input yields an average of 0.0
    /// rather than NaN.
    pub fn from_score_counts(counts: &[(i16, i64)]) -> Self {
        let mut distribution = ScoreDistribution::default();
        let mut total = 0i64;
        let mut weighted = 0i64;

        for &(score, count) in counts {
            if !(1..=5).contains(&score) {
                continue;
            }
            distribution.add(score, count);
            total += count;
            weighted += i64::from(score) * count;
        }

        let average_rating = if total > 0 {
            weighted as f64 / total as f64
        } else {
            0.0
        };

        Self {
            average_rating,
            total_ratings: total,
            rating_distribution: distribution,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_zero_average() {
        let stats = RatingStatistics::from_score_counts(&[]);
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(stats.total_ratings, 0);
        assert_eq!(stats.rating_distribution, ScoreDistribution::default());
    }

    #[test]
    fn test_single_bucket() {
        let stats = RatingStatistics::from_score_counts(&[(5, 3)]);
        assert_eq!(stats.average_rating, 5.0);
        assert_eq!(stats.total_ratings, 3);
        assert_eq!(stats.rating_distribution.five, 3);
        assert_eq!(stats.rating_distribution.one, 0);
    }

    #[test]
    fn test_mixed_buckets_average() {
        // 2x1 + 1x4 + 1x5 = 11 over 4 ratings.
        let stats = RatingStatistics::from_score_counts(&[(1, 2), (4, 1), (5, 1)]);
        assert_eq!(stats.average_rating, 2.75);
        assert_eq!(stats.total_ratings, 4);
        assert_eq!(stats.rating_distribution.one, 2);
        assert_eq!(stats.rating_distribution.four, 1);
        assert_eq!(stats.rating_distribution.five, 1);
    }

    #[test]
    fn test_bucket_sum_matches_total() {
        let stats = RatingStatistics::from_score_counts(&[(1, 7), (2, 3), (3, 4), (4, 9), (5, 2)]);
        assert_eq!(stats.rating_distribution.total(), stats.total_ratings);
    }

    #[test]
    fn test_out_of_range_scores_are_skipped_entirely() {
        let stats = RatingStatistics::from_score_counts(&[(0, 5), (6, 2)]);
        assert_eq!(stats.rating_distribution, ScoreDistribution::default());
        assert_eq!(stats.total_ratings, 0);
        assert_eq!(stats.average_rating, 0.0);
    }

    #[test]
    fn test_all_buckets_serialize_even_when_zero() {
        let stats = RatingStatistics::from_score_counts(&[(3, 1)]);
        let json = serde_json::to_value(&stats).unwrap();
        let dist = &json["rating_distribution"];
        for key in ["1", "2", "3", "4", "5"] {
            assert!(dist.get(key).is_some(), "missing bucket {key}");
        }
        assert_eq!(dist["3"], 1);
        assert_eq!(dist["5"], 0);
    }
}
