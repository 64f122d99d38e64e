//! Validator ranking by success rate.

use crate::types::ValidatorMetrics;

/// Display decoration for a rank position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMarker {
    /// First place: 🥇
    Gold,
    /// Second place: 🥈
    Silver,
    /// Third place: 🥉
    Bronze,
    /// Any other place, 1-based: "4."
    Ordinal(usize),
}

impl RankMarker {
    /// Marker for a 0-based rank position.
    pub fn for_position(position: usize) -> Self {
        match position {
            0 => RankMarker::Gold,
            1 => RankMarker::Silver,
            2 => RankMarker::Bronze,
            n => RankMarker::Ordinal(n + 1),
        }
    }

    /// Format the marker for display.
    pub fn format(&self) -> String {
        match self {
            RankMarker::Gold => "🥇".to_string(),
            RankMarker::Silver => "🥈".to_string(),
            RankMarker::Bronze => "🥉".to_string(),
            RankMarker::Ordinal(n) => format!("{}.", n),
        }
    }
}

/// A validator snapshot together with its 0-based rank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedValidator<'a> {
    pub position: usize,
    pub metrics: &'a ValidatorMetrics,
}

impl RankedValidator<'_> {
    pub fn marker(&self) -> RankMarker {
        RankMarker::for_position(self.position)
    }
}

/// Order validators by success rate, best first.
///
/// Uses a stable sort, so validators with equal rates keep their input order.
/// The input slice is not modified.
pub fn rank_validators(metrics: &[ValidatorMetrics]) -> Vec<RankedValidator<'_>> {
    let mut ordered: Vec<&ValidatorMetrics> = metrics.iter().collect();
    ordered.sort_by(|a, b| b.success_rate.total_cmp(&a.success_rate));

    ordered.into_iter().enumerate().map(|(position, metrics)| RankedValidator { position, metrics }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator(moniker: &str, rate: f64) -> ValidatorMetrics {
        let mut m = ValidatorMetrics::from_counts(moniker, 100, rate as u64);
        m.success_rate = rate;
        m
    }

    fn monikers<'a>(ranked: &[RankedValidator<'a>]) -> Vec<&'a str> {
        ranked.iter().map(|r| r.metrics.moniker.as_str()).collect()
    }

    #[test]
    fn test_empty_ranking() {
        assert!(rank_validators(&[]).is_empty());
    }

    #[test]
    fn test_sorted_descending() {
        let metrics = vec![validator("low", 40.0), validator("high", 99.0), validator("mid", 75.0)];
        let ranked = rank_validators(&metrics);

        assert_eq!(monikers(&ranked), vec!["high", "mid", "low"]);
        assert!(ranked.windows(2).all(|w| w[0].metrics.success_rate >= w[1].metrics.success_rate));
        assert_eq!(ranked.iter().map(|r| r.position).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_equal_rates_keep_input_order() {
        let metrics = vec![
            validator("b", 90.0),
            validator("a", 95.0),
            validator("d", 90.0),
            validator("c", 90.0),
        ];
        let ranked = rank_validators(&metrics);

        assert_eq!(monikers(&ranked), vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_ranking_is_permutation() {
        let metrics = vec![validator("x", 10.0), validator("y", 10.0), validator("z", 80.0)];
        let ranked = rank_validators(&metrics);

        let mut names = monikers(&ranked);
        names.sort();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_rank_markers() {
        assert_eq!(RankMarker::for_position(0), RankMarker::Gold);
        assert_eq!(RankMarker::for_position(1), RankMarker::Silver);
        assert_eq!(RankMarker::for_position(2), RankMarker::Bronze);
        assert_eq!(RankMarker::for_position(3), RankMarker::Ordinal(4));

        assert_eq!(RankMarker::Gold.format(), "🥇");
        assert_eq!(RankMarker::Bronze.format(), "🥉");
        assert_eq!(RankMarker::Ordinal(11).format(), "11.");
    }
}
