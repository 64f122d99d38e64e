//! Tier classification for success rates and latencies.
//!
//! Each scale is a fixed, ordered threshold table evaluated top-down with
//! first-match-wins. The two scales compare in opposite directions: a higher
//! success rate is better, a lower latency is better.

/// Discrete quality bucket derived from a numeric metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Excellent,
    Good,
    Poor,
}

impl Tier {
    /// Semantic identifier, stable across languages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Poor => "poor",
        }
    }
}

/// Success-rate thresholds, highest first. A rate matches the first row where
/// `rate >= threshold`; lower bounds are inclusive.
const RATE_TIERS: [(f64, Tier); 2] = [(90.0, Tier::Excellent), (70.0, Tier::Good)];

/// Latency thresholds in milliseconds, lowest first. A latency matches the
/// first row where `latency < threshold`.
const LATENCY_TIERS: [(u64, Tier); 2] = [(5_000, Tier::Excellent), (10_000, Tier::Good)];

/// Classify a success-rate percentage.
///
/// `>= 90` is excellent, `70..90` is good, anything lower (including NaN) is poor.
pub fn rate_tier(rate: f64) -> Tier {
    RATE_TIERS.iter().find(|(threshold, _)| rate >= *threshold).map(|(_, tier)| *tier).unwrap_or(Tier::Poor)
}

/// Classify the latency of a single relay attempt.
///
/// `< 5000ms` is excellent, `5000..10000ms` is good, `>= 10000ms` is poor.
pub fn latency_tier(latency_ms: u64) -> Tier {
    LATENCY_TIERS
        .iter()
        .find(|(threshold, _)| latency_ms < *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(Tier::Poor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_tier_boundaries() {
        assert_eq!(rate_tier(100.0), Tier::Excellent);
        assert_eq!(rate_tier(90.0), Tier::Excellent);
        assert_eq!(rate_tier(89.99), Tier::Good);
        assert_eq!(rate_tier(70.0), Tier::Good);
        assert_eq!(rate_tier(69.99), Tier::Poor);
        assert_eq!(rate_tier(0.0), Tier::Poor);
    }

    #[test]
    fn test_rate_tier_nan_is_poor() {
        assert_eq!(rate_tier(f64::NAN), Tier::Poor);
    }

    #[test]
    fn test_latency_tier_boundaries() {
        assert_eq!(latency_tier(0), Tier::Excellent);
        assert_eq!(latency_tier(4999), Tier::Excellent);
        assert_eq!(latency_tier(5000), Tier::Good);
        assert_eq!(latency_tier(9999), Tier::Good);
        assert_eq!(latency_tier(10000), Tier::Poor);
        assert_eq!(latency_tier(u64::MAX), Tier::Poor);
    }

    #[test]
    fn test_tier_as_str() {
        assert_eq!(Tier::Excellent.as_str(), "excellent");
        assert_eq!(Tier::Good.as_str(), "good");
        assert_eq!(Tier::Poor.as_str(), "poor");
    }
}
