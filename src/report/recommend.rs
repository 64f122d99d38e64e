//! Recommendation synthesis from aggregate statistics and validator outliers.
//!
//! Rules are independent and may all fire. When none of the warning rules
//! fire, a single positive recommendation is produced instead, so the result
//! is never empty.

use super::stats::AggregateSummary;
use crate::types::ValidatorMetrics;
use log::debug;

/// Overall success rate (percent) below which the batch is flagged.
pub const LOW_SUCCESS_RATE_THRESHOLD: f64 = 80.0;

/// Average latency (milliseconds) above which the batch is flagged.
pub const HIGH_LATENCY_THRESHOLD_MS: f64 = 10_000.0;

/// Per-validator success rate (percent) below which a validator is listed.
pub const POOR_PERFORMER_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Ok,
}

/// What a recommendation is about. Text is resolved per language by the renderers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "validators", rename_all = "camelCase")]
pub enum Advice {
    LowSuccessRate,
    HighLatency,
    /// Monikers of under-performing validators, in input order
    PoorPerformers(Vec<String>),
    AllNominal,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub advice: Advice,
}

impl Recommendation {
    fn warning(advice: Advice) -> Self {
        Self { severity: Severity::Warning, advice }
    }
}

/// Build the ordered recommendation list for a report.
///
/// # Arguments
/// * `summary` - Aggregate numbers for the whole batch
/// * `metrics` - Validator snapshots in their natural input order
pub fn synthesize(summary: &AggregateSummary, metrics: &[ValidatorMetrics]) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if summary.success_rate < LOW_SUCCESS_RATE_THRESHOLD {
        recommendations.push(Recommendation::warning(Advice::LowSuccessRate));
    }

    if summary.average_latency > HIGH_LATENCY_THRESHOLD_MS {
        recommendations.push(Recommendation::warning(Advice::HighLatency));
    }

    let poor_performers: Vec<String> = metrics
        .iter()
        .filter(|m| m.success_rate < POOR_PERFORMER_THRESHOLD)
        .map(|m| m.moniker.clone())
        .collect();
    if !poor_performers.is_empty() {
        recommendations.push(Recommendation::warning(Advice::PoorPerformers(poor_performers)));
    }

    if recommendations.is_empty() {
        recommendations.push(Recommendation { severity: Severity::Ok, advice: Advice::AllNominal });
    }

    debug!("Synthesized {} recommendation(s)", recommendations.len());
    recommendations
}
