//! Statistics derived from a batch of relay test logs.
//!
//! This module handles aggregating log entries into the overall numbers every
//! report format shows. Nothing here rounds; formatting is left to renderers.

use crate::types::{TestLogEntry, ValidatorMetrics};

/// Overall numbers for one report run.
///
/// Recomputed on every report generation and never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    /// Number of log entries in the batch
    pub total_tests: usize,
    /// Number of log entries with `success == true`
    pub successful_tests: usize,
    /// Percentage of successful entries, 0..=100
    pub success_rate: f64,
    /// Mean latency of successful entries in milliseconds
    pub average_latency: f64,
    /// Number of validator snapshots supplied
    pub active_validators: usize,
}

/// Count log entries that relayed successfully.
pub fn successful_count(logs: &[TestLogEntry]) -> usize {
    logs.iter().filter(|log| log.success).count()
}

/// Percentage of successful entries.
///
/// # Returns
/// `0.0` for an empty batch, otherwise `successes / len * 100`.
pub fn overall_success_rate(logs: &[TestLogEntry]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }
    successful_count(logs) as f64 / logs.len() as f64 * 100.0
}

/// Mean latency over successful entries only.
///
/// Failed attempts carry no completion latency and are skipped entirely.
///
/// # Returns
/// `0.0` when there is no successful entry.
pub fn average_latency(logs: &[TestLogEntry]) -> f64 {
    let (count, total) = logs
        .iter()
        .filter(|log| log.success)
        .fold((0u64, 0u128), |(count, total), log| (count + 1, total + u128::from(log.latency_ms)));

    if count == 0 { 0.0 } else { total as f64 / count as f64 }
}

/// Calculate the aggregate summary for a batch of logs and validator snapshots.
pub fn summarize(logs: &[TestLogEntry], metrics: &[ValidatorMetrics]) -> AggregateSummary {
    AggregateSummary {
        total_tests: logs.len(),
        successful_tests: successful_count(logs),
        success_rate: overall_success_rate(logs),
        average_latency: average_latency(logs),
        active_validators: metrics.len(),
    }
}
