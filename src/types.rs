/// Core data structures for relay test results
///
/// This module defines the two input snapshots the report pipeline consumes:
/// individual relay attempts and per-validator aggregates. Both are produced
/// elsewhere (test harness, metrics tracker) and are only read here.
use chrono::{DateTime, Utc};

/// Prefix the relayer writes into the packet memo to identify itself
pub const RELAYER_MEMO_PREFIX: &str = "relayed-by:";

/// One relay attempt observed by the test harness
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestLogEntry {
    pub test_time: DateTime<Utc>,
    pub tx_hash: String,
    pub packet_sequence: u64,
    pub success: bool,
    /// Time until the packet was relayed, in milliseconds
    #[serde(rename = "latency")]
    pub latency_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo_identifier: Option<String>, // "relayed-by:validator-a"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relayer_signer: Option<String>,
}

impl TestLogEntry {
    /// Relayer name taken from the memo, with the `relayed-by:` prefix stripped
    pub fn relayer_label(&self) -> Option<&str> {
        let memo = self.memo_identifier.as_deref()?;
        let label = memo.strip_prefix(RELAYER_MEMO_PREFIX).unwrap_or(memo);
        if label.is_empty() { None } else { Some(label) }
    }
}

/// Aggregated relay performance for a single validator
///
/// `successful_relays <= total_tests` and `success_rate` matching the counts are
/// guaranteed by the producer. Nothing in this crate corrects a snapshot.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorMetrics {
    #[serde(rename = "validatorMoniker")]
    pub moniker: String,
    pub total_tests: u64,
    pub successful_relays: u64,
    /// Percentage in 0..=100
    pub success_rate: f64,
    pub average_latency: f64,
    pub max_latency: f64,
    #[serde(rename = "continuousFailures")]
    pub consecutive_failures: u32,
    #[serde(default, rename = "lastActiveTime", skip_serializing_if = "Option::is_none")]
    pub last_active: Option<DateTime<Utc>>,
}

impl ValidatorMetrics {
    /// Build a snapshot from raw counts, deriving `success_rate` from them
    pub fn from_counts(moniker: impl Into<String>, total_tests: u64, successful_relays: u64) -> Self {
        let success_rate =
            if total_tests == 0 { 0.0 } else { successful_relays as f64 / total_tests as f64 * 100.0 };

        Self {
            moniker: moniker.into(),
            total_tests,
            successful_relays,
            success_rate,
            average_latency: 0.0,
            max_latency: 0.0,
            consecutive_failures: 0,
            last_active: None,
        }
    }

    /// Check the counting invariants the producer is expected to uphold
    pub fn is_consistent(&self) -> bool {
        if self.successful_relays > self.total_tests {
            return false;
        }
        let expected = if self.total_tests == 0 {
            0.0
        } else {
            self.successful_relays as f64 / self.total_tests as f64 * 100.0
        };
        (self.success_rate - expected).abs() < 0.01
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
