//! Structured summary for machine consumption.

use super::context::ReportContext;
use super::format::{RECENT_LOG_WINDOW, recent_logs};
use super::recommend::Recommendation;
use super::stats::AggregateSummary;
use crate::types::{TestLogEntry, ValidatorMetrics};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Aggregate numbers plus the generation timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySection {
    #[serde(flatten)]
    pub stats: AggregateSummary,
    pub generated_at: DateTime<Utc>,
}

/// `{ summary, validators, recentLogs, recommendations }`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredSummary<'a> {
    pub summary: SummarySection,
    /// Validators in rank order
    pub validators: Vec<&'a ValidatorMetrics>,
    /// The most recent log entries, newest first
    pub recent_logs: Vec<&'a TestLogEntry>,
    pub recommendations: Vec<Recommendation>,
}

impl StructuredSummary<'_> {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the structured summary from a prepared context.
pub fn structured_summary<'a>(ctx: &ReportContext<'a>) -> StructuredSummary<'a> {
    StructuredSummary {
        summary: SummarySection { stats: ctx.summary, generated_at: ctx.generated_at },
        validators: ctx.ranking.iter().map(|r| r.metrics).collect(),
        recent_logs: recent_logs(ctx.logs, RECENT_LOG_WINDOW),
        recommendations: ctx.recommendations.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn log(seq: u64, success: bool) -> TestLogEntry {
        TestLogEntry {
            test_time: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            tx_hash: "HASH".to_string(),
            packet_sequence: seq,
            success,
            latency_ms: 1000,
            memo_identifier: None,
            relayer_signer: None,
        }
    }

    #[test]
    fn test_total_tests_matches_log_count() {
        for n in [0usize, 1, 9, 10, 11, 57] {
            let logs: Vec<TestLogEntry> = (0..n as u64).map(|i| log(i, i % 3 != 0)).collect();
            let ctx = ReportContext::now(&logs, &[]);
            let value = serde_json::to_value(structured_summary(&ctx)).unwrap();

            assert_eq!(value["summary"]["totalTests"], n);
            assert_eq!(value["recentLogs"].as_array().unwrap().len(), n.min(RECENT_LOG_WINDOW));
        }
    }

    #[test]
    fn test_summary_shape() {
        let logs = vec![log(1, true), log(2, false)];
        let metrics = vec![ValidatorMetrics::from_counts("low", 4, 1), ValidatorMetrics::from_counts("high", 4, 4)];
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        let ctx = ReportContext::new(&logs, &metrics, at);

        let value = serde_json::to_value(structured_summary(&ctx)).unwrap();
        let summary = &value["summary"];
        assert_eq!(summary["successfulTests"], 1);
        assert_eq!(summary["successRate"], 50.0);
        assert_eq!(summary["averageLatency"], 1000.0);
        assert_eq!(summary["activeValidators"], 2);
        assert_eq!(summary["generatedAt"], "2025-06-01T10:00:00Z");

        assert_eq!(value["validators"][0]["validatorMoniker"], "high");
        assert_eq!(value["validators"][1]["validatorMoniker"], "low");
        assert_eq!(value["recentLogs"][0]["packetSequence"], 2);
        assert_eq!(value["recommendations"][0]["severity"], "warning");
        assert_eq!(value["recommendations"][0]["advice"]["kind"], "lowSuccessRate");
    }

    #[test]
    fn test_to_json_pretty() {
        let ctx = ReportContext::now(&[], &[]);
        let json = structured_summary(&ctx).to_json_pretty().unwrap();
        assert!(json.contains("\"totalTests\": 0"));
    }
}
