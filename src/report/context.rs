//! Computed values for one report run.
//!
//! `ReportContext` runs the statistics, ranking and recommendation steps once
//! over borrowed input snapshots. Every renderer reads from the same context,
//! so the three output formats never disagree numerically.

use super::ranking::{RankedValidator, rank_validators};
use super::recommend::{Recommendation, synthesize};
use super::stats::{AggregateSummary, summarize};
use crate::types::{TestLogEntry, ValidatorMetrics};
use chrono::{DateTime, Utc};
use log::debug;

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Log entries in chronological order
    pub logs: &'a [TestLogEntry],
    /// Validator snapshots in their natural input order
    pub metrics: &'a [ValidatorMetrics],
    pub summary: AggregateSummary,
    pub ranking: Vec<RankedValidator<'a>>,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: DateTime<Utc>,
}

impl<'a> ReportContext<'a> {
    /// Compute everything the renderers need from the input snapshots.
    pub fn new(logs: &'a [TestLogEntry], metrics: &'a [ValidatorMetrics], generated_at: DateTime<Utc>) -> Self {
        let summary = summarize(logs, metrics);
        let ranking = rank_validators(metrics);
        let recommendations = synthesize(&summary, metrics);

        debug!(
            "Prepared report context: {} logs, {} validators, {:.1}% success, {:.0}ms avg latency",
            summary.total_tests, summary.active_validators, summary.success_rate, summary.average_latency
        );

        Self { logs, metrics, summary, ranking, recommendations, generated_at }
    }

    /// Same as [`ReportContext::new`] stamped with the current time.
    pub fn now(logs: &'a [TestLogEntry], metrics: &'a [ValidatorMetrics]) -> Self {
        Self::new(logs, metrics, Utc::now())
    }
}
