//! Report generation module - statistics, classification and rendering.
//!
//! This module handles:
//! - Calculating overall statistics from relay test logs
//! - Classifying success rates and latencies into tiers
//! - Ranking validators and synthesizing recommendations
//! - Rendering HTML, Markdown and structured summaries
//! - Writing reports to disk
//!
//! # Module Organization
//!
//! - `stats` - Overall success rate, average latency, aggregate summary
//! - `tier` - Threshold tables for rate and latency tiers
//! - `ranking` - Stable ranking and rank markers
//! - `recommend` - Recommendation rules
//! - `labels` - Bilingual label tables
//! - `format` - Shared number/text formatting and the recent-log window
//! - `context` - One report run's computed values
//! - `html`, `markdown`, `summary` - Renderers
//! - `export` - File output

mod context;
mod export;
mod format;
mod html;
mod labels;
mod markdown;
mod ranking;
mod recommend;
mod stats;
mod summary;
mod tier;

pub use context::ReportContext;
pub use stats::{AggregateSummary, average_latency, overall_success_rate, successful_count, summarize};
pub use tier::{Tier, latency_tier, rate_tier};
pub use ranking::{RankMarker, RankedValidator, rank_validators};
pub use recommend::{
    Advice, HIGH_LATENCY_THRESHOLD_MS, LOW_SUCCESS_RATE_THRESHOLD, POOR_PERFORMER_THRESHOLD, Recommendation,
    Severity, synthesize,
};
pub use labels::{Label, Language};
pub use format::{HTML_LOG_WINDOW, RECENT_LOG_WINDOW, recent_logs};

// Renderers
pub use html::render_html;
pub use markdown::{recommendation_lines, render_markdown};
pub use summary::{StructuredSummary, SummarySection, structured_summary};

// Export functions
pub use export::{DEFAULT_REPORT_NAME, ReportPaths, save_reports, write_json_summary, write_reports};
