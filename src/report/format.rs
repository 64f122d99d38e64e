//! Shared formatting helpers used by every renderer.
//!
//! Keeping rounding and the trailing log window here guarantees the HTML,
//! Markdown and JSON outputs agree on what they show.

use crate::types::TestLogEntry;
use chrono::{DateTime, Utc};

/// Entries shown in the Markdown report and the structured summary.
pub const RECENT_LOG_WINDOW: usize = 10;

/// Entries shown in the HTML log table.
pub const HTML_LOG_WINDOW: usize = 20;

/// Characters kept when abbreviating hashes and addresses.
pub const ABBREVIATE_CHARS: usize = 16;

/// The last `n` entries of `logs`, newest first.
///
/// `logs` is expected in chronological order.
pub fn recent_logs(logs: &[TestLogEntry], n: usize) -> Vec<&TestLogEntry> {
    let start = logs.len().saturating_sub(n);
    logs[start..].iter().rev().collect()
}

/// Format a percentage with a fixed number of decimals, e.g. `80.0%`.
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Format milliseconds rounded to a whole number, e.g. `4500ms`.
pub fn millis(value: f64) -> String {
    format!("{:.0}ms", value)
}

/// Keep the first `max_chars` characters and append `...`.
pub fn abbreviate(s: &str, max_chars: usize) -> String {
    let head: String = s.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// Timestamp as shown in reports.
pub fn timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a Markdown table cell.
pub fn escape_md_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn log(seq: u64) -> TestLogEntry {
        TestLogEntry {
            test_time: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            tx_hash: format!("TX{}", seq),
            packet_sequence: seq,
            success: true,
            latency_ms: 0,
            memo_identifier: None,
            relayer_signer: None,
        }
    }

    fn sequences(entries: &[&TestLogEntry]) -> Vec<u64> {
        entries.iter().map(|e| e.packet_sequence).collect()
    }

    #[test]
    fn test_recent_logs_takes_tail_reversed() {
        let logs: Vec<TestLogEntry> = (1..=15).map(log).collect();
        let recent = recent_logs(&logs, RECENT_LOG_WINDOW);

        assert_eq!(recent.len(), 10);
        assert_eq!(sequences(&recent), (6..=15).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_recent_logs_shorter_than_window() {
        let logs: Vec<TestLogEntry> = (1..=3).map(log).collect();
        assert_eq!(sequences(&recent_logs(&logs, HTML_LOG_WINDOW)), vec![3, 2, 1]);
        assert!(recent_logs(&[], RECENT_LOG_WINDOW).is_empty());
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(percent(80.0, 1), "80.0%");
        assert_eq!(percent(66.666, 2), "66.67%");
        assert_eq!(millis(4500.4), "4500ms");
        assert_eq!(millis(0.0), "0ms");
    }

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate("0123456789ABCDEFXYZ", ABBREVIATE_CHARS), "0123456789ABCDEF...");
        assert_eq!(abbreviate("短地址", ABBREVIATE_CHARS), "短地址...");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"a\" & 'b'</b>"), "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_timestamp_format() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 1, 8, 5, 9).unwrap();
        assert_eq!(timestamp(&dt), "2025-03-01 08:05:09 UTC");
    }
}
