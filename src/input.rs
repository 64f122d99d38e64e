/// Snapshot loading
///
/// Reads the JSON files the test harness and metrics tracker leave behind.
/// Logs are expected as a JSON array of `TestLogEntry`, metrics as a JSON
/// array of `ValidatorMetrics`.
use crate::error::{ReportError, Result};
use crate::types::{TestLogEntry, ValidatorMetrics};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| ReportError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| ReportError::json(path, e))
}

/// Load relay test logs, sorted chronologically.
///
/// Sorting is stable, so entries sharing a timestamp keep their file order.
pub fn load_logs(path: &Path) -> Result<Vec<TestLogEntry>> {
    let mut logs: Vec<TestLogEntry> = read_json_array(path)?;
    logs.sort_by_key(|log| log.test_time);
    debug!("Loaded {} log entries from {:?}", logs.len(), path);
    Ok(logs)
}

/// Load validator metric snapshots in file order.
///
/// Snapshots that break the counting invariants are reported but kept as-is.
pub fn load_metrics(path: &Path) -> Result<Vec<ValidatorMetrics>> {
    let metrics: Vec<ValidatorMetrics> = read_json_array(path)?;
    for m in metrics.iter().filter(|m| !m.is_consistent()) {
        warn!(
            "Inconsistent metrics for {}: {}/{} successful, success rate {:.1}%",
            m.moniker, m.successful_relays, m.total_tests, m.success_rate
        );
    }
    debug!("Loaded {} validator snapshots from {:?}", metrics.len(), path);
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_logs_sorts_by_time() {
        let file = write_temp(
            r#"[
                {"testTime": "2025-01-02T00:00:00Z", "txHash": "B", "packetSequence": 2, "success": true, "latency": 10},
                {"testTime": "2025-01-01T00:00:00Z", "txHash": "A", "packetSequence": 1, "success": false, "latency": 20}
            ]"#,
        );

        let logs = load_logs(file.path()).unwrap();
        assert_eq!(logs.iter().map(|l| l.packet_sequence).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_load_metrics_keeps_inconsistent_snapshot() {
        let file = write_temp(
            r#"[{"validatorMoniker": "v", "totalTests": 2, "successfulRelays": 3, "successRate": 150.0,
                 "averageLatency": 0, "maxLatency": 0, "continuousFailures": 0}]"#,
        );

        let metrics = load_metrics(file.path()).unwrap();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].successful_relays, 3);
        assert_eq!(metrics[0].success_rate, 150.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_logs(Path::new("/nonexistent/logs.json")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let file = write_temp("{not json");
        let err = load_metrics(file.path()).unwrap_err();
        assert!(matches!(err, ReportError::Json { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
