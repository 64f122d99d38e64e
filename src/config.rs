/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportConfig from CLI arguments
/// - Resolving the output directory (flag, environment, current directory)
/// - Validating the report name and language
use crate::cli::CliArgs;
use log::debug;
use relay_report::report::Language;
use std::env;
use std::path::PathBuf;

/// Environment variable consulted when `--output-dir` is not given
pub const OUTPUT_DIR_ENV: &str = "RELAY_REPORT_DIR";

/// Fully resolved, immutable settings for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub logs_path: PathBuf,
    pub metrics_path: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub report_name: String,
    pub language: Language,
    pub print_json: bool,
    pub json_output: Option<PathBuf>,
}

/// Build a complete ReportConfig from CLI arguments
pub fn build_report_config(args: &CliArgs) -> Result<ReportConfig, String> {
    debug!("Building report config from CLI args");

    let language: Language = args.lang.parse()?;
    let report_name = validate_report_name(&args.name)?;
    let output_dir = resolve_output_dir(args.output_dir.as_ref(), env::var(OUTPUT_DIR_ENV).ok())?;

    debug!("Output directory: {:?}, report name: {}, language: {}", output_dir, report_name, language);

    Ok(ReportConfig {
        logs_path: args.logs.clone(),
        metrics_path: args.metrics.clone(),
        output_dir,
        report_name,
        language,
        print_json: args.json,
        json_output: args.json_output.clone(),
    })
}

/// The report name becomes part of a file name, so it must be a single path component
fn validate_report_name(name: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Report name must not be empty".to_string());
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(format!("Report name '{}' must not contain path separators", name));
    }
    Ok(name.to_string())
}

/// Pick the output directory: explicit flag, then environment, then current directory
fn resolve_output_dir(flag: Option<&PathBuf>, env_value: Option<String>) -> Result<PathBuf, String> {
    let dir = match (flag, env_value) {
        (Some(dir), _) => dir.clone(),
        (None, Some(dir)) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => env::current_dir().map_err(|e| format!("Failed to determine current directory: {}", e))?,
    };

    if dir.exists() && !dir.is_dir() {
        return Err(format!("Output path {} is not a directory", dir.display()));
    }
    Ok(dir)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
