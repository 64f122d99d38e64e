//! Report export to disk.
//!
//! Rendering happens first and is pure; only the final file writes can fail.
//! `save_reports` is best-effort: failures are logged and never propagate.

use super::context::ReportContext;
use super::html::render_html;
use super::labels::Language;
use super::markdown::render_markdown;
use super::summary::structured_summary;
use crate::error::{ReportError, Result};
use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

/// Report name used when the caller does not pick one.
pub const DEFAULT_REPORT_NAME: &str = "ibc-relayer";

/// Output locations for one report run: `<dir>/<name>-report.{html,md}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub html: PathBuf,
    pub markdown: PathBuf,
}

impl ReportPaths {
    pub fn new(output_dir: &Path, name: &str) -> Self {
        Self {
            html: output_dir.join(format!("{}-report.html", name)),
            markdown: output_dir.join(format!("{}-report.md", name)),
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    debug!("Writing {} bytes to {:?}", content.len(), path);
    fs::write(path, content).map_err(|e| ReportError::io(path, e))
}

/// Render both documents and write them.
///
/// Each format is written by its own scoped thread; the first error (HTML
/// before Markdown) is returned.
///
/// # Arguments
/// * `ctx` - Prepared report values
/// * `lang` - Initial language of the documents
/// * `output_dir` - Directory to write into (must exist)
/// * `name` - File name stem, see [`ReportPaths`]
pub fn write_reports(ctx: &ReportContext<'_>, lang: Language, output_dir: &Path, name: &str) -> Result<ReportPaths> {
    let paths = ReportPaths::new(output_dir, name);
    let html = render_html(ctx, lang);
    let markdown = render_markdown(ctx, lang);

    let (html_result, markdown_result) = thread::scope(|s| {
        let html_writer = s.spawn(|| write_file(&paths.html, &html));
        let markdown_writer = s.spawn(|| write_file(&paths.markdown, &markdown));
        (
            html_writer.join().unwrap_or_else(|_| Err(ReportError::WriterPanicked(paths.html.clone()))),
            markdown_writer.join().unwrap_or_else(|_| Err(ReportError::WriterPanicked(paths.markdown.clone()))),
        )
    });

    html_result?;
    markdown_result?;
    Ok(paths)
}

/// Best-effort variant of [`write_reports`].
///
/// Logs the saved paths on success. On failure logs the error and returns
/// `None`; no retry is attempted.
pub fn save_reports(ctx: &ReportContext<'_>, lang: Language, output_dir: &Path, name: &str) -> Option<ReportPaths> {
    match write_reports(ctx, lang, output_dir, name) {
        Ok(paths) => {
            info!("Reports saved:");
            info!("  HTML: {}", paths.html.display());
            info!("  Markdown: {}", paths.markdown.display());
            Some(paths)
        }
        Err(e) => {
            error!("Failed to save reports to {}: {}", output_dir.display(), e);
            None
        }
    }
}

/// Write the structured summary as pretty-printed JSON.
pub fn write_json_summary(ctx: &ReportContext<'_>, output_path: &Path) -> Result<()> {
    let json = structured_summary(ctx).to_json_pretty()?;
    write_file(output_path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_paths_naming() {
        let paths = ReportPaths::new(Path::new("/tmp/out"), DEFAULT_REPORT_NAME);
        assert_eq!(paths.html, PathBuf::from("/tmp/out/ibc-relayer-report.html"));
        assert_eq!(paths.markdown, PathBuf::from("/tmp/out/ibc-relayer-report.md"));
    }

    #[test]
    fn test_save_to_missing_directory_does_not_panic() {
        let ctx = ReportContext::now(&[], &[]);
        let missing = Path::new("/nonexistent/relay-report/out");

        assert!(save_reports(&ctx, Language::Zh, missing, "x").is_none());
        assert!(matches!(write_reports(&ctx, Language::Zh, missing, "x"), Err(ReportError::Io { .. })));
    }
}
