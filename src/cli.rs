use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "relay-report")]
#[command(about = "Generate IBC relayer test reports from relay logs and validator metrics")]
#[command(version)]
pub struct CliArgs {
    /// JSON file with relay test log entries (array of log records)
    #[arg(long, short = 'l', value_name = "PATH")]
    pub logs: PathBuf,

    /// JSON file with validator metric snapshots (array of metric records)
    /// When omitted, reports are generated without validator data
    #[arg(long, short = 'm', value_name = "PATH")]
    pub metrics: Option<PathBuf>,

    /// Directory to write the HTML and Markdown reports into
    /// Default: $RELAY_REPORT_DIR, or the current directory
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report file name stem: writes <NAME>-report.html and <NAME>-report.md
    #[arg(long, default_value = "ibc-relayer")]
    pub name: String,

    /// Initial report language (zh or en)
    #[arg(long, default_value = "zh")]
    pub lang: String,

    /// Print the structured summary as JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Also write the structured summary to this JSON file
    #[arg(long, value_name = "PATH")]
    pub json_output: Option<PathBuf>,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
