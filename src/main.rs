// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod ui;

use log::warn;
use relay_report::input;
use relay_report::report::{self, ReportContext};
use std::fs;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Resolve configuration
    let config = match config::build_report_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Load input snapshots
    let logs = match input::load_logs(&config.logs_path) {
        Ok(logs) => logs,
        Err(e) => {
            ui::print_error(&format!("Failed to load logs: {}", e));
            std::process::exit(1);
        }
    };

    let metrics = match &config.metrics_path {
        Some(path) => match input::load_metrics(path) {
            Ok(metrics) => metrics,
            Err(e) => {
                ui::print_error(&format!("Failed to load metrics: {}", e));
                std::process::exit(1);
            }
        },
        None => Vec::new(),
    };

    if !config.print_json {
        ui::status(&format!("Generating report for {} log entries and {} validators", logs.len(), metrics.len()));
    }

    let ctx = ReportContext::now(&logs, &metrics);

    if !config.output_dir.exists()
        && let Err(e) = fs::create_dir_all(&config.output_dir)
    {
        warn!("Failed to create output directory {}: {}", config.output_dir.display(), e);
    }

    // Persist HTML and Markdown (best-effort)
    let saved = report::save_reports(&ctx, config.language, &config.output_dir, &config.report_name);
    if !config.print_json {
        match &saved {
            Some(paths) => {
                ui::success(&format!("HTML report saved to: {}", paths.html.display()));
                ui::success(&format!("Markdown report saved to: {}", paths.markdown.display()));
            }
            None => ui::print_error("Failed to save reports (see log for details)"),
        }
    }

    if let Some(path) = &config.json_output {
        match report::write_json_summary(&ctx, path) {
            Ok(()) => {
                if !config.print_json {
                    ui::success(&format!("JSON summary saved to: {}", path.display()));
                }
            }
            Err(e) => warn!("Failed to write JSON summary: {}", e),
        }
    }

    if config.print_json {
        match report::structured_summary(&ctx).to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                ui::print_error(&format!("Failed to serialize summary: {}", e));
                std::process::exit(1);
            }
        }
    } else {
        print_summary(&ctx, config.language);
    }
}

/// Print the headline numbers and recommendations to the console
fn print_summary(ctx: &ReportContext<'_>, lang: report::Language) {
    let s = &ctx.summary;
    println!("\n=== Summary ===");
    println!("Total tests:       {}", s.total_tests);
    println!("Successful:        {}", s.successful_tests);
    println!("Success rate:      {:.1}%", s.success_rate);
    println!("Average latency:   {:.0}ms", s.average_latency);
    println!("Active validators: {}", s.active_validators);

    if let Some(top) = ctx.ranking.first() {
        println!("Top validator:     {} ({:.1}%)", top.metrics.moniker, top.metrics.success_rate);
    }

    println!();
    for line in report::recommendation_lines(ctx, lang) {
        println!("{}", line);
    }
}
