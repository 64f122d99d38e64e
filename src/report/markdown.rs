//! Markdown report renderer.
//!
//! Produces a single-language Markdown document from a prepared
//! [`ReportContext`]. No statistics are computed here.

use super::context::ReportContext;
use super::format::{RECENT_LOG_WINDOW, escape_md_cell, millis, percent, recent_logs, timestamp};
use super::labels::{self, Language, advice_text, severity_icon, tier_badge};
use super::tier::rate_tier;

/// Render the full Markdown report.
///
/// Sections:
/// - Header with generation time and test network
/// - Overall statistics table
/// - Validator ranking list
/// - Detailed per-validator metrics table
/// - The most recent log entries
/// - Recommendations
pub fn render_markdown(ctx: &ReportContext<'_>, lang: Language) -> String {
    let mut md = String::new();

    md.push_str(&format!("# 🧪 {}\n\n", labels::TITLE.get(lang)));
    md.push_str(&format!("**{}**: {}  \n", labels::GENERATED_AT.get(lang), timestamp(&ctx.generated_at)));
    md.push_str(&format!("**{}**: {}\n\n---\n\n", labels::TEST_NETWORK.get(lang), labels::NETWORK.get(lang)));

    write_overall_stats(&mut md, ctx, lang);
    md.push_str("\n---\n\n");

    md.push_str(&format!("## 🏆 {}\n\n", labels::RANKING.get(lang)));
    md.push_str(&ranking_list(ctx, lang));
    md.push_str("\n\n---\n\n");

    write_metrics_table(&mut md, ctx, lang);
    md.push_str("\n---\n\n");

    write_recent_logs(&mut md, ctx, lang);
    md.push_str("\n---\n\n");

    md.push_str(&format!("## 💡 {}\n\n", labels::RECOMMENDATIONS.get(lang)));
    md.push_str(&recommendations_block(ctx, lang));
    md.push_str("\n\n---\n\n");

    md.push_str(&format!("*{}*\n", labels::FOOTER.get(lang)));
    md
}

fn write_overall_stats(md: &mut String, ctx: &ReportContext<'_>, lang: Language) {
    let s = &ctx.summary;

    md.push_str(&format!("## 📊 {}\n\n", labels::OVERALL_STATS.get(lang)));
    md.push_str(&format!("| {} | {} |\n|------|------|\n", labels::METRIC.get(lang), labels::VALUE.get(lang)));
    md.push_str(&format!("| {} | {} |\n", labels::TOTAL_TESTS.get(lang), s.total_tests));
    md.push_str(&format!("| {} | {} |\n", labels::SUCCESSFUL_TESTS.get(lang), s.successful_tests));
    md.push_str(&format!("| {} | {} |\n", labels::SUCCESS_RATE.get(lang), percent(s.success_rate, 2)));
    md.push_str(&format!("| {} | {} |\n", labels::AVERAGE_LATENCY.get(lang), millis(s.average_latency)));
    md.push_str(&format!("| {} | {} |\n", labels::ACTIVE_VALIDATORS.get(lang), s.active_validators));
}

/// One line per validator: marker, moniker, rate, counts and tier badge.
pub fn ranking_list(ctx: &ReportContext<'_>, lang: Language) -> String {
    ctx.ranking
        .iter()
        .map(|ranked| {
            let m = ranked.metrics;
            format!(
                "{} **{}** - {}: {} ({}/{}) {}",
                ranked.marker().format(),
                m.moniker,
                labels::SUCCESS_RATE.get(lang),
                percent(m.success_rate, 1),
                m.successful_relays,
                m.total_tests,
                tier_badge(rate_tier(m.success_rate), lang)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_metrics_table(md: &mut String, ctx: &ReportContext<'_>, lang: Language) {
    md.push_str(&format!("## 📈 {}\n\n", labels::DETAILED_METRICS.get(lang)));
    md.push_str(&format!(
        "| Validator | {} | {} | {} | {} | {} | {} | {} |\n",
        labels::TOTAL_TESTS.get(lang),
        labels::SUCCESSFUL.get(lang),
        labels::SUCCESS_RATE.get(lang),
        labels::AVERAGE_LATENCY.get(lang),
        labels::MAX_LATENCY.get(lang),
        labels::CONSECUTIVE_FAILURES.get(lang),
        labels::STATUS.get(lang)
    ));
    md.push_str("|-----------|--------|------|--------|----------|----------|----------|------|\n");

    for ranked in &ctx.ranking {
        let m = ranked.metrics;
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
            escape_md_cell(&m.moniker),
            m.total_tests,
            m.successful_relays,
            percent(m.success_rate, 1),
            millis(m.average_latency),
            millis(m.max_latency),
            m.consecutive_failures,
            tier_badge(rate_tier(m.success_rate), lang)
        ));
    }
}

fn write_recent_logs(md: &mut String, ctx: &ReportContext<'_>, lang: Language) {
    let window = labels::LATEST_N.get(lang).replace("{n}", &RECENT_LOG_WINDOW.to_string());
    md.push_str(&format!("## 📝 {} ({})\n\n", labels::RECENT_RECORDS.get(lang), window));
    md.push_str(&format!(
        "| {} | {} | {} | Validator | {} |\n",
        labels::TIME.get(lang),
        labels::STATUS.get(lang),
        labels::LATENCY.get(lang),
        labels::PACKET_SEQUENCE.get(lang)
    ));
    md.push_str("|------|------|------|-----------|------------|\n");

    for log in recent_logs(ctx.logs, RECENT_LOG_WINDOW) {
        md.push_str(&format!(
            "| {} | {} | {}ms | {} | {} |\n",
            timestamp(&log.test_time),
            labels::status_label(log.success).get(lang),
            log.latency_ms,
            escape_md_cell(log.relayer_label().unwrap_or("Unknown")),
            log.packet_sequence
        ));
    }
}

/// One line per recommendation: icon, bold title and hint.
pub fn recommendation_lines(ctx: &ReportContext<'_>, lang: Language) -> Vec<String> {
    ctx.recommendations
        .iter()
        .map(|rec| {
            let (title, body) = advice_text(&rec.advice, lang);
            format!("{} **{}**: {}", severity_icon(rec.severity), title, body)
        })
        .collect()
}

/// Recommendations as paragraphs separated by blank lines.
pub fn recommendations_block(ctx: &ReportContext<'_>, lang: Language) -> String {
    recommendation_lines(ctx, lang).join("\n\n")
}
