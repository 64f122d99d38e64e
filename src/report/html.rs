//! HTML report renderer.
//!
//! Produces a self-contained bilingual HTML document. Every translatable
//! element carries both `data-zh` and `data-en` attributes so the page can
//! switch language client-side; the initial text uses the requested language.

use super::context::ReportContext;
use super::format::{
    ABBREVIATE_CHARS, HTML_LOG_WINDOW, abbreviate, escape_html, millis, percent, recent_logs, timestamp,
};
use super::labels::{self, Label, Language, tier_emoji, tier_label};
use super::tier::{Tier, latency_tier, rate_tier};

const STYLE: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 20px; background-color: #f5f5f5; }
        .container { max-width: 1200px; margin: 0 auto; background: white; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); padding: 30px; }
        .language-toggle { position: absolute; top: 20px; right: 20px; }
        .language-button { background: #667eea; color: white; border: none; padding: 8px 16px; border-radius: 20px; cursor: pointer; margin: 0 5px; }
        .language-button.active { background: #4facfe; }
        .header { text-align: center; margin-bottom: 30px; }
        .summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; margin-bottom: 30px; }
        .summary-card { background: #edf2f7; padding: 20px; border-radius: 8px; text-align: center; }
        .summary-card .value { font-size: 2em; font-weight: bold; }
        table { width: 100%; border-collapse: collapse; margin-top: 15px; }
        th, td { padding: 10px; text-align: left; border-bottom: 1px solid #e2e8f0; }
        .status-success { color: #38a169; font-weight: bold; }
        .status-failed { color: #e53e3e; font-weight: bold; }
        .latency-excellent { color: #38a169; }
        .latency-good { color: #d69e2e; }
        .latency-poor { color: #e53e3e; }
        .validator-metrics { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 20px; }
        .validator-card { border: 1px solid #e2e8f0; border-radius: 8px; padding: 20px; }
        .metric-row { display: flex; justify-content: space-between; margin: 8px 0; }
        .progress-bar { width: 100%; height: 8px; background-color: #e2e8f0; border-radius: 4px; overflow: hidden; }
        .progress-fill { height: 100%; }
        .progress-success { background-color: #38a169; }
        .progress-warning { background-color: #d69e2e; }
        .progress-danger { background-color: #e53e3e; }
        .footer { text-align: center; margin-top: 40px; color: #718096; }
"#;

const SCRIPT: &str = r#"
        function switchLanguage(lang) {
            localStorage.setItem('reportLanguage', lang);
            document.getElementById('zh-btn').classList.toggle('active', lang === 'zh');
            document.getElementById('en-btn').classList.toggle('active', lang === 'en');
            document.querySelectorAll('[data-zh][data-en]').forEach(function (element) {
                element.textContent = element.getAttribute(lang === 'zh' ? 'data-zh' : 'data-en');
            });
            document.documentElement.lang = lang === 'zh' ? 'zh-CN' : 'en-US';
        }
        document.addEventListener('DOMContentLoaded', function () {
            var saved = localStorage.getItem('reportLanguage');
            if (saved) { switchLanguage(saved); }
        });
"#;

/// Styling class for a success-rate progress bar.
pub fn progress_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "progress-success",
        Tier::Good => "progress-warning",
        Tier::Poor => "progress-danger",
    }
}

/// Styling class for a latency cell.
pub fn latency_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "latency-excellent",
        Tier::Good => "latency-good",
        Tier::Poor => "latency-poor",
    }
}

/// `data-zh="..." data-en="...">text` for an element with translatable content.
fn bilingual(zh: &str, en: &str, lang: Language) -> String {
    let visible = match lang {
        Language::Zh => zh,
        Language::En => en,
    };
    format!(r#"data-zh="{}" data-en="{}">{}"#, escape_html(zh), escape_html(en), escape_html(visible))
}

fn label_attrs(label: Label, lang: Language) -> String {
    bilingual(label.zh, label.en, lang)
}

/// Render the full HTML report.
pub fn render_html(ctx: &ReportContext<'_>, lang: Language) -> String {
    let generated = timestamp(&ctx.generated_at);
    let subtitle_zh = format!("{} - {}: {}", labels::NETWORK.zh, labels::GENERATED_AT.zh, generated);
    let subtitle_en = format!("{} - {}: {}", labels::NETWORK.en, labels::GENERATED_AT.en, generated);
    let (zh_active, en_active) = match lang {
        Language::Zh => (" active", ""),
        Language::En => ("", " active"),
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n<head>\n", lang.html_lang()));
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("    <title>{} | {}</title>\n", labels::TITLE.zh, labels::TITLE.en));
    html.push_str(&format!("    <style>{}    </style>\n</head>\n<body>\n", STYLE));

    html.push_str("    <div class=\"language-toggle\">\n");
    html.push_str(&format!(
        "        <button class=\"language-button{}\" onclick=\"switchLanguage('zh')\" id=\"zh-btn\">中文</button>\n",
        zh_active
    ));
    html.push_str(&format!(
        "        <button class=\"language-button{}\" onclick=\"switchLanguage('en')\" id=\"en-btn\">English</button>\n",
        en_active
    ));
    html.push_str("    </div>\n\n    <div class=\"container\">\n");

    html.push_str("        <div class=\"header\">\n");
    html.push_str(&format!(
        "            <h1 {}</h1>\n",
        bilingual(&format!("🧪 {}", labels::TITLE.zh), &format!("🧪 {}", labels::TITLE.en), lang)
    ));
    html.push_str(&format!("            <div class=\"subtitle\" {}</div>\n", bilingual(&subtitle_zh, &subtitle_en, lang)));
    html.push_str("        </div>\n\n");

    html.push_str(&summary_cards(ctx, lang));
    html.push_str(&section("📊", labels::RANKING, lang, &validator_cards(ctx, lang), true));
    html.push_str(&section("📝", labels::RECENT_LOGS, lang, &log_table(ctx, lang), false));
    html.push_str(&section("📈", labels::PERFORMANCE_STATS, lang, &metrics_table(ctx, lang), false));
    html.push_str(&section("💡", labels::RECOMMENDATIONS, lang, &recommendation_list(ctx, lang), false));

    html.push_str(&format!(
        "        <div class=\"footer\">\n            <p {}</p>\n        </div>\n",
        label_attrs(labels::FOOTER, lang)
    ));
    html.push_str("    </div>\n\n");
    html.push_str(&format!("    <script>{}    </script>\n</body>\n</html>\n", SCRIPT));
    html
}

fn section(icon: &str, title: Label, lang: Language, body: &str, cards: bool) -> String {
    let heading = bilingual(&format!("{} {}", icon, title.zh), &format!("{} {}", icon, title.en), lang);
    let body = if cards { format!("<div class=\"validator-metrics\">{}</div>", body) } else { body.to_string() };
    format!("        <div class=\"section\">\n            <h2 {}</h2>\n            {}\n        </div>\n\n", heading, body)
}

fn summary_cards(ctx: &ReportContext<'_>, lang: Language) -> String {
    let s = &ctx.summary;
    let cards = [
        ("info", labels::TOTAL_TESTS, s.total_tests.to_string()),
        ("success", labels::SUCCESS_RATE, percent(s.success_rate, 1)),
        ("warning", labels::AVERAGE_LATENCY, millis(s.average_latency)),
        ("", labels::ACTIVE_VALIDATORS, s.active_validators.to_string()),
    ];

    let mut out = String::from("        <div class=\"summary\">\n");
    for (class, label, value) in cards {
        let class = if class.is_empty() { "summary-card".to_string() } else { format!("summary-card {}", class) };
        out.push_str(&format!(
            "            <div class=\"{}\">\n                <h3 {}</h3>\n                <div class=\"value\">{}</div>\n            </div>\n",
            class,
            label_attrs(label, lang),
            value
        ));
    }
    out.push_str("        </div>\n\n");
    out
}

fn metric_row(label: Label, lang: Language, value: &str) -> String {
    format!(
        "\n            <div class=\"metric-row\">\n                <span class=\"metric-label\" {}</span>\n                <span class=\"metric-value\">{}</span>\n            </div>",
        label_attrs(label, lang),
        value
    )
}

fn validator_cards(ctx: &ReportContext<'_>, lang: Language) -> String {
    let mut out = String::new();
    for ranked in &ctx.ranking {
        let m = ranked.metrics;
        let last_active = match &m.last_active {
            Some(t) => timestamp(t),
            None => labels::UNKNOWN.get(lang).to_string(),
        };
        let width = m.success_rate.clamp(0.0, 100.0);

        out.push_str("\n        <div class=\"validator-card\">\n");
        out.push_str(&format!("            <h4>{} 🏷️ {}</h4>", ranked.marker().format(), escape_html(&m.moniker)));
        out.push_str(&metric_row(labels::SUCCESS_RATE, lang, &percent(m.success_rate, 1)));
        out.push_str(&format!(
            "\n            <div class=\"progress-bar\">\n                <div class=\"progress-fill {}\" style=\"width: {:.1}%\"></div>\n            </div>",
            progress_class(rate_tier(m.success_rate)),
            width
        ));
        out.push_str(&metric_row(labels::TOTAL_TESTS, lang, &m.total_tests.to_string()));
        out.push_str(&metric_row(labels::AVERAGE_LATENCY, lang, &millis(m.average_latency)));
        out.push_str(&metric_row(labels::CONSECUTIVE_FAILURES, lang, &m.consecutive_failures.to_string()));
        out.push_str(&metric_row(labels::LAST_ACTIVE, lang, &last_active));
        out.push_str("\n        </div>\n");
    }
    out
}

fn header_row(columns: &[Label], lang: Language) -> String {
    let cells: String = columns.iter().map(|c| format!("<th {}</th>", label_attrs(*c, lang))).collect();
    format!("<thead><tr>{}</tr></thead>", cells)
}

fn log_table(ctx: &ReportContext<'_>, lang: Language) -> String {
    let header = header_row(
        &[
            labels::TEST_TIME,
            labels::TX_HASH,
            labels::PACKET_SEQUENCE,
            labels::STATUS,
            labels::LATENCY_MS,
            labels::RELAYER,
            labels::SIGNER,
        ],
        lang,
    );

    let mut rows = String::new();
    for log in recent_logs(ctx.logs, HTML_LOG_WINDOW) {
        let status = labels::status_label(log.success);
        let status_class = if log.success { "status-success" } else { "status-failed" };
        let signer = match &log.relayer_signer {
            Some(s) => abbreviate(s, ABBREVIATE_CHARS),
            None => "Unknown".to_string(),
        };

        rows.push_str(&format!(
            "\n        <tr>\n            <td>{}</td>\n            <td style=\"font-family: monospace; font-size: 12px;\">{}</td>\n            <td>{}</td>\n            <td class=\"{}\" {}</td>\n            <td class=\"{}\">{}</td>\n            <td>{}</td>\n            <td style=\"font-family: monospace; font-size: 12px;\">{}</td>\n        </tr>",
            timestamp(&log.test_time),
            escape_html(&abbreviate(&log.tx_hash, ABBREVIATE_CHARS)),
            log.packet_sequence,
            status_class,
            label_attrs(status, lang),
            latency_class(latency_tier(log.latency_ms)),
            log.latency_ms,
            escape_html(log.relayer_label().unwrap_or("Unknown")),
            escape_html(&signer)
        ));
    }

    format!("<table>{}<tbody>{}\n            </tbody></table>", header, rows)
}

fn metrics_table(ctx: &ReportContext<'_>, lang: Language) -> String {
    let header = header_row(
        &[
            Label::new("Validator", "Validator"),
            labels::TOTAL_TESTS,
            labels::SUCCESSFUL,
            labels::SUCCESS_RATE,
            labels::AVERAGE_LATENCY,
            labels::MAX_LATENCY,
            labels::CONSECUTIVE_FAILURES,
            labels::STATUS,
        ],
        lang,
    );

    let mut rows = String::new();
    for ranked in &ctx.ranking {
        let m = ranked.metrics;
        let tier = rate_tier(m.success_rate);
        let text = tier_label(tier);
        let emoji = tier_emoji(tier);

        rows.push_str(&format!(
            "\n        <tr>\n            <td><strong>{}</strong></td>\n            <td>{}</td>\n            <td>{}</td>\n            <td>{}</td>\n            <td>{}</td>\n            <td>{}</td>\n            <td>{}</td>\n            <td {}</td>\n        </tr>",
            escape_html(&m.moniker),
            m.total_tests,
            m.successful_relays,
            percent(m.success_rate, 1),
            millis(m.average_latency),
            millis(m.max_latency),
            m.consecutive_failures,
            bilingual(&format!("{} {}", emoji, text.zh), &format!("{} {}", emoji, text.en), lang)
        ));
    }

    format!("<table>{}<tbody>{}\n            </tbody></table>", header, rows)
}

fn recommendation_list(ctx: &ReportContext<'_>, lang: Language) -> String {
    let mut items = String::new();
    for rec in &ctx.recommendations {
        let icon = labels::severity_icon(rec.severity);
        let (title_zh, body_zh) = labels::advice_text(&rec.advice, Language::Zh);
        let (title_en, body_en) = labels::advice_text(&rec.advice, Language::En);
        items.push_str(&format!(
            "<li {}</li>",
            bilingual(
                &format!("{} {}: {}", icon, title_zh, body_zh),
                &format!("{} {}: {}", icon, title_en, body_en),
                lang
            )
        ));
    }
    format!("<ul>{}</ul>", items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TestLogEntry, ValidatorMetrics};
    use chrono::{TimeZone, Utc};

    fn log(seq: u64, success: bool, latency_ms: u64) -> TestLogEntry {
        TestLogEntry {
            test_time: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            tx_hash: format!("{:032X}", seq),
            packet_sequence: seq,
            success,
            latency_ms,
            memo_identifier: None,
            relayer_signer: Some("cosmos1qqqqqqqqqqqqqqqqqqqqqqqqqqq".to_string()),
        }
    }

    fn ctx_time() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_css_classes_follow_tiers() {
        assert_eq!(progress_class(rate_tier(95.0)), "progress-success");
        assert_eq!(progress_class(rate_tier(75.0)), "progress-warning");
        assert_eq!(progress_class(rate_tier(10.0)), "progress-danger");
        assert_eq!(latency_class(latency_tier(4999)), "latency-excellent");
        assert_eq!(latency_class(latency_tier(5000)), "latency-good");
        assert_eq!(latency_class(latency_tier(10000)), "latency-poor");
    }

    #[test]
    fn test_summary_cards_show_context_values() {
        let logs = vec![log(1, true, 1000), log(2, true, 2000), log(3, false, 50_000)];
        let ctx = ReportContext::new(&logs, &[], ctx_time());
        let html = render_html(&ctx, Language::En);

        assert!(html.contains("<html lang=\"en-US\">"));
        assert!(html.contains("<div class=\"value\">3</div>"));
        assert!(html.contains("<div class=\"value\">66.7%</div>"));
        assert!(html.contains("<div class=\"value\">1500ms</div>"));
    }

    #[test]
    fn test_labels_carry_both_languages() {
        let ctx = ReportContext::new(&[], &[], ctx_time());

        let zh = render_html(&ctx, Language::Zh);
        assert!(zh.contains(r#"data-zh="总测试数" data-en="Total Tests">总测试数</h3>"#));
        assert!(zh.contains("id=\"zh-btn\">中文"));
        assert!(zh.contains("language-button active\" onclick=\"switchLanguage('zh')"));

        let en = render_html(&ctx, Language::En);
        assert!(en.contains(r#"data-zh="总测试数" data-en="Total Tests">Total Tests</h3>"#));
    }

    #[test]
    fn test_log_rows_are_abbreviated_and_classed() {
        let logs = vec![log(1, true, 12_000)];
        let ctx = ReportContext::new(&logs, &[], ctx_time());
        let html = render_html(&ctx, Language::En);

        assert!(html.contains("0000000000000000..."));
        assert!(html.contains("cosmos1qqqqqqqqq..."));
        assert!(html.contains("<td class=\"latency-poor\">12000</td>"));
        assert!(html.contains("<td>Unknown</td>"));
    }

    #[test]
    fn test_log_table_window() {
        let logs: Vec<TestLogEntry> = (1..=25).map(|i| log(i, true, 100)).collect();
        let ctx = ReportContext::new(&logs, &[], ctx_time());
        let html = render_html(&ctx, Language::En);

        assert_eq!(html.matches("status-success\"").count(), HTML_LOG_WINDOW);
    }

    #[test]
    fn test_moniker_is_escaped() {
        let metrics = vec![ValidatorMetrics::from_counts("<script>x</script>", 4, 4)];
        let ctx = ReportContext::new(&[], &metrics, ctx_time());
        let html = render_html(&ctx, Language::Zh);

        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("🥇 🏷️"));
        assert!(html.contains("style=\"width: 100.0%\""));
    }
}
