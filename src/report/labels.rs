//! Bilingual label tables.
//!
//! The report core only produces semantic identifiers (tiers, advice kinds).
//! This module maps them to fixed Chinese/English text pairs; the language is
//! chosen once per render.

use super::recommend::{Advice, Severity};
use super::tier::Tier;
use std::fmt;
use std::str::FromStr;

/// Output language for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    /// Value for the HTML `lang` attribute
    pub fn html_lang(&self) -> &'static str {
        match self {
            Language::Zh => "zh-CN",
            Language::En => "en-US",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "cn" => Ok(Language::Zh),
            "en" | "en-us" => Ok(Language::En),
            other => Err(format!("Unsupported language '{}' (expected 'zh' or 'en')", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A fixed pair of translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub zh: &'static str,
    pub en: &'static str,
}

impl Label {
    pub const fn new(zh: &'static str, en: &'static str) -> Self {
        Self { zh, en }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Zh => self.zh,
            Language::En => self.en,
        }
    }
}

pub const TITLE: Label = Label::new("IBC Relayer 测试报告", "IBC Relayer Test Report");
pub const NETWORK: Label = Label::new("vota-bobtail 激励测试网", "vota-bobtail Incentive Testnet");
pub const GENERATED_AT: Label = Label::new("生成时间", "Generated at");
pub const TEST_NETWORK: Label = Label::new("测试网络", "Test Network");
pub const FOOTER: Label = Label::new(
    "此报告由 IBC Relayer 测试系统自动生成",
    "This report is automatically generated by the IBC Relayer testing system",
);

pub const OVERALL_STATS: Label = Label::new("总体统计", "Overall Statistics");
pub const METRIC: Label = Label::new("指标", "Metric");
pub const VALUE: Label = Label::new("数值", "Value");
pub const TOTAL_TESTS: Label = Label::new("总测试数", "Total Tests");
pub const SUCCESSFUL_TESTS: Label = Label::new("成功测试数", "Successful Tests");
pub const SUCCESSFUL: Label = Label::new("成功数", "Successful");
pub const SUCCESS_RATE: Label = Label::new("成功率", "Success Rate");
pub const AVERAGE_LATENCY: Label = Label::new("平均延迟", "Average Latency");
pub const MAX_LATENCY: Label = Label::new("最大延迟", "Max Latency");
pub const ACTIVE_VALIDATORS: Label = Label::new("活跃 Validators", "Active Validators");
pub const CONSECUTIVE_FAILURES: Label = Label::new("连续失败", "Consecutive Failures");
pub const LAST_ACTIVE: Label = Label::new("最后活跃", "Last Active");
pub const UNKNOWN: Label = Label::new("未知", "Unknown");
pub const STATUS: Label = Label::new("状态", "Status");

pub const RANKING: Label = Label::new("Validator 性能排名", "Validator Performance Ranking");
pub const DETAILED_METRICS: Label = Label::new("详细性能指标", "Detailed Performance Metrics");
pub const PERFORMANCE_STATS: Label = Label::new("性能统计", "Performance Statistics");
pub const RECENT_LOGS: Label = Label::new("最近测试日志", "Recent Test Logs");
pub const RECENT_RECORDS: Label = Label::new("最近测试记录", "Recent Test Records");
pub const LATEST_N: Label = Label::new("最新{n}条", "latest {n}");
pub const RECOMMENDATIONS: Label = Label::new("建议和总结", "Recommendations & Summary");

pub const TEST_TIME: Label = Label::new("测试时间", "Test Time");
pub const TX_HASH: Label = Label::new("交易Hash", "Transaction Hash");
pub const PACKET_SEQUENCE: Label = Label::new("Packet序列", "Packet Sequence");
pub const LATENCY_MS: Label = Label::new("延迟(ms)", "Latency(ms)");
pub const RELAYER: Label = Label::new("Relayer标识", "Relayer Identifier");
pub const SIGNER: Label = Label::new("Signer地址", "Signer Address");
pub const TIME: Label = Label::new("时间", "Time");
pub const LATENCY: Label = Label::new("延迟", "Latency");

pub const STATUS_SUCCESS: Label = Label::new("✅ 成功", "✅ Success");
pub const STATUS_FAILED: Label = Label::new("❌ 失败", "❌ Failed");

/// Text for a success-rate tier.
pub fn tier_label(tier: Tier) -> Label {
    match tier {
        Tier::Excellent => Label::new("优秀", "Excellent"),
        Tier::Good => Label::new("良好", "Good"),
        Tier::Poor => Label::new("需改进", "Needs Improvement"),
    }
}

/// Status light shown next to a tier label.
pub fn tier_emoji(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "🟢",
        Tier::Good => "🟡",
        Tier::Poor => "🔴",
    }
}

/// Tier label prefixed with its status light, e.g. "🟢 Excellent".
pub fn tier_badge(tier: Tier, lang: Language) -> String {
    format!("{} {}", tier_emoji(tier), tier_label(tier).get(lang))
}

pub fn status_label(success: bool) -> Label {
    if success { STATUS_SUCCESS } else { STATUS_FAILED }
}

pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "⚠️",
        Severity::Ok => "✅",
    }
}

/// Title and hint for a recommendation.
///
/// Returns `(title, body)`; the poor-performer body lists the monikers.
pub fn advice_text(advice: &Advice, lang: Language) -> (&'static str, String) {
    match advice {
        Advice::LowSuccessRate => (
            Label::new("整体成功率偏低", "Low overall success rate").get(lang),
            Label::new("建议检查网络连接和 relayer 配置", "Check network connectivity and relayer configuration")
                .get(lang)
                .to_string(),
        ),
        Advice::HighLatency => (
            Label::new("平均延迟较高", "High average latency").get(lang),
            Label::new("建议优化 relayer 响应速度", "Improve relayer response time").get(lang).to_string(),
        ),
        Advice::PoorPerformers(monikers) => {
            let title = Label::new("性能不佳的 Validators", "Under-performing validators").get(lang);
            let body = match lang {
                Language::Zh => format!("{} 需要改进", monikers.join(", ")),
                Language::En => format!("{} need improvement", monikers.join(", ")),
            };
            (title, body)
        }
        Advice::AllNominal => (
            Label::new("整体表现良好", "Overall performance is good").get(lang),
            Label::new("所有 validators 的 relayer 服务运行正常", "Relayer services of all validators are healthy")
                .get(lang)
                .to_string(),
        ),
    }
}
