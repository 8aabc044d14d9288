use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::report::{ReportField, WellnessReport};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unknown report format '{0}' (expected text, markdown, html or json)")]
    UnknownFormat(String),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Markdown,
    Html,
    Json,
}

impl ReportFormat {
    pub fn name(self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Markdown => "markdown",
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "html" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

pub fn render(report: &WellnessReport, format: ReportFormat) -> Result<String, ReportError> {
    log::debug!("rendering {format} report for tier {}", report.tier);
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Markdown => Ok(render_markdown(report)),
        ReportFormat::Html => Ok(render_html(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub fn render_text(report: &WellnessReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n\n", report.title, report.subtitle));
    out.push_str(&format!("{}\n", report.badge));
    out.push_str(&format!("Confidence: {:.1}%\n", report.confidence));
    out.push_str(&format!("Score: {}\n", report.score));

    text_section(&mut out, "👤 Your Details", &report.details);
    text_section(&mut out, "📊 Health Summary", &report.health_summary);
    if !report.score_factors.is_empty() {
        text_section(&mut out, "🧮 Score Factors", &report.score_factors);
    }

    out.push_str("\n🧾 Personalized Wellness Report\n");
    for tip in &report.tips {
        out.push_str(&format!("  - {tip}\n"));
    }

    out.push_str("\n⚠️ Disclaimer\n");
    out.push_str(&format!("  {}\n", report.disclaimer));
    out
}

fn text_section(out: &mut String, heading: &str, fields: &[ReportField]) {
    out.push_str(&format!("\n{heading}\n"));
    for f in fields {
        out.push_str(&format!("  {}: {}\n", f.label, f.value));
    }
}

pub fn render_markdown(report: &WellnessReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", report.title));
    out.push_str(&format!("_{}_\n\n", report.subtitle));
    out.push_str(&format!("## {}\n\n", report.badge));
    out.push_str(&format!(
        "Confidence: **{:.1}%** (score {})\n",
        report.confidence, report.score
    ));

    markdown_section(&mut out, "👤 Your Details", &report.details);
    markdown_section(&mut out, "📊 Health Summary", &report.health_summary);
    if !report.score_factors.is_empty() {
        markdown_section(&mut out, "🧮 Score Factors", &report.score_factors);
    }

    out.push_str("\n### 🧾 Personalized Wellness Report\n\n");
    for tip in &report.tips {
        out.push_str(&format!("- {tip}\n"));
    }

    out.push_str("\n### ⚠️ Disclaimer\n\n");
    out.push_str(&format!("{}\n", report.disclaimer));
    out
}

fn markdown_section(out: &mut String, heading: &str, fields: &[ReportField]) {
    out.push_str(&format!("\n### {heading}\n\n"));
    for f in fields {
        out.push_str(&format!("- {}: **{}**\n", f.label, f.value));
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const CARD: &str = "padding:14px;border-radius:16px;";

pub fn render_html(report: &WellnessReport) -> String {
    let mut out = String::new();
    out.push_str("<div style=\"font-family: system-ui; padding: 18px;\">\n");
    out.push_str(&format!(
        "  <h1 style=\"margin:0;font-size:28px;\">{}</h1>\n",
        escape_html(&report.title)
    ));
    out.push_str(&format!(
        "  <p style=\"margin-top:6px;opacity:0.9;\">{}</p>\n",
        escape_html(&report.subtitle)
    ));

    out.push_str(&format!(
        "  <div style=\"margin-top:14px;{CARD}background:#0b1220;color:white;\">\n"
    ));
    out.push_str(&format!(
        "    <h2 style=\"margin:0;font-size:20px;\">{}</h2>\n",
        escape_html(&report.badge)
    ));
    out.push_str(&format!(
        "    <p style=\"margin:6px 0 0 0;\">Confidence: <b>{:.1}%</b></p>\n",
        report.confidence
    ));
    out.push_str("  </div>\n");

    out.push_str(
        "  <div style=\"display:grid;grid-template-columns:1fr 1fr;gap:12px;margin-top:14px;\">\n",
    );
    html_card(&mut out, "👤 Your Details", &report.details);
    html_card(&mut out, "📊 Health Summary", &report.health_summary);
    out.push_str("  </div>\n");

    if !report.score_factors.is_empty() {
        out.push_str("  <div style=\"margin-top:14px;\">\n");
        html_card(&mut out, "🧮 Score Factors", &report.score_factors);
        out.push_str("  </div>\n");
    }

    out.push_str(&format!(
        "  <div style=\"margin-top:14px;{CARD}background:#fff7ed;\">\n"
    ));
    out.push_str("    <h3 style=\"margin:0 0 8px 0;\">🧾 Personalized Wellness Report</h3>\n");
    out.push_str("    <ul style=\"margin:0;padding-left:18px;\">\n");
    for tip in &report.tips {
        out.push_str(&format!(
            "      <li style=\"margin:6px 0;\">{}</li>\n",
            escape_html(tip)
        ));
    }
    out.push_str("    </ul>\n");
    out.push_str("  </div>\n");

    out.push_str(&format!(
        "  <div style=\"margin-top:14px;{CARD}background:#ecfeff;\">\n"
    ));
    out.push_str("    <h3 style=\"margin:0 0 8px 0;\">⚠️ Disclaimer</h3>\n");
    out.push_str(&format!(
        "    <p style=\"margin:0;\">{}</p>\n",
        escape_html(&report.disclaimer)
    ));
    out.push_str("  </div>\n");
    out.push_str("</div>\n");
    out
}

fn html_card(out: &mut String, heading: &str, fields: &[ReportField]) {
    out.push_str(&format!("    <div style=\"{CARD}background:#f3f4f6;\">\n"));
    out.push_str(&format!(
        "      <h3 style=\"margin:0 0 6px 0;\">{}</h3>\n",
        escape_html(heading)
    ));
    for f in fields {
        out.push_str(&format!(
            "      <p style=\"margin:0;\">{}: <b>{}</b></p>\n",
            escape_html(&f.label),
            escape_html(&f.value)
        ));
    }
    out.push_str("    </div>\n");
}
