pub mod batch;
pub mod form;
pub mod profile;

use wellness_report::{render, summary_line, ReportError, ReportFormat, WellnessReport};
use wellness_risk::Assessment;

/// What `assess` and `form` print: the summary line, or the summary line
/// followed by the full report.
pub fn render_assessment(
    assessment: &Assessment,
    format: ReportFormat,
    summary_only: bool,
) -> Result<String, ReportError> {
    let summary = summary_line(assessment);
    if summary_only {
        return Ok(format!("{summary}\n"));
    }
    let report = WellnessReport::from_assessment(assessment);
    let body = render(&report, format)?;
    match format {
        // Machine-readable output stays a single document.
        ReportFormat::Json | ReportFormat::Html => Ok(body),
        ReportFormat::Text | ReportFormat::Markdown => Ok(format!("⚡ {summary}\n\n{body}")),
    }
}
