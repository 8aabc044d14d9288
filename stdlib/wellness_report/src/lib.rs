//! Presentation layer for lifestyle risk assessments.
//!
//! Turns a [`wellness_risk::Assessment`] into a one-line summary and a
//! structured [`WellnessReport`], which can be rendered as plain text,
//! Markdown, HTML or JSON.

pub mod cohort;
pub mod render;
pub mod report;

pub use cohort::CohortSummary;
pub use render::{escape_html, render, ReportError, ReportFormat};
pub use report::{risk_badge, summary_line, ReportField, WellnessReport, DISCLAIMER};
