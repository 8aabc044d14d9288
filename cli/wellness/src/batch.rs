//! Newline-delimited JSON batches of questionnaire answers.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;
use wellness_report::CohortSummary;
use wellness_risk::{Assessment, Classifier, InputError, LifestyleInput};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("line {line}: invalid JSON: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Invalid { line: usize, source: InputError },
}

impl BatchError {
    pub fn line(&self) -> usize {
        match self {
            BatchError::Parse { line, .. } | BatchError::Invalid { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    /// 1-based line number in the input.
    pub line: usize,
    pub assessment: Assessment,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub entries: Vec<BatchEntry>,
    pub errors: Vec<BatchError>,
}

impl BatchOutcome {
    pub fn summary(&self) -> CohortSummary {
        CohortSummary::from_assessments(self.entries.iter().map(|e| &e.assessment))
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Stream one JSON object per assessed record to `out`.
    pub fn write_json_lines<W: Write>(&self, mut out: W) -> serde_json::Result<()> {
        for entry in &self.entries {
            serde_json::to_writer(&mut out, entry)?;
            out.write_all(b"\n").map_err(serde_json::Error::io)?;
        }
        Ok(())
    }
}

/// Classify every non-blank line. Bad records are collected, not fatal.
pub fn run_batch<C: Classifier + ?Sized>(text: &str, classifier: &mut C) -> BatchOutcome {
    let mut out = BatchOutcome::default();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let input = match serde_json::from_str::<LifestyleInput>(raw) {
            Ok(v) => v,
            Err(source) => {
                log::warn!("skipping line {line}: {source}");
                out.errors.push(BatchError::Parse { line, source });
                continue;
            }
        };
        match classifier.assess(&input) {
            Ok(assessment) => out.entries.push(BatchEntry { line, assessment }),
            Err(source) => {
                log::warn!("skipping line {line}: {source}");
                out.errors.push(BatchError::Invalid { line, source });
            }
        }
    }
    log::info!(
        "batch finished: {} assessed, {} rejected",
        out.entries.len(),
        out.errors.len()
    );
    out
}
