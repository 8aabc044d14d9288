use std::fmt;

use serde::{Deserialize, Serialize};
use wellness_risk::{Assessment, RiskTier};

/// Aggregate view over a batch of assessments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CohortSummary {
    pub records: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub mean_bmi: Option<f64>,
    pub mean_score: Option<f64>,
}

impl CohortSummary {
    pub fn from_assessments<'a, I>(assessments: I) -> Self
    where
        I: IntoIterator<Item = &'a Assessment>,
    {
        let mut out = CohortSummary::default();
        let mut bmi_sum = 0.0;
        let mut score_sum = 0u64;
        for a in assessments {
            match a.tier {
                RiskTier::Low => out.low += 1,
                RiskTier::Medium => out.medium += 1,
                RiskTier::High => out.high += 1,
            }
            out.records += 1;
            bmi_sum += a.bmi;
            score_sum += u64::from(a.score());
        }
        if out.records > 0 {
            let n = out.records as f64;
            out.mean_bmi = Some(bmi_sum / n);
            out.mean_score = Some(score_sum as f64 / n);
        }
        out
    }

    pub fn count(&self, tier: RiskTier) -> usize {
        match tier {
            RiskTier::Low => self.low,
            RiskTier::Medium => self.medium,
            RiskTier::High => self.high,
        }
    }
}

impl fmt::Display for CohortSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records | low: {} | medium: {} | high: {}",
            self.records, self.low, self.medium, self.high
        )?;
        if let (Some(bmi), Some(score)) = (self.mean_bmi, self.mean_score) {
            write!(f, " | mean BMI: {bmi:.1} | mean score: {score:.1}")?;
        }
        Ok(())
    }
}
