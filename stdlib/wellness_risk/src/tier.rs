use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    pub fn from_score(score: u32) -> Self {
        match score {
            0..=3 => RiskTier::Low,
            4..=6 => RiskTier::Medium,
            _ => RiskTier::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    pub fn confidence_band(self) -> ConfidenceBand {
        match self {
            RiskTier::Low => ConfidenceBand::new(86.0, 8.0),
            RiskTier::Medium => ConfidenceBand::new(78.0, 10.0),
            RiskTier::High => ConfidenceBand::new(82.0, 10.0),
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentational confidence range for a tier, in percent.
///
/// This is jitter for display, not a calibrated probability; the bands of
/// different tiers overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBand {
    pub base: f64,
    pub spread: f64,
}

impl ConfidenceBand {
    pub const fn new(base: f64, spread: f64) -> Self {
        Self { base, spread }
    }

    pub fn min(&self) -> f64 {
        self.base
    }

    pub fn max(&self) -> f64 {
        self.base + self.spread
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }

    /// One uniform draw from `[base, base + spread)`.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.gen();
        let value = self.base + u * self.spread;
        log::trace!("confidence draw u={u:.4} -> {value:.2}");
        value
    }
}
