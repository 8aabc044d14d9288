use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::bmi::BmiCategory;
use crate::input::{InputError, LifestyleInput};
use crate::scoring::{score, Features, ScoreBreakdown};
use crate::tier::RiskTier;
use crate::tips::{tips_for, Tip};

/// Everything a report needs from one classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub input: LifestyleInput,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub breakdown: ScoreBreakdown,
    pub tier: RiskTier,
    pub confidence: f64,
    pub tips: Vec<Tip>,
}

impl Assessment {
    pub fn score(&self) -> u32 {
        self.breakdown.total
    }
}

/// Classify an already validated profile.
///
/// Deterministic apart from the single confidence draw taken from `rng`.
pub fn classify<R: Rng + ?Sized>(input: &LifestyleInput, rng: &mut R) -> Assessment {
    let features = Features::from_input(input);
    let breakdown = score(&features);
    let tier = RiskTier::from_score(breakdown.total);
    let confidence = tier.confidence_band().draw(rng);
    let tips = tips_for(&features);

    log::debug!(
        "classified: bmi={:.2} score={} tier={tier} tips={}",
        features.bmi,
        breakdown.total,
        tips.len()
    );

    Assessment {
        input: *input,
        bmi: features.bmi,
        bmi_category: BmiCategory::from_bmi(features.bmi),
        breakdown,
        tier,
        confidence,
        tips,
    }
}

/// Validate, then classify.
pub fn assess_checked<R: Rng + ?Sized>(
    input: &LifestyleInput,
    rng: &mut R,
) -> Result<Assessment, InputError> {
    input.validate()?;
    Ok(classify(input, rng))
}

/// What a front end needs: hand over answers, get a result back.
pub trait Classifier {
    fn assess(&mut self, input: &LifestyleInput) -> Result<Assessment, InputError>;
}

/// [`Classifier`] backed by an owned random source.
#[derive(Debug, Clone)]
pub struct RngClassifier<R> {
    rng: R,
}

impl<R: Rng> RngClassifier<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngClassifier<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Classifier for RngClassifier<R> {
    fn assess(&mut self, input: &LifestyleInput) -> Result<Assessment, InputError> {
        assess_checked(input, &mut self.rng)
    }
}
