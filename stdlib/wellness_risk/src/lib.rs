//! Lifestyle health risk classifier.
//!
//! Maps nine questionnaire answers to a BMI, an additive point score, a
//! Low/Medium/High risk tier with a decorative confidence figure, and an
//! ordered list of advisory tips. This is a demonstration heuristic, not a
//! validated medical model.

pub mod bmi;
pub mod classifier;
pub mod input;
pub mod scoring;
pub mod tier;
pub mod tips;

pub use bmi::{bmi, BmiCategory};
pub use classifier::{assess_checked, classify, Assessment, Classifier, RngClassifier};
pub use input::{field_range, parse_yes_no, Gender, InputError, LifestyleInput, StressLevel};
pub use scoring::{score, Features, RuleContribution, RuleId, ScoreBreakdown, SCORING_RULES};
pub use tier::{ConfidenceBand, RiskTier};
pub use tips::{tips_for, Tip, TipKind, TIP_RULES};
