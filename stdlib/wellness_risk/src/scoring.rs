//! Additive lifestyle score.
//!
//! The score is the sum of the points of every rule in [`SCORING_RULES`]
//! whose predicate holds. Rules are independent: paired thresholds such as
//! age 35 and age 50 both fire for a 55 year old. The two stress rules are
//! the exception, they test for equality and therefore never fire together.

use serde::{Deserialize, Serialize};

use crate::bmi::bmi;
use crate::input::{LifestyleInput, StressLevel};

/// Input answers together with the values derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    pub input: LifestyleInput,
    pub bmi: f64,
}

impl Features {
    pub fn from_input(input: &LifestyleInput) -> Self {
        Self {
            input: *input,
            bmi: bmi(input.height_cm, input.weight_kg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    AgeOver35,
    AgeOver50,
    Overweight,
    Obese,
    ShortSleep,
    VeryShortSleep,
    LowExercise,
    NoExercise,
    FrequentJunkFood,
    NearDailyJunkFood,
    MediumStress,
    HighStress,
    Smoking,
}

impl RuleId {
    pub fn description(self) -> &'static str {
        match self {
            RuleId::AgeOver35 => "age 35 or older",
            RuleId::AgeOver50 => "age 50 or older",
            RuleId::Overweight => "BMI 25 or above",
            RuleId::Obese => "BMI 30 or above",
            RuleId::ShortSleep => "less than 6 hours of sleep",
            RuleId::VeryShortSleep => "less than 5 hours of sleep",
            RuleId::LowExercise => "exercise on at most 1 day a week",
            RuleId::NoExercise => "no exercise",
            RuleId::FrequentJunkFood => "junk food on 4 or more days a week",
            RuleId::NearDailyJunkFood => "junk food on 6 or more days a week",
            RuleId::MediumStress => "medium stress",
            RuleId::HighStress => "high stress",
            RuleId::Smoking => "smoking",
        }
    }
}

pub struct ScoringRule {
    pub id: RuleId,
    pub points: u32,
    pub applies: fn(&Features) -> bool,
}

pub static SCORING_RULES: &[ScoringRule] = &[
    ScoringRule {
        id: RuleId::AgeOver35,
        points: 1,
        applies: |f| f.input.age >= 35,
    },
    ScoringRule {
        id: RuleId::AgeOver50,
        points: 1,
        applies: |f| f.input.age >= 50,
    },
    ScoringRule {
        id: RuleId::Overweight,
        points: 1,
        applies: |f| f.bmi >= 25.0,
    },
    ScoringRule {
        id: RuleId::Obese,
        points: 1,
        applies: |f| f.bmi >= 30.0,
    },
    ScoringRule {
        id: RuleId::ShortSleep,
        points: 1,
        applies: |f| f.input.sleep_hours < 6.0,
    },
    ScoringRule {
        id: RuleId::VeryShortSleep,
        points: 1,
        applies: |f| f.input.sleep_hours < 5.0,
    },
    ScoringRule {
        id: RuleId::LowExercise,
        points: 1,
        applies: |f| f.input.exercise_days <= 1,
    },
    ScoringRule {
        id: RuleId::NoExercise,
        points: 1,
        applies: |f| f.input.exercise_days == 0,
    },
    ScoringRule {
        id: RuleId::FrequentJunkFood,
        points: 1,
        applies: |f| f.input.junk_days >= 4,
    },
    ScoringRule {
        id: RuleId::NearDailyJunkFood,
        points: 1,
        applies: |f| f.input.junk_days >= 6,
    },
    ScoringRule {
        id: RuleId::MediumStress,
        points: 1,
        applies: |f| f.input.stress_level == StressLevel::Medium,
    },
    ScoringRule {
        id: RuleId::HighStress,
        points: 2,
        applies: |f| f.input.stress_level == StressLevel::High,
    },
    ScoringRule {
        id: RuleId::Smoking,
        points: 2,
        applies: |f| f.input.smoking,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleContribution {
    pub rule: RuleId,
    pub points: u32,
}

/// Fired rules in table order, and their sum.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<RuleContribution>,
    pub total: u32,
}

impl ScoreBreakdown {
    pub fn fired(&self, rule: RuleId) -> bool {
        self.contributions.iter().any(|c| c.rule == rule)
    }
}

pub fn score(features: &Features) -> ScoreBreakdown {
    let mut out = ScoreBreakdown::default();
    for rule in SCORING_RULES {
        if (rule.applies)(features) {
            log::debug!("rule {:?} fired (+{})", rule.id, rule.points);
            out.contributions.push(RuleContribution {
                rule: rule.id,
                points: rule.points,
            });
            out.total += rule.points;
        }
    }
    log::debug!("lifestyle score total: {}", out.total);
    out
}
