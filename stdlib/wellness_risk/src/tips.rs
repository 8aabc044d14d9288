use serde::{Deserialize, Serialize};

use crate::input::StressLevel;
use crate::scoring::Features;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipKind {
    Diet,
    Sleep,
    Exercise,
    JunkFood,
    Stress,
    Smoking,
    /// Emitted alone when no other tip applies.
    KeepItUp,
}

impl TipKind {
    pub fn message(self) -> &'static str {
        match self {
            TipKind::Diet => "🥗 Try balanced meals and reduce sugary snacks.",
            TipKind::Sleep => "😴 Aim for 7–8 hours of sleep daily.",
            TipKind::Exercise => "🏃 Try 30 minutes walking/exercise at least 3 days a week.",
            TipKind::JunkFood => "🍟 Reduce junk food to 1–2 days/week.",
            TipKind::Stress => "🧘 Try meditation, music, or deep breathing to reduce stress.",
            TipKind::Smoking => "🚭 Smoking increases health risk. Try quitting gradually.",
            TipKind::KeepItUp => "✨ You’re doing great! Keep maintaining your healthy routine.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub kind: TipKind,
    pub message: String,
}

impl From<TipKind> for Tip {
    fn from(kind: TipKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

pub struct TipRule {
    pub kind: TipKind,
    pub applies: fn(&Features) -> bool,
}

/// Evaluated top to bottom; the output keeps this order.
pub static TIP_RULES: &[TipRule] = &[
    TipRule {
        kind: TipKind::Diet,
        applies: |f| f.bmi >= 25.0,
    },
    TipRule {
        kind: TipKind::Sleep,
        applies: |f| f.input.sleep_hours < 7.0,
    },
    TipRule {
        kind: TipKind::Exercise,
        applies: |f| f.input.exercise_days < 3,
    },
    TipRule {
        kind: TipKind::JunkFood,
        applies: |f| f.input.junk_days > 3,
    },
    TipRule {
        kind: TipKind::Stress,
        applies: |f| f.input.stress_level >= StressLevel::Medium,
    },
    TipRule {
        kind: TipKind::Smoking,
        applies: |f| f.input.smoking,
    },
];

/// Advisory tips for a profile. Never empty.
pub fn tips_for(features: &Features) -> Vec<Tip> {
    let mut tips: Vec<Tip> = TIP_RULES
        .iter()
        .filter(|rule| (rule.applies)(features))
        .map(|rule| Tip::from(rule.kind))
        .collect();
    if tips.is_empty() {
        tips.push(Tip::from(TipKind::KeepItUp));
    }
    tips
}
