use serde::{Deserialize, Serialize};
use wellness_risk::{Assessment, BmiCategory, Gender, RiskTier};

pub const REPORT_TITLE: &str = "🌿✨ Wellness Wish AI";
pub const REPORT_SUBTITLE: &str = "Practical lifestyle-based health risk prediction 💙";
pub const DISCLAIMER: &str =
    "This AI tool is for educational purpose only. It does not replace a doctor.";

pub fn risk_badge(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => "🟢 Low Health Risk (Good Lifestyle!)",
        RiskTier::Medium => "🟡 Medium Health Risk (Needs Improvement)",
        RiskTier::High => "🔴 High Health Risk (Take Action!)",
    }
}

pub fn gender_text(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "Female 👧",
        Gender::Male => "Male 👦",
    }
}

pub fn bmi_category_text(category: BmiCategory) -> String {
    format!("{} {}", category.label(), category.emoji())
}

/// One-line result, e.g. `🟢 Low Health Risk (Good Lifestyle!) | BMI: 21.5 | Confidence: 90.2%`.
pub fn summary_line(assessment: &Assessment) -> String {
    format!(
        "{} | BMI: {:.1} | Confidence: {:.1}%",
        risk_badge(assessment.tier),
        assessment.bmi,
        assessment.confidence
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportField {
    pub label: String,
    pub value: String,
}

impl ReportField {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Format-independent content of a wellness report.
///
/// Sections appear in the order renderers emit them: badge and confidence,
/// personal details, health summary, score factors, tips, disclaimer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessReport {
    pub title: String,
    pub subtitle: String,
    pub tier: RiskTier,
    pub badge: String,
    pub confidence: f64,
    pub score: u32,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub details: Vec<ReportField>,
    pub health_summary: Vec<ReportField>,
    pub score_factors: Vec<ReportField>,
    pub tips: Vec<String>,
    pub disclaimer: String,
}

impl WellnessReport {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        let input = &assessment.input;

        let details = vec![
            ReportField::new("Age", input.age.to_string()),
            ReportField::new("Gender", gender_text(input.gender)),
            ReportField::new("Height", format!("{} cm", input.height_cm)),
            ReportField::new("Weight", format!("{} kg", input.weight_kg)),
        ];

        let health_summary = vec![
            ReportField::new(
                "BMI",
                format!(
                    "{:.1} ({})",
                    assessment.bmi,
                    bmi_category_text(assessment.bmi_category)
                ),
            ),
            ReportField::new("Sleep", format!("{} hrs", input.sleep_hours)),
            ReportField::new("Exercise", format!("{} days/week", input.exercise_days)),
            ReportField::new("Junk food", format!("{} days/week", input.junk_days)),
            ReportField::new("Stress", input.stress_level.label()),
            ReportField::new("Smoking", if input.smoking { "Yes" } else { "No" }),
        ];

        let score_factors = assessment
            .breakdown
            .contributions
            .iter()
            .map(|c| ReportField::new(c.rule.description(), format!("+{}", c.points)))
            .collect();

        Self {
            title: REPORT_TITLE.to_string(),
            subtitle: REPORT_SUBTITLE.to_string(),
            tier: assessment.tier,
            badge: risk_badge(assessment.tier).to_string(),
            confidence: assessment.confidence,
            score: assessment.score(),
            bmi: assessment.bmi,
            bmi_category: assessment.bmi_category,
            details,
            health_summary,
            score_factors,
            tips: assessment.tips.iter().map(|t| t.message.clone()).collect(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use wellness_risk::{classify, LifestyleInput};

    #[test]
    fn summary_line_for_default_profile() {
        let a = classify(&LifestyleInput::default(), &mut StepRng::new(0, 0));
        assert_eq!(
            summary_line(&a),
            "🟢 Low Health Risk (Good Lifestyle!) | BMI: 21.5 | Confidence: 86.0%"
        );
    }

    #[test]
    fn details_echo_input() {
        let a = classify(&LifestyleInput::default(), &mut StepRng::new(0, 0));
        let report = WellnessReport::from_assessment(&a);
        assert_eq!(report.details[0].value, "18");
        assert_eq!(report.details[1].value, "Female 👧");
        assert_eq!(report.details[2].value, "160 cm");
        assert_eq!(report.health_summary[0].value, "21.5 (Normal ✅)");
        assert_eq!(report.score_factors.len(), 1);
        assert_eq!(report.score_factors[0].value, "+1");
    }
}
