use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Once;
use wellness_risk::{
    classify, BmiCategory, Classifier, Gender, LifestyleInput, RiskTier, RngClassifier,
    StressLevel, TipKind,
};

static INIT: Once = Once::new();
fn setup_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn tip_kinds(tips: &[wellness_risk::Tip]) -> Vec<TipKind> {
    tips.iter().map(|t| t.kind).collect()
}

#[test]
fn default_questionnaire_is_low_risk_with_stress_tip() {
    setup_test_logger();
    let mut rng = StdRng::seed_from_u64(1);
    let a = classify(&LifestyleInput::default(), &mut rng);

    assert!((a.bmi - 21.48).abs() < 0.01);
    assert_eq!(a.bmi_category, BmiCategory::Normal);
    assert_eq!(a.score(), 1);
    assert_eq!(a.tier, RiskTier::Low);
    assert!((86.0..94.0).contains(&a.confidence));
    assert_eq!(tip_kinds(&a.tips), vec![TipKind::Stress]);
}

#[test]
fn worst_case_profile_is_high_risk() {
    setup_test_logger();
    let input = LifestyleInput {
        age: 55,
        gender: Gender::Male,
        height_cm: 170.0,
        weight_kg: 95.0,
        sleep_hours: 4.0,
        exercise_days: 0,
        junk_days: 6,
        stress_level: StressLevel::High,
        smoking: true,
    };
    let mut rng = StdRng::seed_from_u64(2);
    let a = classify(&input, &mut rng);

    assert!((a.bmi - 32.87).abs() < 0.01);
    assert_eq!(a.bmi_category, BmiCategory::Obese);
    assert_eq!(a.score(), 14);
    assert_eq!(a.tier, RiskTier::High);
    assert!((82.0..92.0).contains(&a.confidence));
    assert_eq!(
        tip_kinds(&a.tips),
        vec![
            TipKind::Diet,
            TipKind::Sleep,
            TipKind::Exercise,
            TipKind::JunkFood,
            TipKind::Stress,
            TipKind::Smoking,
        ]
    );
}

#[test]
fn medium_tier_profile() {
    // age 40 (+1), bmi ~26.0 (+1), 1 exercise day (+1), medium stress (+1)
    let input = LifestyleInput {
        age: 40,
        height_cm: 175.0,
        weight_kg: 80.0,
        exercise_days: 1,
        ..LifestyleInput::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    let a = classify(&input, &mut rng);
    assert_eq!(a.score(), 4);
    assert_eq!(a.tier, RiskTier::Medium);
    assert!((78.0..88.0).contains(&a.confidence));
}

#[test]
fn repeated_runs_only_differ_in_confidence() {
    let input = LifestyleInput {
        age: 45,
        weight_kg: 70.0,
        sleep_hours: 5.5,
        ..LifestyleInput::default()
    };
    let mut classifier = RngClassifier::from_entropy();
    let first = classifier.assess(&input).unwrap();
    for _ in 0..20 {
        let next = classifier.assess(&input).unwrap();
        assert_eq!(next.tier, first.tier);
        assert_eq!(next.bmi, first.bmi);
        assert_eq!(next.breakdown, first.breakdown);
        assert_eq!(next.tips, first.tips);
        assert!(first.tier.confidence_band().contains(next.confidence));
    }
}

#[test]
fn assessment_serializes_with_lowercase_enums() {
    let mut rng = StdRng::seed_from_u64(4);
    let a = classify(&LifestyleInput::default(), &mut rng);
    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["tier"], "low");
    assert_eq!(json["bmi_category"], "normal");
    assert_eq!(json["input"]["gender"], "female");
    assert_eq!(json["input"]["stress_level"], "medium");
    assert_eq!(json["tips"][0]["kind"], "stress");
    assert_eq!(json["breakdown"]["contributions"][0]["rule"], "medium_stress");

    let back: wellness_risk::Assessment = serde_json::from_value(json).unwrap();
    assert_eq!(back.tier, a.tier);
    assert_eq!(back.breakdown, a.breakdown);
    assert_eq!(back.tips, a.tips);
    assert_eq!(back.input.gender, a.input.gender);
}
