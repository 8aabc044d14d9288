use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wellness_risk::{
    classify, score, Features, Gender, LifestyleInput, RiskTier, StressLevel, TipKind,
};

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Female), Just(Gender::Male)]
}

fn stress() -> impl Strategy<Value = StressLevel> {
    prop_oneof![
        Just(StressLevel::Low),
        Just(StressLevel::Medium),
        Just(StressLevel::High)
    ]
}

prop_compose! {
    fn valid_input()(
        age in 13u32..=60,
        gender in gender(),
        height_cm in 140.0f64..=190.0,
        weight_kg in 35.0f64..=120.0,
        sleep_hours in 4.0f64..=10.0,
        exercise_days in 0u8..=7,
        junk_days in 0u8..=7,
        stress_level in stress(),
        smoking in any::<bool>(),
    ) -> LifestyleInput {
        LifestyleInput {
            age,
            gender,
            height_cm,
            weight_kg,
            sleep_hours,
            exercise_days,
            junk_days,
            stress_level,
            smoking,
        }
    }
}

fn total(input: &LifestyleInput) -> u32 {
    score(&Features::from_input(input)).total
}

proptest! {
    #[test]
    fn valid_inputs_produce_well_formed_assessments(input in valid_input(), seed in any::<u64>()) {
        prop_assert!(input.validate().is_ok());
        let mut rng = StdRng::seed_from_u64(seed);
        let a = classify(&input, &mut rng);
        prop_assert!(RiskTier::ALL.contains(&a.tier));
        prop_assert!(a.confidence >= 78.0 && a.confidence <= 94.0);
        prop_assert!(a.tier.confidence_band().contains(a.confidence));
        prop_assert!(a.bmi > 0.0);
        prop_assert!(!a.tips.is_empty());
        prop_assert_eq!(a.tier, RiskTier::from_score(a.score()));
    }

    #[test]
    fn positive_tip_appears_alone(input in valid_input()) {
        let mut rng = StdRng::seed_from_u64(0);
        let a = classify(&input, &mut rng);
        let has_positive = a.tips.iter().any(|t| t.kind == TipKind::KeepItUp);
        if has_positive {
            prop_assert_eq!(a.tips.len(), 1);
        }
    }

    #[test]
    fn tips_follow_fixed_order(input in valid_input()) {
        let order = [
            TipKind::Diet,
            TipKind::Sleep,
            TipKind::Exercise,
            TipKind::JunkFood,
            TipKind::Stress,
            TipKind::Smoking,
        ];
        let mut rng = StdRng::seed_from_u64(0);
        let a = classify(&input, &mut rng);
        let positions: Vec<usize> = a
            .tips
            .iter()
            .filter_map(|t| order.iter().position(|k| *k == t.kind))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn score_grows_with_risk_factors(input in valid_input()) {
        let base = total(&input);

        if input.age < 60 {
            let older = LifestyleInput { age: input.age + 1, ..input };
            prop_assert!(total(&older) >= base);
        }
        if input.weight_kg + 1.0 <= 120.0 {
            let heavier = LifestyleInput { weight_kg: input.weight_kg + 1.0, ..input };
            prop_assert!(total(&heavier) >= base);
        }
        if input.junk_days < 7 {
            let junkier = LifestyleInput { junk_days: input.junk_days + 1, ..input };
            prop_assert!(total(&junkier) >= base);
        }
        let smoker = LifestyleInput { smoking: true, ..input };
        prop_assert!(total(&smoker) >= base);

        let stressed = LifestyleInput { stress_level: StressLevel::High, ..input };
        prop_assert!(total(&stressed) >= base);
    }

    #[test]
    fn score_falls_with_healthy_habits(input in valid_input()) {
        let base = total(&input);

        if input.exercise_days < 7 {
            let active = LifestyleInput { exercise_days: input.exercise_days + 1, ..input };
            prop_assert!(total(&active) <= base);
        }
        if input.sleep_hours + 0.5 <= 10.0 {
            let rested = LifestyleInput { sleep_hours: input.sleep_hours + 0.5, ..input };
            prop_assert!(total(&rested) <= base);
        }
    }

    #[test]
    fn classification_is_deterministic_apart_from_confidence(
        input in valid_input(),
        a_seed in any::<u64>(),
        b_seed in any::<u64>(),
    ) {
        let a = classify(&input, &mut StdRng::seed_from_u64(a_seed));
        let b = classify(&input, &mut StdRng::seed_from_u64(b_seed));
        prop_assert_eq!(a.tier, b.tier);
        prop_assert_eq!(a.bmi, b.bmi);
        prop_assert_eq!(a.breakdown, b.breakdown);
        prop_assert_eq!(a.tips, b.tips);
    }
}
