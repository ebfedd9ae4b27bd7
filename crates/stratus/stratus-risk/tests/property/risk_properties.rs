use proptest::prelude::*;
use stratus_core::traits::IRiskScorer;
use stratus_core::{Dimension, ScoreVector};
use stratus_risk::RiskScorer;

fn vector(raw: [i64; 6]) -> ScoreVector {
    ScoreVector::from(raw)
}

/// Risk in hundredths, exact in integers.
fn exact_hundredths(raw: [i64; 6]) -> i64 {
    let [latency, load, cost, performance, security, scale] = raw;
    7000 - (25 * security + 15 * scale)
        + 10 * (100 - load)
        + 10 * (100 - performance)
        + 5 * latency
        + 5 * cost
}

proptest! {
    #[test]
    fn risk_stays_in_range(raw in proptest::array::uniform6(-200i64..300)) {
        let risk = RiskScorer::new().score(&vector(raw)).value();
        prop_assert!((0.0..=100.0).contains(&risk));
    }

    #[test]
    fn risk_has_one_decimal(raw in proptest::array::uniform6(0i64..=100)) {
        let risk = RiskScorer::new().score(&vector(raw)).value();
        let tenths = risk * 10.0;
        prop_assert!((tenths - tenths.round()).abs() < 1e-6);
    }

    #[test]
    fn scoring_is_deterministic(raw in proptest::array::uniform6(0i64..=100)) {
        let scorer = RiskScorer::new();
        prop_assert_eq!(scorer.score(&vector(raw)), scorer.score(&vector(raw)));
    }

    #[test]
    fn more_security_never_raises_risk(
        raw in proptest::array::uniform6(0i64..=100),
        bump in 0i64..=100,
    ) {
        let scorer = RiskScorer::new();
        let base = vector(raw);
        let raised = base.get(Dimension::Security).value() as i64 + bump;
        let stronger = base.with(Dimension::Security, raised);
        prop_assert!(scorer.score(&stronger) <= scorer.score(&base));
    }

    #[test]
    fn risk_is_the_nearest_tenth_off_ties(raw in proptest::array::uniform6(0i64..=100)) {
        let hundredths = exact_hundredths(raw);
        let tenths = (RiskScorer::new().score(&vector(raw)).value() * 10.0).round() as i64;
        if hundredths.rem_euclid(10) == 5 {
            let below = hundredths.div_euclid(10);
            prop_assert!(tenths == below || tenths == below + 1);
        } else {
            prop_assert_eq!(tenths, (hundredths + 5).div_euclid(10));
        }
    }

    #[test]
    fn exact_binary_ties_round_to_even(raw in proptest::array::uniform6(0i64..=100)) {
        let b = RiskScorer::new().breakdown(&vector(raw));
        // raw * 4 is exact, so an odd quarter is a true half-way tenth.
        let quarters = b.raw * 4.0;
        if quarters.fract() == 0.0 && (quarters as i64) % 2 != 0 {
            let tenths = (b.risk.value() * 10.0).round() as i64;
            prop_assert_eq!(tenths % 2, 0);
            prop_assert!((tenths as f64 - b.raw * 10.0).abs() == 0.5);
        }
    }
}
