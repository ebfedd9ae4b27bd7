use proptest::prelude::*;
use stratus_core::{Dimension, Score, ScoreVector};

#[test]
fn out_of_range_values_clamp_instead_of_failing() {
    assert_eq!(Score::new(150), Score::MAX);
    assert_eq!(Score::new(-10), Score::MIN);
    assert_eq!(Score::new(42).value(), 42);
}

#[test]
fn vector_clamps_every_dimension() {
    let v = ScoreVector::new(150, -1, 101, 100, -10, 0);
    assert_eq!(v.latency().value(), 100);
    assert_eq!(v.load().value(), 0);
    assert_eq!(v.cost().value(), 100);
    assert_eq!(v.performance().value(), 100);
    assert_eq!(v.security().value(), 0);
    assert_eq!(v.scale().value(), 0);
    assert_eq!(v, ScoreVector::new(100, 0, 100, 100, 0, 0));
}

#[test]
fn array_conversion_uses_canonical_order() {
    let v = ScoreVector::from([1, 2, 3, 4, 5, 6]);
    let values: Vec<u8> = v.iter().map(|(_, s)| s.value()).collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(v.get(Dimension::Security).value(), 5);
}

#[test]
fn with_replaces_a_single_dimension() {
    let base = ScoreVector::uniform(50);
    let changed = base.with(Dimension::Performance, 200);
    assert_eq!(changed.performance(), Score::MAX);
    assert_eq!(changed.latency(), base.latency());
}

#[test]
fn default_vector_matches_starting_priorities() {
    let v = ScoreVector::default();
    assert_eq!(v, ScoreVector::new(60, 70, 50, 75, 85, 80));
}

#[test]
fn deserialization_clamps() {
    let json = r#"{"latency":150,"load":70,"cost":50,"performance":75,"security":-10,"scale":80}"#;
    let v: ScoreVector = serde_json::from_str(json).unwrap();
    assert_eq!(v.latency(), Score::MAX);
    assert_eq!(v.security(), Score::MIN);
}

proptest! {
    #[test]
    fn score_is_always_in_range(raw in any::<i64>()) {
        let s = Score::new(raw);
        prop_assert!(s.value() <= 100);
        prop_assert_eq!(s, Score::new(raw.clamp(0, 100)));
    }
}
