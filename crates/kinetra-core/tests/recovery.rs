use kinetra_core::recovery::{ClinicalRating, RATING_MAX, RATING_MIN};
use proptest::prelude::*;

fn rating(mobility: i32, strength: i32, pain: i32) -> ClinicalRating {
    ClinicalRating {
        mobility,
        strength,
        pain,
    }
}

#[test]
fn midpoint_scores_fifty() {
    assert_eq!(rating(5, 5, 5).recovery_percentage(), 50);
}

#[test]
fn best_case_scores_ninety_seven() {
    // (10 + 10 + 9) / 30 * 100 = 96.67 → 97; the scale never reaches 100
    assert_eq!(rating(10, 10, 1).recovery_percentage(), 97);
}

#[test]
fn worst_case_scores_seven() {
    assert_eq!(rating(1, 1, 10).recovery_percentage(), 7);
}

#[test]
fn rounds_half_away_from_zero() {
    // (3 + 3 + 10 - 7) / 30 * 100 = 30.0; (4 + 4 + 10 - 7) / 30 * 100 = 36.67
    assert_eq!(rating(3, 3, 7).recovery_percentage(), 30);
    assert_eq!(rating(4, 4, 7).recovery_percentage(), 37);
    // sum of 21 → 70.0 exactly, sum of 22 → 73.33 → 73
    assert_eq!(rating(7, 7, 3).recovery_percentage(), 70);
    assert_eq!(rating(8, 7, 3).recovery_percentage(), 73);
}

#[test]
fn out_of_range_input_is_computed_permissively() {
    // pain above the scale drives the score negative rather than erroring
    assert_eq!(rating(1, 1, 15).recovery_percentage(), -10);
    assert_eq!(rating(12, 12, 1).recovery_percentage(), 110);
}

#[test]
fn strict_variant_rejects_out_of_range() {
    assert!(rating(5, 5, 5).recovery_percentage_strict().is_ok());

    let err = rating(5, 5, 0).recovery_percentage_strict().unwrap_err();
    assert_eq!(err.rating, "pain");
    assert_eq!(err.value, 0);

    assert!(rating(11, 5, 5).recovery_percentage_strict().is_err());
    assert!(rating(5, 0, 5).recovery_percentage_strict().is_err());
}

#[test]
fn strict_variant_agrees_with_permissive_in_range() {
    let r = rating(6, 8, 2);
    assert_eq!(
        r.recovery_percentage_strict().unwrap(),
        r.recovery_percentage()
    );
}

proptest! {
    /// Raising mobility or strength never lowers the score; raising pain
    /// never raises it.
    #[test]
    fn score_is_monotone(
        mobility in RATING_MIN..RATING_MAX,
        strength in RATING_MIN..RATING_MAX,
        pain in RATING_MIN..RATING_MAX,
    ) {
        let base = rating(mobility, strength, pain).recovery_percentage();

        prop_assert!(rating(mobility + 1, strength, pain).recovery_percentage() >= base);
        prop_assert!(rating(mobility, strength + 1, pain).recovery_percentage() >= base);
        prop_assert!(rating(mobility, strength, pain + 1).recovery_percentage() <= base);
    }

    /// In-range triples always land in the documented 7..=97 span.
    #[test]
    fn in_range_scores_stay_in_span(
        mobility in RATING_MIN..=RATING_MAX,
        strength in RATING_MIN..=RATING_MAX,
        pain in RATING_MIN..=RATING_MAX,
    ) {
        let score = rating(mobility, strength, pain).recovery_percentage();
        prop_assert!((7..=97).contains(&score));
    }
}
