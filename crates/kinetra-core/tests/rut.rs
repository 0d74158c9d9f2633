use kinetra_core::rut::{
    compute_check_symbol, derive_credential_fragment, format, normalize, validate, Rut,
    RutParseError,
};
use proptest::prelude::*;

#[test]
fn validate_accepts_correct_check_digit() {
    assert!(validate("12345678-5"));
    assert!(validate("12.345.678-5"));
    assert!(validate("123456785"));
}

#[test]
fn validate_rejects_wrong_check_digit() {
    assert!(!validate("12345678-9"));
}

#[test]
fn validate_accepts_lowercase_k() {
    // 20.347.878 checks to K
    let body = "20347878";
    assert_eq!(compute_check_symbol(body), 'K');
    assert!(validate("20347878-k"));
    assert!(validate("20347878-K"));
}

#[test]
fn validate_rejects_short_and_empty_input() {
    assert!(!validate(""));
    assert!(!validate("5"));
    assert!(!validate(".-"));
}

#[test]
fn validate_rejects_non_digit_body() {
    assert!(!validate("1234A678-5"));
}

#[test]
fn format_groups_body_in_threes() {
    assert_eq!(format("123456785"), "12.345.678-5");
    assert_eq!(format("12.345.678-5"), "12.345.678-5");
    assert_eq!(format("1234567-4"), "1.234.567-4");
}

#[test]
fn format_leaves_short_input_unchanged() {
    assert_eq!(format(""), "");
    assert_eq!(format("5"), "5");
    assert_eq!(format(".5-"), "5");
}

#[test]
fn format_does_not_validate() {
    // wrong check digit still formats
    assert_eq!(format("12345678-9"), "12.345.678-9");
}

#[test]
fn credential_fragment_takes_last_four_of_body() {
    assert_eq!(derive_credential_fragment("12345678-5"), "5678");
    assert_eq!(derive_credential_fragment("12.345.678-5"), "5678");
}

#[test]
fn credential_fragment_pads_short_bodies() {
    assert_eq!(derive_credential_fragment("12-4"), "0012");
    assert_eq!(derive_credential_fragment("1-9"), "0001");
}

#[test]
fn parse_distinguishes_failure_modes() {
    assert_eq!(Rut::parse("5"), Err(RutParseError::TooShort));
    assert_eq!(Rut::parse("1234A678-5"), Err(RutParseError::NonDigitBody));
    assert_eq!(
        Rut::parse("12345678-9"),
        Err(RutParseError::ChecksumMismatch { expected: '5' })
    );
}

#[test]
fn parse_accepts_what_validate_accepts() {
    let rut = Rut::parse("12.345.678-5").unwrap();
    assert_eq!(rut.body(), "12345678");
    assert_eq!(rut.check_symbol(), '5');
    assert_eq!(rut.formatted(), "12.345.678-5");
    assert_eq!(rut.credential_fragment(), "5678");
    assert_eq!(rut.to_string(), "12.345.678-5");
}

proptest! {
    /// A body plus its computed check symbol always validates; any other
    /// symbol never does.
    #[test]
    fn checksum_round_trip(body in "[0-9]{1,9}") {
        let check = compute_check_symbol(&body);
        let candidate = std::format!("{body}-{check}");
        prop_assert!(validate(&candidate));

        for other in "0123456789K".chars().filter(|c| *c != check) {
            let candidate = std::format!("{body}-{other}");
            prop_assert!(!validate(&candidate));
        }
    }

    #[test]
    fn format_is_idempotent(raw in "[0-9]{2,9}[0-9K]") {
        let once = format(&raw);
        prop_assert_eq!(format(&once), once);
    }

    #[test]
    fn normalize_undoes_formatting(raw in "[.0-9-]{0,12}[0-9Kk]?") {
        prop_assert_eq!(normalize(&format(&raw)), normalize(&raw));
    }

    #[test]
    fn credential_fragment_is_always_four_chars(raw in ".{1,16}") {
        prop_assert_eq!(derive_credential_fragment(&raw).chars().count(), 4);
    }

    /// The diagnostic parser and the total predicate agree.
    #[test]
    fn parse_matches_validate(raw in "[.0-9Kk-]{0,12}") {
        prop_assert_eq!(Rut::parse(&raw).is_ok(), validate(&raw));
    }
}
