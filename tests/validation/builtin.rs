use sugar_rail::validation::{max_length, min_length, not_empty, MaxLength, MinLength, Validator};

const SAMPLES: [&str; 6] = ["", "a", "ab", "abc", "abcdef", "héllo"];

#[test]
fn not_empty_rejects_only_the_empty_string() {
    let reason = not_empty().validate("").unwrap_err();
    assert_eq!(reason.reason(), "value cannot be empty");

    for sample in SAMPLES.iter().filter(|s| !s.is_empty()) {
        assert!(not_empty().validate(sample).is_ok(), "{sample:?} should pass");
    }
    assert!(not_empty().validate(" ").is_ok());
}

#[test]
fn min_length_fails_iff_shorter_than_bound() {
    for n in 0..8 {
        for sample in SAMPLES {
            let result = min_length(n).validate(sample);
            assert_eq!(result.is_err(), sample.len() < n, "min_length({n}) on {sample:?}");
        }
    }
}

#[test]
fn max_length_fails_iff_longer_than_bound() {
    for n in 0..8 {
        for sample in SAMPLES {
            let result = max_length(n).validate(sample);
            assert_eq!(result.is_err(), sample.len() > n, "max_length({n}) on {sample:?}");
        }
    }
}

#[test]
fn length_reasons_embed_the_bound() {
    assert_eq!(min_length(5).validate("abc").unwrap_err().reason(), "minimum length is 5");
    assert_eq!(max_length(2).validate("abc").unwrap_err().reason(), "maximum length is 2");
}

#[test]
fn lengths_are_counted_in_bytes() {
    // "é" is two bytes in UTF-8
    assert!(min_length(6).validate("héllo").is_ok());
    assert!(max_length(5).validate("héllo").is_err());
}

#[test]
fn zero_bounds_are_the_edges() {
    assert!(min_length(0).validate("").is_ok());
    assert!(max_length(0).validate("").is_ok());
    assert!(max_length(0).validate("x").is_err());
}

#[test]
fn constructors_capture_their_parameter() {
    assert_eq!(min_length(3), MinLength::new(3));
    assert_eq!(max_length(9).max(), 9);
    assert_eq!(MinLength::new(4).min(), 4);
    assert_ne!(max_length(1), MaxLength::new(2));
}

#[test]
fn plain_functions_are_validators() {
    fn digits_only(input: &str) -> Result<(), sugar_rail::ValidationError> {
        if input.chars().all(|c| c.is_ascii_digit()) {
            Ok(())
        } else {
            Err("value must contain only digits".into())
        }
    }

    assert!(digits_only.validate("123").is_ok());
    assert_eq!(
        digits_only.validate("12a").unwrap_err().reason(),
        "value must contain only digits"
    );
}
