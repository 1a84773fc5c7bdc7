use bigint::{BigInt, Category, ErrorCode};

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_round_trip() {
    let cases = [
        "0",
        "1",
        "-1",
        "7",
        "42",
        "-42",
        "999999999",
        "1000000000",
        "4294967295",
        "4294967296",
        "18446744073709551615",
        "18446744073709551616",
        "123456789012345678901234567890",
        "-123456789012345678901234567890",
        "340282366920938463463374607431768211456",
    ];
    for case in cases {
        assert_eq!(big(case).to_string(), case, "round trip of {:?}", case);
    }
}

#[test]
fn test_canonicalization() {
    assert_eq!(big("007").to_string(), "7");
    assert_eq!(big("007"), big("7"));
    assert_eq!(big("-007").to_string(), "-7");
    assert_eq!(big("+42").to_string(), "42");
    assert_eq!(big("0000").to_string(), "0");
    assert_eq!(big("-0"), BigInt::ZERO);
    assert_eq!(big("+0"), BigInt::ZERO);
    assert_eq!(
        big("00000000000000000000000000000123456789012345678901234567890"),
        big("123456789012345678901234567890"),
    );
}

#[test]
fn test_long_round_trip() {
    // A thousand digits crosses many limb and decimal-chunk boundaries.
    let mut s = String::from("-9");
    for i in 0..999 {
        s.push(char::from(b'0' + (i % 10) as u8));
    }
    assert_eq!(big(&s).to_string(), s);
}

#[test]
fn test_empty_inputs() {
    for case in ["", "-", "+"] {
        let err = case.parse::<BigInt>().unwrap_err();
        assert!(err.is_parse(), "{:?} must be a parse error", case);
        assert_eq!(*err.code(), ErrorCode::Empty);
    }
}

#[test]
fn test_invalid_digits() {
    let cases = [
        ("12a3", 2),
        ("a", 0),
        (" 1", 0),
        ("1 ", 1),
        ("--1", 1),
        ("+-1", 1),
        ("12.5", 2),
        ("1_000", 1),
        ("\u{2212}7", 0), // unicode minus is not a sign
    ];
    for (case, offset) in cases {
        let err = case.parse::<BigInt>().unwrap_err();
        assert_eq!(err.classify(), Category::Parse, "input {:?}", case);
        assert_eq!(
            *err.code(),
            ErrorCode::InvalidDigit(offset),
            "input {:?}",
            case
        );
    }
}

#[test]
fn test_error_messages() {
    let err = "".parse::<BigInt>().unwrap_err();
    assert_eq!(err.to_string(), "cannot parse integer from empty string");

    let err = "12a3".parse::<BigInt>().unwrap_err();
    assert_eq!(err.to_string(), "invalid digit found at byte 2");
}
