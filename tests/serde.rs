#![cfg(feature = "serde")]

use bigint::BigInt;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_serialize_as_decimal_string() {
    let n = big("123456789012345678901234567890");
    assert_eq!(
        serde_json::to_string(&n).unwrap(),
        "\"123456789012345678901234567890\""
    );
    assert_eq!(serde_json::to_string(&big("-7")).unwrap(), "\"-7\"");
    assert_eq!(serde_json::to_string(&BigInt::ZERO).unwrap(), "\"0\"");
}

#[test]
fn test_deserialize_from_string() {
    let n: BigInt = serde_json::from_str("\"-123456789012345678901234567890\"").unwrap();
    assert_eq!(n, big("-123456789012345678901234567890"));

    let err = serde_json::from_str::<BigInt>("\"12a3\"").unwrap_err();
    assert!(err.to_string().contains("invalid digit"));
}

#[test]
fn test_deserialize_from_integer() {
    let n: BigInt = serde_json::from_str("42").unwrap();
    assert_eq!(n, big("42"));

    let n: BigInt = serde_json::from_str("-9223372036854775808").unwrap();
    assert_eq!(n, BigInt::from(i64::MIN));
}

#[test]
fn test_round_trip() {
    for case in ["0", "-1", "999999999999999999999999999999"] {
        let n = big(case);
        let json = serde_json::to_string(&n).unwrap();
        let back: BigInt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }
}
