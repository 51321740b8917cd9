use glint_model::romanization::{decode, encode};
use glint_model::DecodeError;
use proptest::prelude::*;
use serde_json::json;

// ── Decode ───────────────────────────────────────────────────────

#[test]
fn null_decodes_to_empty() {
    assert_eq!(decode(&json!(null)).unwrap(), "");
}

#[test]
fn plain_string_decodes_to_itself() {
    assert_eq!(decode(&json!("niuzai")).unwrap(), "niuzai");
}

#[test]
fn array_decodes_to_concatenation() {
    assert_eq!(decode(&json!(["niu", "zai"])).unwrap(), "niuzai");
}

#[test]
fn empty_array_decodes_to_empty() {
    assert_eq!(decode(&json!([])).unwrap(), "");
}

#[test]
fn array_order_is_preserved() {
    assert_eq!(decode(&json!(["a", "b", "c"])).unwrap(), "abc");
    assert_eq!(decode(&json!(["c", "b", "a"])).unwrap(), "cba");
}

#[test]
fn mixed_array_is_an_error() {
    let err = decode(&json!(["ok", 5])).unwrap_err();
    assert!(matches!(err, DecodeError::BadRomanization(_)));
}

#[test]
fn number_is_an_error() {
    assert!(matches!(
        decode(&json!(12)).unwrap_err(),
        DecodeError::BadRomanization(_)
    ));
}

#[test]
fn object_is_an_error() {
    assert!(matches!(
        decode(&json!({"a": 1})).unwrap_err(),
        DecodeError::BadRomanization(_)
    ));
}

// ── Encode ───────────────────────────────────────────────────────

#[test]
fn encode_produces_array_form() {
    assert_eq!(encode(&["huo", "yan"]), json!(["huo", "yan"]));
    assert_eq!(encode(&[]), json!([]));
}

#[test]
fn encode_then_decode_concatenates() {
    assert_eq!(decode(&encode(&["pu", "bu"])).unwrap(), "pubu");
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn roundtrip_is_lossless(syllables in proptest::collection::vec("[a-z]{1,6}", 0..8)) {
        let refs: Vec<&str> = syllables.iter().map(String::as_str).collect();
        let decoded = decode(&encode(&refs)).unwrap();
        prop_assert_eq!(decoded, syllables.concat());
    }

    #[test]
    fn plain_strings_never_change(s in "[a-zA-Z0-9 ]{0,24}") {
        prop_assert_eq!(decode(&json!(s.clone())).unwrap(), s);
    }
}
