//! Purpose: Lock the container's presence and JSON contracts end to end.
//! Exports: Integration tests only (no runtime exports).
//! Role: Exercise the public API the way host code sees it.
//! Invariants: Absent always encodes to `null` and decodes back to absent.
//! Invariants: Malformed non-null payloads surface errors, never absence.

use optional::{JsonField, Optional};
use serde::{Deserialize, Serialize};

const STRING_VAL: &str = "an example string";
const ELSE_STRING: &str = "something else";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

fn quoted(value: &str) -> Vec<u8> {
    format!("\"{value}\"").into_bytes()
}

fn round_trip<T>(original: &Optional<T>) -> Optional<T>
where
    T: Serialize + serde::de::DeserializeOwned,
{
    let bytes = original.encode_json().expect("encode");
    let mut decoded = Optional::<T>::empty();
    decoded.decode_json(&bytes).expect("decode");
    decoded
}

#[test]
fn default_state_is_absent_everywhere() {
    for o in [Optional::<String>::default(), Optional::<String>::empty()] {
        assert!(!o.is_present());
        assert_eq!(o.get_or_zero(), "");
        assert_eq!(o.get(), (String::new(), false));
        assert_eq!(o.encode_json().expect("encode"), b"null");
    }

    let point = Optional::<Point>::default();
    assert_eq!(point.get(), (Point::default(), false));
}

#[test]
fn presence_round_trip_for_values() {
    let values = ["", "0", STRING_VAL];
    for value in values {
        let o = Optional::new(value.to_string());
        assert!(o.is_present());
        assert_eq!(o.get(), (value.to_string(), true));
    }

    let o = Optional::new(Point { x: 0, y: 0 });
    assert_eq!(o.get(), (Point::default(), true));
}

#[test]
fn encode_decode_round_trip() {
    let present = Optional::new(STRING_VAL.to_string());
    assert_eq!(round_trip(&present), present);

    let absent = Optional::<String>::empty();
    assert_eq!(round_trip(&absent), absent);

    let point = Optional::new(Point { x: -3, y: 9 });
    assert_eq!(round_trip(&point), point);

    let nested = Optional::new(vec![Optional::new(1u8), Optional::empty()]);
    assert_eq!(nested.encode_json().expect("encode"), b"[1,null]");
    assert_eq!(round_trip(&nested), nested);
}

#[test]
fn clear_absorbs_any_value() {
    for value in ["", STRING_VAL] {
        let mut o = Optional::empty();
        o.set(value.to_string());
        o.clear();
        assert!(!o.is_present());
        assert_eq!(o.get_or_zero(), "");
    }
}

#[test]
fn fallback_used_only_when_absent() {
    let fallbacks = ["", ELSE_STRING, STRING_VAL];
    for fallback in fallbacks {
        let absent = Optional::<String>::empty();
        assert_eq!(absent.get_or_else(fallback.to_string()), fallback);

        let present = Optional::new(STRING_VAL.to_string());
        assert_eq!(present.get_or_else(fallback.to_string()), STRING_VAL);
    }
}

#[test]
fn malformed_payload_is_reported() {
    let mut o = Optional::<String>::empty();
    assert!(o.decode_json(b"123abc").is_err());

    let mut o = Optional::<Point>::empty();
    assert!(o.decode_json(br#"{"x":1,"y":"two"}"#).is_err());

    let mut o = Optional::<u8>::empty();
    assert!(o.decode_json(b"256").is_err());

    let decoded = serde_json::from_slice::<Optional<String>>(b"123abc");
    assert!(decoded.is_err());
}

#[test]
fn encode_present_string() {
    let o = Optional::new(STRING_VAL.to_string());
    assert_eq!(o.encode_json().expect("encode"), quoted(STRING_VAL));
}

#[test]
fn encode_absent_string() {
    let o = Optional::<String>::empty();
    assert_eq!(o.encode_json().expect("encode"), b"null");
}

#[test]
fn decode_null_into_fresh_container() {
    let mut o = Optional::<String>::default();
    o.decode_json(b"null").expect("decode");
    assert!(!o.is_present());
}

#[test]
fn decode_string_into_fresh_container() {
    let mut o = Optional::<String>::default();
    o.decode_json(&quoted(STRING_VAL)).expect("decode");
    assert!(o.is_present());
    assert_eq!(o.get(), (STRING_VAL.to_string(), true));
}

#[test]
fn state_transitions_through_decode() {
    let mut o = Optional::<i32>::empty();
    o.decode_json(b"1").expect("absent to present");
    assert_eq!(o, Optional::new(1));
    o.decode_json(b"2").expect("present to present");
    assert_eq!(o, Optional::new(2));
    o.decode_json(b"null").expect("present to absent");
    assert_eq!(o, Optional::empty());
}

#[test]
fn container_is_send_and_sync_with_its_payload() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Optional<String>>();
    assert_send_sync::<Optional<Point>>();
}
