//! Recursive wire → domain walker.
//!
//! [`transcode`] rewrites every object key with [`to_camel_case`] and coerces
//! every date-like string with [`coerce_date`], at every depth. It is total
//! over [`Value`], never mutates its input, and is idempotent.

use super::rules::{coerce_date, to_camel_case};
use super::value::{Map, Value};

/// Key whose scalar value is the record identity; it is copied verbatim.
const IDENTITY_KEY: &str = "id";

/// Transcodes a wire-form value tree into its domain form.
///
/// - null, booleans, numbers and dates are returned unchanged;
/// - strings are coerced to [`Value::DateTime`] when date-like;
/// - arrays are transcoded element-wise, keeping order and length;
/// - objects get every key rewritten and every value transcoded, except a
///   scalar under `id`, which is copied verbatim. An array or object under
///   `id` is transcoded like any other value.
///
/// Keys are enumerated in sorted order. If two source keys rewrite to the
/// same target key, the one enumerated last wins.
#[must_use]
pub fn transcode(value: &Value) -> Value {
    match value {
        Value::String(text) => coerce_date(text).map_or_else(|| value.clone(), Value::DateTime),
        Value::Array(items) => Value::Array(items.iter().map(transcode).collect()),
        Value::Object(map) => Value::Object(transcode_map(map)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::DateTime(_) => value.clone(),
    }
}

/// Converts a raw JSON payload and transcodes it in one step.
#[must_use]
pub fn transcode_json(json: &serde_json::Value) -> Value {
    transcode(&Value::from(json.clone()))
}

fn transcode_map(map: &Map) -> Map {
    map.iter()
        .map(|(key, item)| {
            let is_identity =
                key == IDENTITY_KEY && !matches!(item, Value::Array(_) | Value::Object(_));
            let mapped = if is_identity {
                item.clone()
            } else {
                transcode(item)
            };
            (to_camel_case(key), mapped)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn scalars_pass_through() {
        assert_eq!(transcode(&Value::Null), Value::Null);
        assert_eq!(transcode(&Value::Bool(false)), Value::Bool(false));
        assert_eq!(transcode(&Value::from(42)), Value::from(42));
        assert_eq!(transcode(&Value::from("active")), Value::from("active"));
    }

    #[test]
    fn date_strings_become_dates() {
        let out = transcode_json(&json!({ "expiration": "2024-01-01T10:00:00" }));
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).single();
        assert_eq!(
            out.get("expiration").and_then(Value::as_datetime).copied(),
            expected
        );
    }

    #[test]
    fn bare_dates_stay_strings() {
        let out = transcode_json(&json!({ "birth_day": "2024-01-01" }));
        assert_eq!(out.get("birthDay"), Some(&Value::from("2024-01-01")));
    }

    #[test]
    fn malformed_dates_stay_strings() {
        let out = transcode_json(&json!({ "end_at": "2024-13-45T99:00:00" }));
        assert_eq!(out.get("endAt"), Some(&Value::from("2024-13-45T99:00:00")));
    }

    #[test]
    fn identity_is_not_coerced() {
        let out = transcode_json(&json!({ "id": "2024-01-01T10:00:00", "user_id": 7 }));
        assert_eq!(out.get("id"), Some(&Value::from("2024-01-01T10:00:00")));
        assert_eq!(out.get("userId"), Some(&Value::from(7)));
    }

    #[test]
    fn structured_identity_is_transcoded() {
        let out = transcode_json(&json!({
            "id": { "tenant_id": 3, "issued_at": "2024-01-01T10:00:00Z" },
        }));
        let Some(id) = out.get("id") else {
            panic!("id missing");
        };
        assert_eq!(id.get("tenantId"), Some(&Value::from(3)));
        assert!(id.get("tenant_id").is_none());
        assert!(id.get("issuedAt").and_then(Value::as_datetime).is_some());

        let out = transcode_json(&json!({ "id": [{ "part_no": 1 }] }));
        assert_eq!(
            serde_json::Value::from(out),
            json!({ "id": [{ "partNo": 1 }] })
        );
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let out = transcode_json(&json!({ "some_new_field": { "deep_value": 1 } }));
        assert_eq!(
            out.get("someNewField").and_then(|inner| inner.get("deepValue")),
            Some(&Value::from(1))
        );
    }

    #[test]
    fn nested_embedded_records_are_transcoded_at_every_depth() {
        let wire = json!({
            "id": 1,
            "name": "ada",
            "sessions": [
                { "id": "s1", "user_id": 1, "expiration": "2024-01-01T10:00:00Z" },
                { "id": "s2", "user_id": 1, "expiration": "2024-02-01T10:00:00Z",
                  "user": { "id": 1, "created_at": "2023-12-31T23:59:59Z" } },
            ],
        });
        let out = transcode_json(&wire);

        let Some(sessions) = out.get("sessions").and_then(Value::as_array) else {
            panic!("sessions should be an array");
        };
        assert_eq!(sessions.len(), 2);
        for session in sessions {
            assert!(session.get("userId").is_some());
            assert!(session.get("user_id").is_none());
            assert!(session.get("expiration").and_then(Value::as_datetime).is_some());
        }
        let Some(second) = sessions.get(1) else {
            panic!("second session missing");
        };
        assert!(
            second
                .get("user")
                .and_then(|user| user.get("createdAt"))
                .and_then(Value::as_datetime)
                .is_some()
        );
    }

    #[test]
    fn arrays_keep_order_and_length() {
        let out = transcode_json(&json!(["b", 2, null, "2024-01-01T00:00:00Z", []]));
        let Some(items) = out.as_array() else {
            panic!("expected array");
        };
        assert_eq!(items.len(), 5);
        assert_eq!(items.first(), Some(&Value::from("b")));
        assert_eq!(items.get(1), Some(&Value::from(2)));
        assert_eq!(items.get(2), Some(&Value::Null));
        assert!(items.get(3).and_then(Value::as_datetime).is_some());
        assert_eq!(items.get(4), Some(&Value::Array(Vec::new())));
    }

    #[test]
    fn input_is_left_untouched() {
        let input = Value::from(json!({ "created_at": "2024-01-01T10:00:00" }));
        let snapshot = input.clone();
        let _ = transcode(&input);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn collisions_keep_last_enumerated_key() {
        // Sorted order: "aB" < "a_b", so "a_b" is processed last.
        let out = transcode_json(&json!({ "a_b": "snake", "aB": "camel" }));
        let Some(map) = out.as_object() else {
            panic!("expected object");
        };
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("aB"), Some(&Value::from("snake")));
    }

    mod proptest_tests {
        use super::*;
        use crate::codec::rules::to_camel_case;
        use chrono::NaiveDate;
        use proptest::prelude::*;

        fn snake_key() -> impl Strategy<Value = String> {
            "[a-z][a-z0-9]{0,5}(_[a-z][a-z0-9]{0,5}){0,3}"
        }

        fn date_parts() -> impl Strategy<Value = (i32, u32, u32, u32, u32, u32)> {
            (2000i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60)
        }

        fn date_string() -> impl Strategy<Value = String> {
            date_parts().prop_map(|(y, mo, d, h, mi, s)| {
                format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}")
            })
        }

        fn scalar() -> impl Strategy<Value = Value> {
            prop_oneof![
                Just(Value::Null),
                any::<bool>().prop_map(Value::Bool),
                any::<i64>().prop_map(Value::from),
                "[a-z0-9 -]{0,12}".prop_map(Value::from),
                date_string().prop_map(Value::from),
            ]
        }

        fn wire_value() -> impl Strategy<Value = Value> {
            scalar().prop_recursive(3, 48, 4, |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                    prop::collection::btree_map(snake_key(), inner, 0..4)
                        .prop_map(Value::Object),
                ]
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Every output key is the rewrite of an input key, and no key is lost.
            #[test]
            fn keys_are_rewrites_of_input_keys(
                record in prop::collection::btree_map(snake_key(), scalar(), 0..8)
            ) {
                let out = transcode(&Value::Object(record.clone()));
                let Some(map) = out.as_object() else {
                    panic!("object in, object out");
                };
                prop_assert_eq!(map.len(), record.len());
                for key in map.keys() {
                    prop_assert!(record.keys().any(|source| &to_camel_case(source) == key));
                }
            }

            #[test]
            fn arrays_preserve_length_and_order(items in prop::collection::vec(scalar(), 0..16)) {
                let out = transcode(&Value::Array(items.clone()));
                let Some(out_items) = out.as_array() else {
                    panic!("array in, array out");
                };
                prop_assert_eq!(out_items.len(), items.len());
                for (source, mapped) in items.iter().zip(out_items) {
                    prop_assert_eq!(&transcode(source), mapped);
                }
            }

            #[test]
            fn date_strings_coerce_to_the_same_instant(parts in date_parts()) {
                let (y, mo, d, h, mi, s) = parts;
                let raw = format!("{y:04}-{mo:02}-{d:02}T{h:02}:{mi:02}:{s:02}");
                let expected = NaiveDate::from_ymd_opt(y, mo, d)
                    .and_then(|date| date.and_hms_opt(h, mi, s))
                    .map(|naive| naive.and_utc());
                let mut record = Map::new();
                record.insert("when_at".to_owned(), Value::from(raw));
                let out = transcode(&Value::Object(record));
                prop_assert_eq!(out.get("whenAt").and_then(Value::as_datetime).copied(), expected);
            }

            #[test]
            fn non_date_strings_are_unchanged(text in "[a-z0-9 -]{0,24}") {
                let mut record = Map::new();
                record.insert("label".to_owned(), Value::from(text.clone()));
                let out = transcode(&Value::Object(record));
                prop_assert_eq!(out.get("label"), Some(&Value::from(text)));
            }

            #[test]
            fn transcode_is_idempotent(value in wire_value()) {
                let once = transcode(&value);
                let twice = transcode(&once);
                prop_assert_eq!(once, twice);
            }
        }
    }
}
