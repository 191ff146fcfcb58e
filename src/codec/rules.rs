//! Scalar coercion rules: key rewriting and ISO-8601 date handling.
//!
//! These are leaf functions with no knowledge of records or entities. The
//! generic transcoder uses the strict [`is_date_like`] / [`coerce_date`]
//! pair; entity mappers use [`parse_date_lenient`] because their schema
//! already knows which fields always carry dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Byte template for the mandatory `YYYY-MM-DDTHH:MM:SS` prefix. `d` marks
/// an ASCII digit, every other byte must match literally.
const DATE_TIME_SHAPE: &[u8; 19] = b"dddd-dd-ddTdd:dd:dd";

/// Rewrites a snake_case key into camelCase.
///
/// Every `_` followed by a lowercase ASCII letter is removed and the letter
/// upper-cased. Any other underscore (`a_1`, a trailing `_`) is kept as is.
/// Keys without an underscore are returned unchanged, which makes the rewrite
/// idempotent on its own output.
///
/// ```
/// use wirecase::codec::to_camel_case;
///
/// assert_eq!(to_camel_case("user_id"), "userId");
/// assert_eq!(to_camel_case("created_at"), "createdAt");
/// assert_eq!(to_camel_case("token"), "token");
/// ```
#[must_use]
pub fn to_camel_case(key: &str) -> String {
    if !key.contains('_') {
        return key.to_owned();
    }
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_'
            && let Some(next) = chars.next_if(char::is_ascii_lowercase)
        {
            out.push(next.to_ascii_uppercase());
            continue;
        }
        out.push(c);
    }
    out
}

/// Returns `true` if `value` is an ISO-8601 combined date-time.
///
/// Grammar: `YYYY-MM-DDTHH:MM:SS`, optionally followed by `.` and one or
/// more fractional-second digits, optionally followed by `Z` or `±HH:MM`.
/// The whole string must match. A bare date such as `"2024-01-01"` is not
/// date-like.
#[must_use]
pub fn is_date_like(value: &str) -> bool {
    let bytes = value.as_bytes();
    let Some(head) = bytes.get(..DATE_TIME_SHAPE.len()) else {
        return false;
    };
    let head_matches = head
        .iter()
        .zip(DATE_TIME_SHAPE)
        .all(|(&c, &p)| if p == b'd' { c.is_ascii_digit() } else { c == p });
    if !head_matches {
        return false;
    }

    let mut rest = bytes.get(DATE_TIME_SHAPE.len()..).unwrap_or_default();
    if let Some((b'.', fraction)) = rest.split_first() {
        let digits = fraction.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return false;
        }
        rest = fraction.get(digits..).unwrap_or_default();
    }
    is_zone_designator(rest)
}

fn is_zone_designator(rest: &[u8]) -> bool {
    match rest {
        [] | [b'Z'] => true,
        [b'+' | b'-', h1, h2, b':', m1, m2] => {
            [h1, h2, m1, m2].iter().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

/// Parses a date-like string into a UTC instant.
///
/// Returns `None` when `value` is not date-like or when it is shaped like a
/// date but does not denote a real instant (month 13, hour 25, ...). Callers
/// keep the original string in that case. Strings without a zone designator
/// are read as UTC.
#[must_use]
pub fn coerce_date(value: &str) -> Option<DateTime<Utc>> {
    if !is_date_like(value) {
        return None;
    }
    let parsed = parse_combined(value);
    if parsed.is_none() {
        tracing::trace!(value, "date-like string left unparsed");
    }
    parsed
}

/// Parses a string the schema declares as a date, accepting more than the
/// strict grammar: a space instead of `T`, and a bare `YYYY-MM-DD` date
/// (midnight UTC).
///
/// Returns `None` if nothing matches.
#[must_use]
pub fn parse_date_lenient(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    parse_combined(trimmed)
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

/// Formats an instant in the canonical wire form
/// `YYYY-MM-DDTHH:MM:SS[.fff]Z`.
///
/// The fraction carries 3, 6 or 9 digits, as many as the instant needs, and
/// is left out for whole seconds. Formatting a parsed date and parsing it
/// again yields the same instant.
#[must_use]
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_combined(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn camel_case_rewrites_each_segment() {
        assert_eq!(to_camel_case("user_id"), "userId");
        assert_eq!(to_camel_case("start_at"), "startAt");
        assert_eq!(to_camel_case("a_long_snake_key"), "aLongSnakeKey");
    }

    #[test]
    fn camel_case_leaves_plain_keys_alone() {
        assert_eq!(to_camel_case("id"), "id");
        assert_eq!(to_camel_case("userId"), "userId");
        assert_eq!(to_camel_case("FACode"), "FACode");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn camel_case_keeps_underscores_not_followed_by_lowercase() {
        assert_eq!(to_camel_case("line_1"), "line_1");
        assert_eq!(to_camel_case("trailing_"), "trailing_");
        assert_eq!(to_camel_case("_private"), "Private");
        assert_eq!(to_camel_case("a__b"), "a_B");
    }

    #[test]
    fn date_like_accepts_full_grammar() {
        assert!(is_date_like("2024-01-01T10:00:00"));
        assert!(is_date_like("2024-01-01T10:00:00Z"));
        assert!(is_date_like("2024-01-01T10:00:00.123"));
        assert!(is_date_like("2024-01-01T10:00:00.123456Z"));
        assert!(is_date_like("2024-01-01T10:00:00+02:00"));
        assert!(is_date_like("2024-01-01T10:00:00.5-05:30"));
    }

    #[test]
    fn date_like_rejects_near_misses() {
        assert!(!is_date_like("2024-01-01"));
        assert!(!is_date_like("2024-01-01 10:00:00"));
        assert!(!is_date_like("2024-01-01T10:00"));
        assert!(!is_date_like("2024-01-01T10:00:00."));
        assert!(!is_date_like("2024-01-01T10:00:00+0200"));
        assert!(!is_date_like("2024-01-01T10:00:00 trailing"));
        assert!(!is_date_like("order-2024-01-01T10:00:00"));
        assert!(!is_date_like("ab12-01-01T10:00:00"));
        assert!(!is_date_like(""));
    }

    #[test]
    fn coerce_reads_naive_as_utc() {
        let Some(parsed) = coerce_date("2024-01-01T10:00:00") else {
            panic!("expected a date");
        };
        assert_eq!(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).single(), Some(parsed));
    }

    #[test]
    fn coerce_normalizes_offsets() {
        let Some(parsed) = coerce_date("2024-01-01T12:00:00+02:00") else {
            panic!("expected a date");
        };
        assert_eq!(parsed.hour(), 10);
    }

    #[test]
    fn coerce_keeps_fraction() {
        let Some(parsed) = coerce_date("2024-01-01T10:00:00.250Z") else {
            panic!("expected a date");
        };
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn coerce_rejects_impossible_dates() {
        assert_eq!(coerce_date("2024-13-01T10:00:00"), None);
        assert_eq!(coerce_date("2024-02-30T10:00:00"), None);
        assert_eq!(coerce_date("2024-01-01T25:00:00"), None);
    }

    #[test]
    fn coerce_ignores_non_date_strings() {
        assert_eq!(coerce_date("2024-01-01"), None);
        assert_eq!(coerce_date("active"), None);
    }

    #[test]
    fn lenient_parse_accepts_schema_forms() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single();
        assert_eq!(parse_date_lenient("2024-01-01"), midnight);
        assert_eq!(parse_date_lenient("2024-01-01 00:00:00"), midnight);
        assert_eq!(parse_date_lenient("2024-01-01T00:00:00Z"), midnight);
        assert_eq!(parse_date_lenient(" 2024-01-01T00:00:00 "), midnight);
        assert_eq!(parse_date_lenient("tomorrow"), None);
    }

    #[test]
    fn format_is_canonical_and_date_like() {
        let Some(at) = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).single() else {
            panic!("valid date");
        };
        let formatted = format_date(&at);
        assert_eq!(formatted, "2024-01-01T10:00:00Z");
        assert!(is_date_like(&formatted));
        assert_eq!(coerce_date(&formatted), Some(at));
    }

    #[test]
    fn format_keeps_sub_second_precision() {
        for raw in [
            "2024-01-01T10:00:00.250Z",
            "2024-01-01T10:00:00.123456Z",
            "2024-01-01T10:00:00.123456789Z",
        ] {
            let Some(at) = coerce_date(raw) else {
                panic!("expected a date for {raw}");
            };
            let formatted = format_date(&at);
            assert_eq!(formatted, raw);
            assert!(is_date_like(&formatted));
            assert_eq!(coerce_date(&formatted), Some(at));
        }
    }
}
