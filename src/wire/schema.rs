//! Declarative per-entity field lists.
//!
//! An [`EntitySchema`] names every field of an entity on both sides of the
//! boundary, the scalar kind it carries and whether it may be written. The
//! typed mappers in [`crate::mapper`] follow these lists field by field;
//! [`EntitySchema::wire_to_domain`] and [`EntitySchema::domain_to_wire`]
//! apply the same rules to untyped [`Value`] records.

use crate::codec::{Map, Value, format_date, parse_date_lenient};

/// Scalar kind carried by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Record identity: string or integer, never transformed.
    Identifier,
    /// Integer, including foreign keys.
    Integer,
    /// Floating point number.
    Float,
    /// Free text.
    Text,
    /// ISO-8601 string on the wire, native instant in the domain.
    DateTime,
    /// Embedded related record(s), passed through opaque.
    Embedded,
}

/// Whether a field travels in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Read from responses and sent on writes.
    ReadWrite,
    /// Read from responses only (server-generated or embedded).
    ReadOnly,
}

/// Mapping direction for [`EntitySchema::map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Wire record → domain record.
    ToDomain,
    /// Domain record → wire record, writable fields only.
    ToWire,
}

/// One field of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Exact wire key.
    pub wire: &'static str,
    /// Exact domain key.
    pub domain: &'static str,
    /// Scalar kind.
    pub kind: FieldKind,
    /// Direction(s) the field travels in.
    pub access: Access,
}

impl FieldSpec {
    const fn rw(wire: &'static str, domain: &'static str, kind: FieldKind) -> Self {
        Self {
            wire,
            domain,
            kind,
            access: Access::ReadWrite,
        }
    }

    const fn ro(wire: &'static str, domain: &'static str, kind: FieldKind) -> Self {
        Self {
            wire,
            domain,
            kind,
            access: Access::ReadOnly,
        }
    }

    /// Returns `true` if the field is emitted on domain → wire.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        matches!(self.access, Access::ReadWrite)
    }

    fn read(&self, value: &Value) -> Value {
        match (self.kind, value) {
            (FieldKind::DateTime, Value::String(raw)) => {
                parse_date_lenient(raw).map_or_else(|| value.clone(), Value::DateTime)
            }
            (FieldKind::DateTime, Value::DateTime(_)) => value.clone(),
            (FieldKind::DateTime, other) => {
                self.log_non_date(other);
                value.clone()
            }
            _ => value.clone(),
        }
    }

    /// Dates leave in the canonical wire form, whether they arrive as
    /// instants or as strings. Unparseable strings are sent unchanged.
    fn write(&self, value: &Value) -> Value {
        match (self.kind, value) {
            (FieldKind::DateTime, Value::DateTime(at)) => Value::String(format_date(at)),
            (FieldKind::DateTime, Value::String(raw)) => parse_date_lenient(raw)
                .map_or_else(|| value.clone(), |at| Value::String(format_date(&at))),
            (FieldKind::DateTime, other) => {
                self.log_non_date(other);
                value.clone()
            }
            _ => value.clone(),
        }
    }

    fn log_non_date(&self, value: &Value) {
        tracing::debug!(
            field = self.wire,
            kind = value.kind(),
            "date field holds a non-date value"
        );
    }
}

/// Field list of one entity.
#[derive(Debug)]
pub struct EntitySchema {
    /// Entity name, snake_case (`"session"`, `"user_role"`).
    pub entity: &'static str,
    /// Every known field, in wire declaration order.
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    /// Finds a field by its wire key.
    #[must_use]
    pub fn field_by_wire(&self, wire: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.wire == wire)
    }

    /// Finds a field by its domain key.
    #[must_use]
    pub fn field_by_domain(&self, domain: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.domain == domain)
    }

    /// Fields emitted on domain → wire.
    pub fn writable(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.is_writable())
    }

    /// Maps a wire record to a domain record.
    ///
    /// Only declared fields are copied; unknown keys are dropped. Absent and
    /// `null` fields stay absent. Date fields are parsed leniently and kept
    /// as strings when unparseable. Embedded records are copied untouched.
    #[must_use]
    pub fn wire_to_domain(&self, record: &Map) -> Map {
        self.fields
            .iter()
            .filter_map(|field| {
                record
                    .get(field.wire)
                    .filter(|value| !value.is_null())
                    .map(|value| (field.domain.to_owned(), field.read(value)))
            })
            .collect()
    }

    /// Maps a (partial) domain record to a (partial) wire record.
    ///
    /// Only writable fields present in `record` are emitted; read-only
    /// fields are left out even when present. Dates are formatted in the
    /// canonical wire form.
    #[must_use]
    pub fn domain_to_wire(&self, record: &Map) -> Map {
        self.writable()
            .filter_map(|field| {
                record
                    .get(field.domain)
                    .filter(|value| !value.is_null())
                    .map(|value| (field.wire.to_owned(), field.write(value)))
            })
            .collect()
    }

    /// Maps a record, or each record of an array, in `direction`.
    ///
    /// Values that are neither are returned unchanged.
    #[must_use]
    pub fn map(&self, value: &Value, direction: Direction) -> Value {
        match value {
            Value::Object(record) => Value::Object(match direction {
                Direction::ToDomain => self.wire_to_domain(record),
                Direction::ToWire => self.domain_to_wire(record),
            }),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.map(item, direction))
                    .collect(),
            ),
            _ => value.clone(),
        }
    }
}

/// Session schema.
pub const SESSION: EntitySchema = EntitySchema {
    entity: "session",
    fields: &[
        FieldSpec::rw("id", "id", FieldKind::Identifier),
        FieldSpec::rw("user_id", "userId", FieldKind::Integer),
        FieldSpec::rw("token", "token", FieldKind::Text),
        FieldSpec::rw("expiration", "expiration", FieldKind::DateTime),
        FieldSpec::rw("FACode", "FACode", FieldKind::Text),
        FieldSpec::rw("state", "state", FieldKind::Text),
        FieldSpec::ro("created_at", "createdAt", FieldKind::DateTime),
        FieldSpec::ro("updated_at", "updatedAt", FieldKind::DateTime),
        FieldSpec::ro("user", "user", FieldKind::Embedded),
    ],
};

/// Profile schema.
pub const PROFILE: EntitySchema = EntitySchema {
    entity: "profile",
    fields: &[
        FieldSpec::rw("id", "id", FieldKind::Identifier),
        FieldSpec::rw("user_id", "userId", FieldKind::Integer),
        FieldSpec::rw("phone", "phone", FieldKind::Text),
        FieldSpec::rw("photo", "photo", FieldKind::Text),
        FieldSpec::ro("created_at", "createdAt", FieldKind::DateTime),
        FieldSpec::ro("updated_at", "updatedAt", FieldKind::DateTime),
    ],
};

/// User schema.
pub const USER: EntitySchema = EntitySchema {
    entity: "user",
    fields: &[
        FieldSpec::rw("id", "id", FieldKind::Identifier),
        FieldSpec::rw("name", "name", FieldKind::Text),
        FieldSpec::rw("email", "email", FieldKind::Text),
        FieldSpec::rw("password", "password", FieldKind::Text),
        FieldSpec::ro("address", "address", FieldKind::Embedded),
        FieldSpec::ro("profile", "profile", FieldKind::Embedded),
        FieldSpec::ro("passwords", "passwords", FieldKind::Embedded),
        FieldSpec::ro("user_roles", "userRoles", FieldKind::Embedded),
        FieldSpec::ro("sessions", "sessions", FieldKind::Embedded),
    ],
};

/// Address schema.
pub const ADDRESS: EntitySchema = EntitySchema {
    entity: "address",
    fields: &[
        FieldSpec::rw("id", "id", FieldKind::Identifier),
        FieldSpec::rw("street", "street", FieldKind::Text),
        FieldSpec::rw("number", "number", FieldKind::Text),
        FieldSpec::rw("latitude", "latitude", FieldKind::Float),
        FieldSpec::rw("longitude", "longitude", FieldKind::Float),
        FieldSpec::rw("user_id", "userId", FieldKind::Integer),
    ],
};

/// Password schema.
pub const PASSWORD: EntitySchema = EntitySchema {
    entity: "password",
    fields: &[
        FieldSpec::rw("id", "id", FieldKind::Identifier),
        FieldSpec::rw("content", "content", FieldKind::Text),
        FieldSpec::rw("start_at", "startAt", FieldKind::DateTime),
        FieldSpec::rw("end_at", "endAt", FieldKind::DateTime),
        FieldSpec::rw("user_id", "userId", FieldKind::Integer),
    ],
};

/// User-role join schema.
pub const USER_ROLE: EntitySchema = EntitySchema {
    entity: "user_role",
    fields: &[
        FieldSpec::rw("id", "id", FieldKind::Identifier),
        FieldSpec::rw("start_at", "startAt", FieldKind::DateTime),
        FieldSpec::rw("end_at", "endAt", FieldKind::DateTime),
        FieldSpec::rw("user_id", "userId", FieldKind::Integer),
        FieldSpec::rw("role_id", "roleId", FieldKind::Integer),
        FieldSpec::ro("user", "user", FieldKind::Embedded),
        FieldSpec::ro("role", "role", FieldKind::Embedded),
    ],
};

/// Every known schema.
pub const ALL: &[&EntitySchema] = &[&SESSION, &PROFILE, &USER, &ADDRESS, &PASSWORD, &USER_ROLE];

/// Finds a schema by entity name. Case-insensitive; `-` and `_` are
/// interchangeable (`user-role` finds `user_role`).
#[must_use]
pub fn lookup(name: &str) -> Option<&'static EntitySchema> {
    let normalized = name.trim().replace('-', "_");
    ALL.iter()
        .copied()
        .find(|schema| schema.entity.eq_ignore_ascii_case(&normalized))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn record(json: serde_json::Value) -> Map {
        match Value::from(json) {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other.kind()),
        }
    }

    #[test]
    fn session_wire_to_domain_renames_and_parses() {
        let domain = SESSION.wire_to_domain(&record(json!({
            "id": "abc",
            "user_id": 7,
            "token": "t",
            "expiration": "2024-01-01T10:00:00",
            "state": "active",
            "extra": "dropped",
        })));
        assert_eq!(domain.get("userId"), Some(&Value::from(7)));
        assert_eq!(
            domain.get("expiration").and_then(Value::as_datetime).copied(),
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).single()
        );
        assert!(domain.get("extra").is_none());
        assert!(domain.get("createdAt").is_none());
        assert_eq!(domain.len(), 5);
    }

    #[test]
    fn schema_dates_parse_beyond_generic_grammar() {
        let domain = PASSWORD.wire_to_domain(&record(json!({ "start_at": "2024-03-01" })));
        assert!(domain.get("startAt").and_then(Value::as_datetime).is_some());
    }

    #[test]
    fn unparseable_schema_dates_stay_strings() {
        let domain = PASSWORD.wire_to_domain(&record(json!({ "end_at": "someday" })));
        assert_eq!(domain.get("endAt"), Some(&Value::from("someday")));
    }

    #[test]
    fn profile_domain_to_wire_drops_timestamps() {
        let wire = PROFILE.domain_to_wire(&record(json!({
            "id": 5,
            "phone": "123",
            "createdAt": "2024-01-01T10:00:00Z",
            "updatedAt": "2024-01-01T10:00:00Z",
        })));
        assert_eq!(
            serde_json::Value::from(Value::Object(wire)),
            json!({ "id": 5, "phone": "123" })
        );
    }

    #[test]
    fn domain_to_wire_formats_dates() {
        let Some(at) = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).single() else {
            panic!("valid date");
        };
        let mut domain = Map::new();
        domain.insert("expiration".to_owned(), Value::from(at));
        domain.insert("userId".to_owned(), Value::from(7));
        let wire = SESSION.domain_to_wire(&domain);
        assert_eq!(
            wire.get("expiration"),
            Some(&Value::from("2024-01-01T10:00:00Z"))
        );
        assert_eq!(wire.get("user_id"), Some(&Value::from(7)));
    }

    #[test]
    fn domain_to_wire_canonicalizes_date_strings() {
        let wire = PASSWORD.map(
            &Value::from(json!({
                "startAt": "2024-01-02 08:00:00",
                "endAt": "2024-01-02T10:00:00+02:00",
                "userId": 1,
            })),
            Direction::ToWire,
        );
        assert_eq!(
            serde_json::Value::from(wire),
            json!({
                "start_at": "2024-01-02T08:00:00Z",
                "end_at": "2024-01-02T08:00:00Z",
                "user_id": 1,
            })
        );
    }

    #[test]
    fn unparseable_date_strings_are_written_unchanged() {
        let wire = PASSWORD.domain_to_wire(&record(json!({ "endAt": "someday" })));
        assert_eq!(wire.get("end_at"), Some(&Value::from("someday")));
    }

    #[test]
    fn non_string_dates_pass_through_both_ways() {
        let domain = PASSWORD.wire_to_domain(&record(json!({ "start_at": 1_704_067_200 })));
        assert_eq!(domain.get("startAt"), Some(&Value::from(1_704_067_200)));
        let wire = PASSWORD.domain_to_wire(&domain);
        assert_eq!(wire.get("start_at"), Some(&Value::from(1_704_067_200)));
    }

    #[test]
    fn embedded_records_pass_through_on_read_only() {
        let wire = record(json!({ "id": 1, "sessions": [{ "user_id": 1 }] }));
        let domain = USER.wire_to_domain(&wire);
        assert_eq!(domain.get("sessions"), wire.get("sessions"));

        let back = USER.domain_to_wire(&domain);
        assert!(back.get("sessions").is_none());
        assert_eq!(back.get("id"), Some(&Value::from(1)));
    }

    #[test]
    fn nulls_are_treated_as_absent() {
        let domain = PROFILE.wire_to_domain(&record(json!({ "id": 1, "phone": null })));
        assert!(domain.get("phone").is_none());
    }

    #[test]
    fn map_handles_arrays_and_scalars() {
        let list = Value::from(json!([{ "user_id": 1 }, { "user_id": 2 }]));
        let mapped = ADDRESS.map(&list, Direction::ToDomain);
        assert_eq!(
            serde_json::Value::from(mapped),
            json!([{ "userId": 1 }, { "userId": 2 }])
        );
        assert_eq!(ADDRESS.map(&Value::from(3), Direction::ToWire), Value::from(3));
    }

    #[test]
    fn lookup_normalizes_names() {
        assert_eq!(lookup("session").map(|s| s.entity), Some("session"));
        assert_eq!(lookup("User-Role").map(|s| s.entity), Some("user_role"));
        assert!(lookup("invoice").is_none());
    }

    #[test]
    fn wire_and_domain_keys_are_unique_per_schema() {
        for schema in ALL {
            for field in schema.fields {
                assert_eq!(schema.field_by_wire(field.wire), Some(field));
                assert_eq!(schema.field_by_domain(field.domain), Some(field));
            }
        }
    }

    #[test]
    fn foreign_keys_differ_only_by_case_convention() {
        for schema in ALL {
            for field in schema.fields {
                if field.wire.ends_with("_id") {
                    assert_eq!(crate::codec::to_camel_case(field.wire), field.domain);
                }
            }
        }
    }
}
