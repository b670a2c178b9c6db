//! Serde helpers for the `YYYY-MM-DD HH:MM:SS` timestamps used on the wire.

use chrono::NaiveDateTime;
use serde::Serializer;

/// Format of every timestamp exchanged with the apps, second resolution.
pub const LEGACY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a timestamp at second resolution.
pub fn format(value: &NaiveDateTime) -> String {
    value.format(LEGACY_FORMAT).to_string()
}

/// `#[serde(with = "crate::model::datetime::option")]` for serialized `Option<NaiveDateTime>` fields.
pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&format(value)),
            None => serializer.serialize_none(),
        }
    }
}
