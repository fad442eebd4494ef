//! Date conversion at the pedidos API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server parses request dates as `DD/MM/YYYY` (bodies and list query
//! alike) but serializes stored dates as RFC 1123 strings, e.g.
//! `Mon, 15 Mar 2021 00:00:00 GMT`. Wire types hold a [`NaiveDate`] and use
//! these functions through `#[serde(with = ...)]`, so callers never see the
//! asymmetry.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

/// Format the server expects on requests; also the display format.
pub const WIRE_FORMAT: &str = "%d/%m/%Y";

const ISO_FORMAT: &str = "%Y-%m-%d";

#[must_use]
pub fn to_wire(date: NaiveDate) -> String {
    date.format(WIRE_FORMAT).to_string()
}

/// Parse an RFC 1123 response date, a `DD/MM/YYYY` value or an ISO date.
#[must_use]
pub fn parse(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc2822(value) {
        return Some(stamp.date_naive());
    }
    NaiveDate::parse_from_str(value, WIRE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, ISO_FORMAT))
        .ok()
}

fn unrecognized<E: serde::de::Error>(raw: &str) -> E {
    E::custom(format!("unrecognized date: {raw}"))
}

/// # Errors
///
/// Propagates the serializer's error.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_wire(*date))
}

/// # Errors
///
/// Fails on a non-string value or a string [`parse`] rejects.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| unrecognized(&raw))
}

/// Same conversion for nullable fields; `null` and `""` read as `None`.
pub mod option {
    use super::*;

    /// # Errors
    ///
    /// Propagates the serializer's error.
    #[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&to_wire(*date)),
            None => serializer.serialize_none(),
        }
    }

    /// # Errors
    ///
    /// Fails on a non-string value or a string [`parse`] rejects.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse(value).map(Some).ok_or_else(|| unrecognized(value)),
        }
    }
}
