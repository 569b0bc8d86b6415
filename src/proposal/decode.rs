//! Boundary decoding from the fetched JSON document

use super::{Department, Proposal};
use crate::error::{ErrorCode, RecapError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use serde_json::Value;
use tracing::{debug, warn};

/// Naive timestamp formats accepted after RFC 3339
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Offset applied to timestamps that carry no zone
    pub utc_offset: FixedOffset,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            utc_offset: Utc.fix(),
        }
    }
}

/// Decode a whole document: a JSON array of proposals, or `{"data": [...]}`.
///
/// Entries that are not objects (including `null`) are dropped. Only a
/// document that contains no list at all is an error.
pub fn decode_document(document: &Value, options: &DecodeOptions) -> Result<Vec<Proposal>> {
    let entries = match document {
        Value::Array(entries) => entries,
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(RecapError::decode_with_code(
                    ErrorCode::DECODE_NOT_A_LIST,
                    "expected an array of proposals or an object with a `data` array",
                ))
            }
        },
        other => {
            return Err(RecapError::decode_with_code(
                ErrorCode::DECODE_NOT_A_LIST,
                format!("expected an array of proposals, found {}", json_kind(other)),
            ))
        }
    };

    let mut proposals = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match Proposal::from_value(entry, options) {
            Some(proposal) => proposals.push(proposal),
            None => warn!(index, kind = json_kind(entry), "Dropping non-object proposal entry"),
        }
    }

    debug!(
        decoded = proposals.len(),
        dropped = entries.len() - proposals.len(),
        "Decoded proposal document"
    );
    Ok(proposals)
}

/// Parse then decode a JSON document
pub fn decode_str(text: &str, options: &DecodeOptions) -> Result<Vec<Proposal>> {
    let document: Value = serde_json::from_str(text).map_err(|e| {
        RecapError::decode_with_code(ErrorCode::DECODE_INVALID_JSON, "input is not valid JSON")
            .with_source(e)
    })?;
    decode_document(&document, options)
}

impl Proposal {
    /// Decode one record. Returns `None` for anything that is not an object.
    pub fn from_value(value: &Value, options: &DecodeOptions) -> Option<Self> {
        if !value.is_object() {
            return None;
        }

        let stage = super::Stage::parse(&text_field(value, "stage").unwrap_or_default());
        let data = value.get("data").unwrap_or(&Value::Null);

        Some(Self {
            id: text_field(value, "id").unwrap_or_default(),
            department: Department::decode(value),
            payload: super::Payload::decode(&stage, data, options),
        })
    }
}

impl Department {
    /// Nested `department: {id, name}` wins over flat `departmentId`/`departmentName`
    fn decode(record: &Value) -> Self {
        let nested = record.get("department").filter(|d| d.is_object());
        let pick = |nested_key: &str, flat_key: &str| {
            nested
                .and_then(|d| text_field(d, nested_key))
                .or_else(|| text_field(record, flat_key))
                .unwrap_or_default()
        };
        Self {
            id: pick("id", "departmentId"),
            name: pick("name", "departmentName"),
        }
    }
}

/// A string or number field as text
pub(crate) fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Parse a timestamp from a string or epoch milliseconds. Unparseable input is `None`.
pub fn parse_timestamp(value: &Value, offset: FixedOffset) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => parse_timestamp_str(text, offset),
        Value::Number(number) => number
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

pub fn parse_timestamp_str(text: &str, offset: FixedOffset) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|instant| instant.with_timezone(&Utc))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
