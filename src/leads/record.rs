//! Lead record type.
//!
//! Serialized as one object in the lead document array:
//!
//! ```json
//! { "email": "a@b.com", "source": "website", "timestamp": "2025-03-14T09:26:53.589793+00:00" }
//! ```
//!
//! Fields this version does not know about are kept in `extra`. Known fields
//! are read leniently: a missing or `null` value reads as empty, any other
//! scalar as its JSON text.

use crate::utils::date::now_iso8601;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{borrow::Cow, collections::BTreeMap};

/// One captured submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub source: String,

    /// ISO-8601 UTC instant of capture.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub timestamp: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

impl LeadRecord {
    /// New record stamped with the current UTC time.
    pub fn new(email: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            source: source.into(),
            timestamp: now_iso8601(),
            extra: BTreeMap::new(),
        }
    }

    /// Read view of one document entry; `None` unless the entry is an object.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        match entry {
            Value::Object(_) => Self::deserialize(entry).ok(),
            _ => None,
        }
    }

    /// Field names present on this record, `email` first.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names = vec!["email"];
        if !self.source.is_empty() {
            names.push("source");
        }
        if !self.timestamp.is_empty() {
            names.push("timestamp");
        }
        names.extend(self.extra.keys().map(String::as_str));
        names
    }

    /// Field value as text; non-string extras use their JSON form.
    pub fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "email" => Some(Cow::Borrowed(&self.email)),
            "source" if !self.source.is_empty() => Some(Cow::Borrowed(&self.source)),
            "timestamp" if !self.timestamp.is_empty() => Some(Cow::Borrowed(&self.timestamp)),
            _ => self.extra.get(name).map(|value| match value {
                Value::String(s) => Cow::Borrowed(s.as_str()),
                other => Cow::Owned(other.to_string()),
            }),
        }
    }
}
