//! Common types and utilities for the NetBox REST API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// List envelope returned by every NetBox collection endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Error body NetBox sends with 4xx responses
///
/// Either `{"detail": "..."}` or a map of field name to messages.
#[derive(Debug, Default)]
pub struct ApiErrorDetails {
    pub detail: Option<String>,
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ApiErrorDetails {
    pub fn parse(body: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        let object = value.as_object()?;

        let mut details = ApiErrorDetails::default();
        for (key, value) in object {
            if key == "detail" {
                details.detail = value.as_str().map(str::to_string);
                continue;
            }
            details
                .field_errors
                .insert(key.clone(), flatten_messages(value));
        }
        Some(details)
    }

    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = self.detail.iter().cloned().collect();
        parts.extend(
            self.field_errors
                .iter()
                .map(|(field, messages)| format!("{}: {}", field, messages.join(" "))),
        );
        parts.join("; ")
    }
}

impl std::fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

impl std::error::Error for ApiErrorDetails {}

fn flatten_messages(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::String(s) => vec![s.clone()],
        serde_json::Value::Array(items) => items.iter().flat_map(flatten_messages).collect(),
        serde_json::Value::Object(map) => map
            .iter()
            .flat_map(|(k, v)| {
                flatten_messages(v)
                    .into_iter()
                    .map(move |msg| format!("{}: {}", k, msg))
            })
            .collect(),
        other => vec![other.to_string()],
    }
}

/// Filter parameters for collection queries
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    params: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn add_optional<K: Into<String>, V: ToString>(mut self, key: K, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.params.push((key.into(), v.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("?{}", pairs.join("&"))
    }
}
