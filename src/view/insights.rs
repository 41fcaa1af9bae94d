//! Analytics insights parsing
//!
//! The backend stores `insights` as a JSON-encoded string. Its shape is an
//! untrusted external payload: parsing never fails the caller, and a payload
//! that is not valid JSON (or not an object) is an explicit [`Insights::Malformed`]
//! state rather than silently-empty defaults, so the degraded case stays
//! visible in output and tests. Wrong-typed individual fields degrade
//! field-by-field.

use log::warn;
use serde_json::Value;

/// Placeholder shown when the payload carries no usable response list.
pub const NO_RESPONSES_PLACEHOLDER: &str = "No responses available";

#[derive(Debug, Clone, PartialEq)]
pub enum Insights {
    /// The analytics record had no insights field.
    Missing,
    /// The field was present but not parseable as a JSON object.
    Malformed,
    Parsed(InsightsData),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightsData {
    pub question: Option<String>,
    pub response_count: Option<u64>,
    pub responses: Option<Vec<String>>,
}

impl Insights {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Insights::Missing;
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => {
                let question = map
                    .get("question")
                    .and_then(Value::as_str)
                    .map(String::from);
                let response_count = map.get("response_count").and_then(Value::as_u64);
                let responses = map.get("responses").and_then(Value::as_array).map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(String::from)
                        .collect()
                });
                Insights::Parsed(InsightsData {
                    question,
                    response_count,
                    responses,
                })
            }
            Ok(other) => {
                warn!("Insights payload is not a JSON object: {}", other);
                Insights::Malformed
            }
            Err(err) => {
                warn!("Failed to parse insights payload: {}", err);
                Insights::Malformed
            }
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Insights::Malformed)
    }

    /// Question label, `N/A` when absent.
    pub fn question(&self) -> &str {
        match self {
            Insights::Parsed(data) => data.question.as_deref().unwrap_or("N/A"),
            _ => "N/A",
        }
    }

    pub fn response_count(&self) -> u64 {
        match self {
            Insights::Parsed(data) => data.response_count.unwrap_or(0),
            _ => 0,
        }
    }

    /// Response strings; empty when the field is absent, malformed, or not a
    /// sequence. Renderers substitute [`NO_RESPONSES_PLACEHOLDER`] for empty.
    pub fn responses(&self) -> &[String] {
        match self {
            Insights::Parsed(data) => data.responses.as_deref().unwrap_or(&[]),
            _ => &[],
        }
    }
}
