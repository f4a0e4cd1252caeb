//! Collaborator failures for listing and creating professionals.
//!
//! # Responsibility
//! - Carry list failures as a plain message for the error notice.
//! - Decode API error bodies into per-field messages or a single message.
//!
//! # Invariants
//! - `CreateError::Fields` keeps every key of the body; routing keys such as
//!   `non_field_errors` to the top-level message is the form's job.

use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message for a create call that produced no response body.
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Failed to create professional. Please check the network.";
/// Message for a create call whose error body is not a field map.
pub const GENERIC_CREATE_FAILURE_MESSAGE: &str = "Failed to create professional.";

/// List collaborator failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to fetch professionals: {}", self.message)
    }
}

impl Error for FetchError {}

/// Creation collaborator failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateError {
    /// Messages keyed by wire field name. Keys that are not form fields
    /// (`non_field_errors`, `detail`, ...) belong to the top-level message.
    Fields(BTreeMap<String, Vec<String>>),
    /// Unstructured failure.
    Message(String),
}

impl CreateError {
    /// Single-field error with one message.
    pub fn field(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fields(BTreeMap::from([(key.into(), vec![message.into()])]))
    }

    /// Decodes an API error body.
    ///
    /// - no body: network failure message
    /// - JSON object: field map; string values become one-message lists and
    ///   other scalars are kept in their JSON text form
    /// - anything else: generic failure message
    pub fn from_response_body(body: Option<&str>) -> Self {
        let Some(body) = body else {
            return Self::Message(NETWORK_FAILURE_MESSAGE.to_string());
        };

        let map = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) if !map.is_empty() => map,
            _ => return Self::Message(GENERIC_CREATE_FAILURE_MESSAGE.to_string()),
        };

        let fields = map
            .into_iter()
            .map(|(key, value)| {
                let messages = match value {
                    Value::Array(items) => items.into_iter().map(message_text).collect(),
                    other => vec![message_text(other)],
                };
                (key, messages)
            })
            .collect();
        Self::Fields(fields)
    }
}

fn message_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

impl Display for CreateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fields(fields) => {
                let lines = fields
                    .iter()
                    .map(|(key, messages)| format!("{key}: {}", messages.join(" ")))
                    .collect::<Vec<_>>();
                f.write_str(&lines.join("\n"))
            }
            Self::Message(message) => f.write_str(message),
        }
    }
}

impl Error for CreateError {}

#[cfg(test)]
mod tests {
    use super::{CreateError, GENERIC_CREATE_FAILURE_MESSAGE, NETWORK_FAILURE_MESSAGE};

    #[test]
    fn decodes_field_map_with_string_and_list_values() {
        let err = CreateError::from_response_body(Some(
            r#"{"email": ["Enter a valid email address.", "Too long."], "phone": "Taken."}"#,
        ));
        let CreateError::Fields(fields) = &err else {
            panic!("expected field errors, got {err:?}");
        };
        assert_eq!(fields["email"].len(), 2);
        assert_eq!(fields["phone"], vec!["Taken.".to_string()]);
        assert_eq!(
            err.to_string(),
            "email: Enter a valid email address. Too long.\nphone: Taken."
        );
    }

    #[test]
    fn non_object_and_missing_bodies_become_messages() {
        assert_eq!(
            CreateError::from_response_body(Some("<html>502</html>")),
            CreateError::Message(GENERIC_CREATE_FAILURE_MESSAGE.to_string())
        );
        assert_eq!(
            CreateError::from_response_body(Some(r#"["boom"]"#)),
            CreateError::Message(GENERIC_CREATE_FAILURE_MESSAGE.to_string())
        );
        assert_eq!(
            CreateError::from_response_body(None),
            CreateError::Message(NETWORK_FAILURE_MESSAGE.to_string())
        );
    }
}
