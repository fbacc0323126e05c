use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A flux-standard action.
///
/// Only `type` is always present. The other fields appear on the wire only
/// when their derivation rule fired:
///
/// ```text
/// { "type": "ADD_TODO", "payload": "buy milk" }
/// { "type": "ADD_TODO", "payload": { "message": "empty title" }, "error": true }
/// { "type": "LOAD_START", "payload": 7, "request": { "id": "LOAD", "error": null } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub error: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    /// Set on actions produced by a request lifecycle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestDescriptor>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Action {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: None,
            error: false,
            meta: None,
            request: None,
        }
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    /// True when this action has the given type. Accepts `&str`, `String`
    /// and [`crate::ActionCreator`].
    pub fn is<T: AsRef<str> + ?Sized>(&self, action_type: &T) -> bool {
        self.action_type == action_type.as_ref()
    }
}

/// Correlates a lifecycle action with the operation that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// Base name of the lifecycle.
    pub id: String,

    /// The payload in the error phase, `null` otherwise.
    pub error: Option<Value>,
}
