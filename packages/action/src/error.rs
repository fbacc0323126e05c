use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An error carried as an action payload.
///
/// Serializes as `{ "message": ..., "name": ... }`, with `name` omitted when
/// unknown. Any `std::error::Error` converts into one through
/// [`ActionError::from_error`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ActionError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Capture an arbitrary error. An `ActionError` passed in is kept as is.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + 'static,
    {
        let dyn_error: &(dyn std::error::Error + 'static) = error;
        match dyn_error.downcast_ref::<ActionError>() {
            Some(action_error) => action_error.clone(),
            None => Self::new(error.to_string()),
        }
    }

    /// The JSON form used as an action payload.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("message".to_string(), Value::String(self.message.clone()));
        if let Some(name) = &self.name {
            map.insert("name".to_string(), Value::String(name.clone()));
        }
        Value::Object(map)
    }
}

impl From<&str> for ActionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ActionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<serde_json::Error> for ActionError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(error.to_string()).with_name("SerializationError")
    }
}
