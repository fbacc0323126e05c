//! Action creators.
//!
//! An [`ActionCreator`] turns call arguments into an [`Action`] of a fixed
//! type. Errors travel through their own entry points instead of being
//! sniffed out of the arguments:
//!
//! ```text
//! create(&[args])      -> payload from the payload creator
//! failure(error)       -> payload is the error, error flag set
//! from_result(result)  -> one of the two above
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::action::Action;
use crate::error::ActionError;

type PayloadFn = dyn Fn(&[Value]) -> Result<Value, ActionError> + Send + Sync;
type MetaFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// How an action's payload is derived from the call arguments.
#[derive(Clone, Default)]
pub enum PayloadCreator {
    /// The first argument, or nothing when called without arguments.
    #[default]
    Identity,

    /// A function of all arguments. Returning `Err` produces an error action
    /// whose payload is the returned error.
    Custom(Arc<PayloadFn>),

    /// Never derive a payload.
    None,
}

impl PayloadCreator {
    fn derive(&self, args: &[Value]) -> Result<Value, ActionError> {
        match self {
            PayloadCreator::Identity => Ok(args.first().cloned().unwrap_or(Value::Null)),
            PayloadCreator::Custom(payload_fn) => payload_fn(args),
            PayloadCreator::None => Ok(Value::Null),
        }
    }
}

impl fmt::Debug for PayloadCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadCreator::Identity => write!(f, "Identity"),
            PayloadCreator::Custom(_) => write!(f, "Custom(..)"),
            PayloadCreator::None => write!(f, "None"),
        }
    }
}

/// Builds actions of a single type.
///
/// The creator compares equal to its type string, so it can key a dispatch
/// table directly:
///
/// ```ignore
/// let add_todo = ActionCreator::new("ADD_TODO");
/// let action = add_todo.create(&[json!("buy milk")]);
/// assert!(action.is(&add_todo));
/// assert_eq!(add_todo, "ADD_TODO");
/// ```
#[derive(Clone)]
pub struct ActionCreator {
    action_type: String,
    payload: PayloadCreator,
    meta: Option<Arc<MetaFn>>,
}

impl ActionCreator {
    /// Creator whose payload is its first argument.
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: PayloadCreator::Identity,
            meta: None,
        }
    }

    /// Creator that never carries a payload, not even on failure.
    pub fn without_payload(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: PayloadCreator::None,
            meta: None,
        }
    }

    pub fn with_payload<F>(mut self, payload_fn: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, ActionError> + Send + Sync + 'static,
    {
        self.payload = PayloadCreator::Custom(Arc::new(payload_fn));
        self
    }

    pub fn with_meta<F>(mut self, meta_fn: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.meta = Some(Arc::new(meta_fn));
        self
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn payload_creator(&self) -> &PayloadCreator {
        &self.payload
    }

    /// Build an action from call arguments.
    pub fn create(&self, args: &[Value]) -> Action {
        let mut action = Action::new(self.action_type.clone());

        match self.payload.derive(args) {
            Ok(payload) => {
                if !payload.is_null() {
                    action.payload = Some(payload);
                }
            }
            Err(error) => {
                action.payload = Some(error.to_value());
                action.error = true;
            }
        }

        action.meta = self.derive_meta(args);
        tracing::trace!(action_type = %self.action_type, error = action.error, "created action");
        action
    }

    /// Build an error action. The payload creator is bypassed.
    pub fn failure(&self, error: impl Into<ActionError>) -> Action {
        let error = error.into().to_value();
        let mut action = Action::new(self.action_type.clone());

        action.meta = self.derive_meta(std::slice::from_ref(&error));
        if !matches!(self.payload, PayloadCreator::None) {
            action.payload = Some(error);
        }
        action.error = true;

        tracing::trace!(action_type = %self.action_type, "created error action");
        action
    }

    /// `Ok` values go through [`create`](Self::create) as the single
    /// argument, `Err` values through [`failure`](Self::failure).
    pub fn from_result<E>(&self, result: Result<Value, E>) -> Action
    where
        E: std::error::Error + 'static,
    {
        match result {
            Ok(value) => self.create(std::slice::from_ref(&value)),
            Err(error) => self.failure(ActionError::from_error(&error)),
        }
    }

    fn derive_meta(&self, args: &[Value]) -> Option<Value> {
        let meta_fn = self.meta.as_ref()?;
        let meta = meta_fn(args);
        (!meta.is_null()).then_some(meta)
    }
}

impl fmt::Debug for ActionCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCreator")
            .field("action_type", &self.action_type)
            .field("payload", &self.payload)
            .field("meta", &self.meta.is_some())
            .finish()
    }
}

impl fmt::Display for ActionCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.action_type)
    }
}

impl AsRef<str> for ActionCreator {
    fn as_ref(&self) -> &str {
        &self.action_type
    }
}

impl PartialEq<str> for ActionCreator {
    fn eq(&self, other: &str) -> bool {
        self.action_type == other
    }
}

impl PartialEq<&str> for ActionCreator {
    fn eq(&self, other: &&str) -> bool {
        self.action_type == *other
    }
}
