//! Async request lifecycles.
//!
//! A lifecycle groups three action types derived from one base name:
//!
//! ```text
//! FETCH_USER_START -> FETCH_USER_SUCCESS
//!                  -> FETCH_USER_ERROR
//! ```
//!
//! Every action produced here carries `request: { id, error }` so a consumer
//! can tie in-flight state back to the operation. Nothing here enforces the
//! order in which phases are dispatched, and concurrent runs of the same
//! lifecycle share identifiers.

use std::future::Future;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::{Action, RequestDescriptor};
use crate::dispatch::Dispatch;
use crate::error::ActionError;

const START_SUFFIX: &str = "_START";
const SUCCESS_SUFFIX: &str = "_SUCCESS";
const ERROR_SUFFIX: &str = "_ERROR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Start,
    Success,
    Error,
}

/// The action types of one lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    pub name: String,
    pub start: String,
    pub success: String,
    pub error: String,
}

impl LifecycleEvent {
    pub fn new(base_name: impl Into<String>) -> Self {
        let name = base_name.into();
        Self {
            start: format!("{name}{START_SUFFIX}"),
            success: format!("{name}{SUCCESS_SUFFIX}"),
            error: format!("{name}{ERROR_SUFFIX}"),
            name,
        }
    }

    pub fn action_type(&self, phase: Phase) -> &str {
        match phase {
            Phase::Start => &self.start,
            Phase::Success => &self.success,
            Phase::Error => &self.error,
        }
    }

    /// Which phase of this lifecycle an action type belongs to, if any.
    pub fn phase_of(&self, action_type: &str) -> Option<Phase> {
        [Phase::Start, Phase::Success, Phase::Error]
            .into_iter()
            .find(|phase| self.action_type(*phase) == action_type)
    }
}

/// Produces the actions of a single phase.
#[derive(Debug, Clone)]
pub struct PhaseCreator {
    request_id: String,
    action_type: String,
    phase: Phase,
}

impl PhaseCreator {
    fn new(event: &LifecycleEvent, phase: Phase) -> Self {
        Self {
            request_id: event.name.clone(),
            action_type: event.action_type(phase).to_string(),
            phase,
        }
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn create(&self, payload: Value) -> Action {
        let payload = (!payload.is_null()).then_some(payload);
        let error = match self.phase {
            Phase::Error => payload.clone(),
            Phase::Start | Phase::Success => None,
        };

        let mut action = Action::new(self.action_type.clone());
        action.payload = payload;
        action.request = Some(RequestDescriptor {
            id: self.request_id.clone(),
            error,
        });
        action
    }
}

impl AsRef<str> for PhaseCreator {
    fn as_ref(&self) -> &str {
        &self.action_type
    }
}

/// The `{ start, success, error }` bundle handed to a lifecycle builder.
#[derive(Debug, Clone)]
pub struct LifecycleCreators {
    pub start: PhaseCreator,
    pub success: PhaseCreator,
    pub error: PhaseCreator,
}

impl LifecycleCreators {
    pub fn new(event: &LifecycleEvent) -> Self {
        Self {
            start: PhaseCreator::new(event, Phase::Start),
            success: PhaseCreator::new(event, Phase::Success),
            error: PhaseCreator::new(event, Phase::Error),
        }
    }

    pub fn phase(&self, phase: Phase) -> &PhaseCreator {
        match phase {
            Phase::Start => &self.start,
            Phase::Success => &self.success,
            Phase::Error => &self.error,
        }
    }

    /// Success action for `Ok`, error action for `Err`.
    pub fn settle<E>(&self, result: Result<Value, E>) -> Action
    where
        E: std::error::Error + 'static,
    {
        match result {
            Ok(value) => self.success.create(value),
            Err(error) => self.error.create(ActionError::from_error(&error).to_value()),
        }
    }
}

/// An operation together with the lifecycle it reports through.
///
/// Derefs to the operation, so a closure built by the lifecycle builder can
/// be called directly.
///
/// ```ignore
/// let fetch_user = AsyncAction::new("FETCH_USER", |creators| {
///     move |dispatcher: &RecordingDispatcher, id: u64| {
///         dispatcher.dispatch(creators.start.create(json!(id)));
///     }
/// });
/// assert_eq!(fetch_user.event().success, "FETCH_USER_SUCCESS");
/// ```
#[derive(Debug, Clone)]
pub struct AsyncAction<Op> {
    event: LifecycleEvent,
    operation: Op,
}

impl<Op> AsyncAction<Op> {
    pub fn new<F>(base_name: impl Into<String>, builder: F) -> Self
    where
        F: FnOnce(LifecycleCreators) -> Op,
    {
        let event = LifecycleEvent::new(base_name);
        let operation = builder(LifecycleCreators::new(&event));
        Self { event, operation }
    }

    pub fn event(&self) -> &LifecycleEvent {
        &self.event
    }

    pub fn operation(&self) -> &Op {
        &self.operation
    }

    pub fn into_parts(self) -> (LifecycleEvent, Op) {
        (self.event, self.operation)
    }
}

impl<Op> Deref for AsyncAction<Op> {
    type Target = Op;

    fn deref(&self) -> &Op {
        &self.operation
    }
}

/// Dispatch `start`, await `request`, then dispatch `success` or `error`.
///
/// The outcome of `request` is handed back unchanged after the final
/// dispatch. A success value that cannot be serialized is reported through
/// the error phase instead.
pub async fn dispatch_request<D, F, T, E>(
    dispatcher: &D,
    creators: &LifecycleCreators,
    start_payload: Value,
    request: F,
) -> Result<T, E>
where
    D: Dispatch + ?Sized,
    F: Future<Output = Result<T, E>>,
    T: Serialize,
    E: std::error::Error + 'static,
{
    dispatcher.dispatch(creators.start.create(start_payload));

    let outcome = request.await;
    let action = match &outcome {
        Ok(value) => match serde_json::to_value(value) {
            Ok(payload) => creators.success.create(payload),
            Err(error) => creators
                .error
                .create(ActionError::from(error).to_value()),
        },
        Err(error) => {
            tracing::debug!(request = %creators.error.request_id, %error, "request failed");
            creators.error.create(ActionError::from_error(error).to_value())
        }
    };
    dispatcher.dispatch(action);

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::RecordingDispatcher;
    use serde_json::json;

    #[test]
    fn test_event_names() {
        let event = LifecycleEvent::new("REQUEST_RETURNS");
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "name": "REQUEST_RETURNS",
                "start": "REQUEST_RETURNS_START",
                "success": "REQUEST_RETURNS_SUCCESS",
                "error": "REQUEST_RETURNS_ERROR"
            })
        );
    }

    #[test]
    fn test_phase_of() {
        let event = LifecycleEvent::new("LOAD");
        assert_eq!(event.phase_of("LOAD_START"), Some(Phase::Start));
        assert_eq!(event.phase_of("LOAD_ERROR"), Some(Phase::Error));
        assert_eq!(event.phase_of("LOAD"), None);
        assert_eq!(event.phase_of("UNLOAD_START"), None);
    }

    #[test]
    fn test_phase_actions_carry_request() {
        let creators = LifecycleCreators::new(&LifecycleEvent::new("LOAD"));

        let start = creators.start.create(json!({"page": 2}));
        assert_eq!(
            serde_json::to_value(&start).unwrap(),
            json!({
                "type": "LOAD_START",
                "payload": {"page": 2},
                "request": {"id": "LOAD", "error": null}
            })
        );

        let success = creators.success.create(json!([1, 2, 3]));
        assert_eq!(success.request.unwrap().error, None);

        let error = creators.error.create(json!({"error": "timeout"}));
        let request = error.request.clone().unwrap();
        assert_eq!(request.error, error.payload);
        assert!(!error.is_error());
    }

    #[test]
    fn test_settle() {
        let creators = LifecycleCreators::new(&LifecycleEvent::new("SAVE"));

        let ok = creators.settle::<ActionError>(Ok(json!("saved")));
        assert!(ok.is("SAVE_SUCCESS"));

        let failed = creators.settle(Err(ActionError::new("500::boom")));
        assert!(failed.is("SAVE_ERROR"));
        assert_eq!(failed.payload, Some(json!({"message": "500::boom"})));
    }

    #[test]
    fn test_async_action_exposes_event_and_operation() {
        let bump = AsyncAction::new("BUMP", |creators| {
            move |dispatcher: &RecordingDispatcher, n: i64| {
                dispatcher.dispatch(creators.start.create(json!(n)));
                dispatcher.dispatch(creators.success.create(json!(n + 1)));
            }
        });

        assert_eq!(bump.event().name, "BUMP");
        assert_eq!(bump.event().error, "BUMP_ERROR");

        let dispatcher = RecordingDispatcher::new();
        bump.operation()(&dispatcher, 41);
        assert_eq!(dispatcher.action_types(), vec!["BUMP_START", "BUMP_SUCCESS"]);
        assert_eq!(dispatcher.actions()[1].payload, Some(json!(42)));
    }

    #[tokio::test]
    async fn test_dispatch_request_success() {
        let creators = LifecycleCreators::new(&LifecycleEvent::new("FETCH"));
        let dispatcher = RecordingDispatcher::new();

        let outcome = dispatch_request(&dispatcher, &creators, json!("q"), async {
            Ok::<_, ActionError>(vec![1, 2])
        })
        .await;

        assert_eq!(outcome.unwrap(), vec![1, 2]);
        assert_eq!(dispatcher.action_types(), vec!["FETCH_START", "FETCH_SUCCESS"]);
        assert_eq!(dispatcher.actions()[1].payload, Some(json!([1, 2])));
    }

    #[tokio::test]
    async fn test_dispatch_request_error() {
        let creators = LifecycleCreators::new(&LifecycleEvent::new("FETCH"));
        let dispatcher = RecordingDispatcher::new();

        let outcome = dispatch_request(&dispatcher, &creators, Value::Null, async {
            Err::<(), _>(ActionError::new("404::not found"))
        })
        .await;

        assert!(outcome.is_err());
        let actions = dispatcher.actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].payload, None);
        assert!(actions[1].is("FETCH_ERROR"));
        assert_eq!(
            actions[1].request.as_ref().unwrap().error,
            Some(json!({"message": "404::not found"}))
        );
    }
}
