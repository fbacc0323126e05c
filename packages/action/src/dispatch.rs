//! The seam between action producers and whatever store consumes them.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;

/// Receives actions. Implementations forward them to a store, a channel, or
/// a log; producers know nothing about which.
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

impl<D: Dispatch + ?Sized> Dispatch for &D {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action)
    }
}

impl<D: Dispatch + ?Sized> Dispatch for Arc<D> {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action)
    }
}

impl<D: Dispatch + ?Sized> Dispatch for Box<D> {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action)
    }
}

/// Forwards into a channel drained by the store's event loop.
impl Dispatch for UnboundedSender<Action> {
    fn dispatch(&self, action: Action) {
        if let Err(error) = self.send(action) {
            tracing::warn!(action_type = %error.0.action_type, "dispatch channel closed, action dropped");
        }
    }
}

/// Wraps a plain function or closure.
pub struct FnDispatcher<F>(pub F);

impl<F: Fn(Action)> Dispatch for FnDispatcher<F> {
    fn dispatch(&self, action: Action) {
        (self.0)(action)
    }
}

/// Keeps every dispatched action in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    actions: Arc<Mutex<Vec<Action>>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn action_types(&self) -> Vec<String> {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|action| action.action_type.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Dispatch for RecordingDispatcher {
    fn dispatch(&self, action: Action) {
        self.actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_recording_dispatcher_keeps_order() {
        let dispatcher = RecordingDispatcher::new();
        dispatcher.dispatch(Action::new("A"));
        dispatcher.dispatch(Action::new("B"));
        assert_eq!(dispatcher.action_types(), vec!["A", "B"]);

        dispatcher.clear();
        assert!(dispatcher.actions().is_empty());
    }

    #[test]
    fn test_clones_share_storage() {
        let dispatcher = RecordingDispatcher::new();
        let shared = Arc::new(dispatcher.clone());
        shared.dispatch(Action::new("SHARED"));
        assert_eq!(dispatcher.action_types(), vec!["SHARED"]);
    }

    #[test]
    fn test_fn_dispatcher() {
        let seen = RefCell::new(Vec::new());
        let dispatcher = FnDispatcher(|action: Action| seen.borrow_mut().push(action.action_type));
        dispatcher.dispatch(Action::new("CLICK"));
        assert_eq!(seen.into_inner(), vec!["CLICK".to_string()]);
    }

    #[tokio::test]
    async fn test_channel_dispatch() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        tx.dispatch(Action::new("QUEUED"));
        let received = rx.recv().await.unwrap();
        assert!(received.is("QUEUED"));
    }

    #[test]
    fn test_channel_dispatch_after_close_does_not_panic() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<Action>();
        drop(rx);
        tx.dispatch(Action::new("LOST"));
    }
}
