//! # relay-action
//!
//! Flux-standard actions and the request lifecycles built from them.
//!
//! ## Action creators
//!
//! ```ignore
//! use relay_action::{ActionCreator, ActionError};
//! use serde_json::json;
//!
//! let rename = ActionCreator::new("RENAME").with_meta(|args| json!({ "argc": args.len() }));
//!
//! let ok = rename.create(&[json!("ada")]);
//! // { "type": "RENAME", "payload": "ada", "meta": { "argc": 1 } }
//!
//! let invalid = rename.failure(ActionError::new("name is required"));
//! // { "type": "RENAME", "payload": { "message": "name is required" }, "error": true, ... }
//! ```
//!
//! ## Lifecycles
//!
//! ```ignore
//! use relay_action::{dispatch_request, AsyncAction};
//!
//! let search = AsyncAction::new("SEARCH_RETURNS", |creators| {
//!     move |dispatcher, client, query| async move {
//!         dispatch_request(dispatcher, &creators, query.clone(), client.post(url, &query, &[])).await
//!     }
//! });
//!
//! // search.event().start == "SEARCH_RETURNS_START"
//! ```

pub mod action;
pub mod creator;
pub mod dispatch;
pub mod error;
pub mod lifecycle;

pub use action::{Action, RequestDescriptor};
pub use creator::{ActionCreator, PayloadCreator};
pub use dispatch::{Dispatch, FnDispatcher, RecordingDispatcher};
pub use error::ActionError;
pub use lifecycle::{
    dispatch_request, AsyncAction, LifecycleCreators, LifecycleEvent, Phase, PhaseCreator,
};
