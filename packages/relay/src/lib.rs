//! relay: flux-standard actions for asynchronous HTTP work.
//!
//! The crate is split in two layers:
//!
//! - [`action`] builds actions and three-phase request lifecycles, and
//!   defines the [`Dispatch`] seam towards whatever store consumes them.
//! - [`http`] performs requests, decodes responses by content type and
//!   reduces failures to `"<status>::<message>"` errors.
//!
//! A typical operation ties the two together:
//!
//! ```ignore
//! use relay::{dispatch_request, AsyncAction, HttpClient};
//!
//! let request_returns = AsyncAction::new("REQUEST_RETURNS", |creators| {
//!     move |dispatcher: &dyn Dispatch, client: &HttpClient, query: Value| {
//!         let creators = creators.clone();
//!         async move {
//!             let url = "https://returns.example.com/search/v2";
//!             dispatch_request(dispatcher, &creators, query.clone(), client.post(url, &query, &[])).await
//!         }
//!     }
//! });
//! ```

pub use relay_action as action;
pub use relay_http as http;

pub use relay_action::{
    dispatch_request, Action, ActionCreator, ActionError, AsyncAction, Dispatch, FnDispatcher,
    LifecycleCreators, LifecycleEvent, Phase, PhaseCreator, RecordingDispatcher,
};
pub use relay_http::{
    encode_query, ClientConfig, DefaultHeaders, Error, HttpClient, ResponseBody,
};
