//! # relay-http
//!
//! A JSON-speaking HTTP client that decodes responses by content type and
//! reduces every failure to one error shape.
//!
//! ```ignore
//! use relay_http::{ClientConfig, HttpClient, ResponseBody};
//!
//! let client = HttpClient::new(ClientConfig::from_env()?);
//! client.set_default_header("X-Trace", "abc")?;
//!
//! match client.get("https://api.example.com/report").await {
//!     Ok(ResponseBody::Json(value)) => { /* parsed */ }
//!     Ok(ResponseBody::Text(text)) => { /* text/plain */ }
//!     Ok(ResponseBody::Blob(bytes)) => { /* octet-stream or spreadsheet */ }
//!     Ok(ResponseBody::Raw(response)) => { /* anything else */ }
//!     Err(error) => {
//!         // "404::not found", "500", or "" for non-JSON failures
//!         eprintln!("{error}");
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod executor;
pub mod headers;
pub mod query;
pub mod types;

pub use client::HttpClient;
pub use config::ClientConfig;
pub use error::Error;
pub use executor::{HttpExecutor, ReqwestExecutor};
pub use headers::DefaultHeaders;
pub use query::encode_query;
pub use types::{HttpRequest, HttpResponse, Method, ResponseBody};
