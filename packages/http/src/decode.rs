//! Content negotiation for received responses.
//!
//! Successful responses are decoded by content type:
//!
//! | content type                        | result               |
//! |-------------------------------------|----------------------|
//! | starts with `application/json`      | `ResponseBody::Json` |
//! | starts with `text/plain`            | `ResponseBody::Text` |
//! | `application/octet-stream`, xlsx    | `ResponseBody::Blob` |
//! | anything else, or missing           | `ResponseBody::Raw`  |
//!
//! Failed responses become an [`Error`]: JSON bodies yield
//! `"<status>::<message>"` (or just `"<status>"` for a falsy body), anything
//! else an empty error.

use serde_json::Value;

use crate::error::Error;
use crate::types::{HttpResponse, ResponseBody};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const TEXT_CONTENT_TYPE: &str = "text/plain";
pub const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";
pub const SPREADSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Decode a response, or turn a non-2xx response into an error.
pub fn process_response(response: HttpResponse) -> Result<ResponseBody, Error> {
    if !response.is_success() {
        return Err(process_error(&response));
    }

    let Some(content_type) = response.content_type() else {
        return Ok(ResponseBody::Raw(response));
    };

    if content_type.starts_with(JSON_CONTENT_TYPE) {
        Ok(ResponseBody::Json(serde_json::from_slice(&response.body)?))
    } else if content_type.starts_with(TEXT_CONTENT_TYPE) {
        Ok(ResponseBody::Text(
            String::from_utf8_lossy(&response.body).into_owned(),
        ))
    } else if content_type == OCTET_STREAM_CONTENT_TYPE || content_type == SPREADSHEET_CONTENT_TYPE
    {
        Ok(ResponseBody::Blob(response.body))
    } else {
        Ok(ResponseBody::Raw(response))
    }
}

fn process_error(response: &HttpResponse) -> Error {
    let status = response.status;
    let is_json = response
        .content_type()
        .is_some_and(|content_type| content_type.starts_with(JSON_CONTENT_TYPE));

    if !is_json {
        tracing::warn!(status, "request failed with a non-JSON body");
        return Error::Rejected { status };
    }

    let body: Value = match serde_json::from_slice(&response.body) {
        Ok(body) => body,
        Err(error) => {
            tracing::warn!(status, %error, "request failed with an unparseable JSON body");
            return Error::Json(error);
        }
    };

    let message = is_truthy(&body).then(|| message_field(&body));
    tracing::warn!(status, message = message.as_deref().unwrap_or(""), "request failed");
    Error::Status { status, message }
}

/// `null`, `false`, zero and the empty string are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The body's `message` field as text. A missing field renders empty;
/// non-string values render as JSON.
fn message_field(body: &Value) -> String {
    match body.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
