/// Errors returned by the transport client.
///
/// Non-2xx responses surface as [`Error::Status`] or [`Error::Rejected`];
/// their `Display` output is the message a caller would show or forward:
///
/// ```text
/// Status { 404, Some("not found") }  ->  "404::not found"
/// Status { 500, None }               ->  "500"
/// Rejected { 502 }                   ->  ""
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Non-2xx response with a JSON body.
    #[error("{}", status_message(.status, .message))]
    Status { status: u16, message: Option<String> },

    /// Non-2xx response whose body is not JSON.
    #[error("")]
    Rejected { status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Failure inside a non-reqwest executor.
    #[error("Executor error: {message}")]
    Executor { message: String },
}

impl Error {
    /// HTTP status of a failed response, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } | Error::Rejected { status } => Some(*status),
            _ => None,
        }
    }
}

fn status_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("{status}::{message}"),
        None => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let error = Error::Status {
            status: 404,
            message: Some("not found".to_string()),
        };
        assert_eq!(error.to_string(), "404::not found");
        assert_eq!(error.status(), Some(404));

        let bare = Error::Status {
            status: 500,
            message: None,
        };
        assert_eq!(bare.to_string(), "500");
    }

    #[test]
    fn test_rejected_has_empty_message() {
        let error = Error::Rejected { status: 502 };
        assert_eq!(error.to_string(), "");
        assert_eq!(error.status(), Some(502));
    }
}
