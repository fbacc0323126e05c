use std::sync::Arc;

use serde::Serialize;
use url::Url;

use crate::config::ClientConfig;
use crate::decode::process_response;
use crate::error::Error;
use crate::executor::HttpExecutor;
use crate::headers::{merge, DefaultHeaders};
use crate::types::{HttpRequest, Method, ResponseBody};

/// JSON-speaking HTTP client.
///
/// Each call makes exactly one attempt and resolves to a decoded
/// [`ResponseBody`] or an [`Error`]. There is no retry and no timeout
/// unless the underlying reqwest client was configured with one.
///
/// | call     | `Content-Type: application/json` | default headers | call headers | JSON body |
/// |----------|----------------------------------|-----------------|--------------|-----------|
/// | `get`    |                                  | yes             |              |           |
/// | `post`   | yes                              | yes             | yes          | yes       |
/// | `put`    | yes                              | yes             | yes          | yes       |
/// | `delete` |                                  | yes             |              | yes       |
///
/// # Example
///
/// ```ignore
/// use relay_http::{ClientConfig, HttpClient};
///
/// let client = HttpClient::new(ClientConfig::new());
/// client.set_default_header("Authorization", "Bearer token")?;
///
/// let created = client
///     .post("https://api.example.com/returns", &json!({ "order": 7 }), &[("X-Request-Id", "r1")])
///     .await?;
/// ```
#[derive(Clone)]
pub struct HttpClient {
    default_headers: DefaultHeaders,
    executor: Arc<dyn HttpExecutor>,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            default_headers: config.default_headers,
            executor: config.executor,
        }
    }

    pub fn default_headers(&self) -> &DefaultHeaders {
        &self.default_headers
    }

    /// Insert or replace a header sent with every later request from this
    /// client and every client sharing its [`DefaultHeaders`].
    pub fn set_default_header(&self, name: &str, value: &str) -> Result<(), Error> {
        self.default_headers.set(name, value)
    }

    pub async fn get(&self, url: &str) -> Result<ResponseBody, Error> {
        self.send(Method::GET, url, None, false, &[]).await
    }

    pub async fn post<P: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &P,
        headers: &[(&str, &str)],
    ) -> Result<ResponseBody, Error> {
        let body = serde_json::to_value(payload)?;
        self.send(Method::POST, url, Some(body), true, headers).await
    }

    pub async fn put<P: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &P,
        headers: &[(&str, &str)],
    ) -> Result<ResponseBody, Error> {
        let body = serde_json::to_value(payload)?;
        self.send(Method::PUT, url, Some(body), true, headers).await
    }

    pub async fn delete<P: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &P,
    ) -> Result<ResponseBody, Error> {
        let body = serde_json::to_value(payload)?;
        self.send(Method::DELETE, url, Some(body), false, &[]).await
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
        json_content: bool,
        call_headers: &[(&str, &str)],
    ) -> Result<ResponseBody, Error> {
        let url = Url::parse(url)?;
        let headers = merge(&self.default_headers, json_content, call_headers)?;

        let mut request = HttpRequest::new(method, url).with_headers(headers);
        request.body = body;

        tracing::debug!(?method, url = %request.url, "sending request");
        let response = self.executor.execute(request).await?;
        tracing::debug!(
            status = response.status,
            content_type = response.content_type().unwrap_or(""),
            "received response"
        );

        process_response(response)
    }
}
