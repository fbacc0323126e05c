//! HTTP execution abstraction for testing.
//!
//! This module provides a trait for sending an assembled request, so the
//! client's header merging and response decoding can be exercised without
//! a network.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Error;
use crate::types::{HttpRequest, HttpResponse};

/// Trait for executing HTTP requests.
///
/// One call, one attempt: implementations must not retry.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    /// Send the request and return the response as received, whatever its
    /// status.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// Production HTTP executor using reqwest.
#[derive(Debug, Clone, Default)]
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let method: http::Method = request.method.into();
        let mut req_builder = self
            .client
            .request(method, request.url)
            .headers(request.headers);

        if let Some(body) = &request.body {
            req_builder = req_builder.body(serde_json::to_vec(body)?);
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.to_string(), v.to_string());
            }
        }

        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockExecutor;
    use super::*;
    use crate::types::Method;
    use url::Url;

    fn get(url: &str) -> HttpRequest {
        HttpRequest::new(Method::GET, Url::parse(url).unwrap())
    }

    #[tokio::test]
    async fn mock_executor_returns_configured_response() {
        let executor = MockExecutor::new().with_response(
            "/test",
            MockExecutor::json_response(200, serde_json::json!({"result": "success"})),
        );

        let result = executor.execute(get("http://localhost/test")).await.unwrap();

        assert_eq!(result.status, 200);
        assert_eq!(result.content_type(), Some("application/json"));
    }

    #[tokio::test]
    async fn mock_executor_returns_404_when_no_match() {
        let executor = MockExecutor::new();
        let result = executor.execute(get("http://localhost/unknown")).await.unwrap();

        assert_eq!(result.status, 404);
    }

    #[tokio::test]
    async fn mock_executor_fails_when_configured() {
        let executor = MockExecutor::new().fail_with("Network error");
        let result = executor.execute(get("http://localhost/any")).await;

        assert!(matches!(result, Err(Error::Executor { message }) if message == "Network error"));
    }

    #[tokio::test]
    async fn mock_executor_records_requests() {
        let executor = MockExecutor::new();

        executor.execute(get("http://localhost/first")).await.unwrap();
        executor
            .execute(HttpRequest::new(
                Method::DELETE,
                Url::parse("http://localhost/second").unwrap(),
            ))
            .await
            .unwrap();

        let recorded = executor.recorded_requests();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].url.path(), "/first");
        assert_eq!(recorded[0].method, Method::GET);
        assert_eq!(recorded[1].method, Method::DELETE);
    }
}
