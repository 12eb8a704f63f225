// ABOUTME: In-process HTTP driver for router tests
// ABOUTME: Builds requests, runs them through tower's oneshot, and decodes JSON replies

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tower::ServiceExt;

/// A request under construction
pub struct AxumTestRequest {
    builder: axum::http::request::Builder,
    body: Body,
}

impl AxumTestRequest {
    fn with_method(method: Method, uri: &str) -> Self {
        Self {
            builder: Request::builder().method(method).uri(uri),
            body: Body::empty(),
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::with_method(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::with_method(Method::POST, uri)
    }

    pub fn put(uri: &str) -> Self {
        Self::with_method(Method::PUT, uri)
    }

    pub fn delete(uri: &str) -> Self {
        Self::with_method(Method::DELETE, uri)
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Serialize `payload` as the JSON body
    pub fn json<T: Serialize>(self, payload: &T) -> Self {
        let body = serde_json::to_vec(payload).expect("payload should serialize");
        self.raw_body(body)
    }

    /// Send `body` verbatim with a JSON content type
    pub fn raw_json(self, body: &str) -> Self {
        self.raw_body(body.as_bytes().to_vec())
    }

    fn raw_body(mut self, body: Vec<u8>) -> Self {
        self.builder = self.builder.header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self.body = Body::from(body);
        self
    }

    /// Run the request through `app`
    pub async fn send(self, app: Router) -> AxumTestResponse {
        let request = self.builder.body(self.body).expect("request should build");
        let response = app.oneshot(request).await.expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body should be readable")
            .to_vec();

        AxumTestResponse {
            status,
            headers,
            body,
        }
    }
}

/// A buffered response
pub struct AxumTestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl AxumTestResponse {
    pub const fn status(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn header(&self, key: &str) -> Option<String> {
        self.headers
            .get(key)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    pub fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "response is not the expected JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    /// `error.code` from an error envelope
    pub fn error_code(self) -> String {
        let body: Value = self.json();
        body["error"]["code"]
            .as_str()
            .expect("response should carry an error code")
            .to_owned()
    }

    pub fn text(self) -> String {
        String::from_utf8(self.body).expect("response body should be UTF-8")
    }
}
