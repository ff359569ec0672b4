//! Backend HTTP client implementation.

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::api::endpoints::ApiErrorResponse;
use crate::auth::AccessToken;
use crate::error::{ApiError, AuthError, Error};
use crate::types::BaseUrl;

/// A pending outbound call: method, endpoint path, query, and body.
///
/// Descriptors are retained by the caller so a request that failed with
/// 401 can be replayed once after a token refresh.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    method: Method,
    path: &'static str,
    query: Option<Value>,
    body: Option<Value>,
}

impl ApiRequest {
    pub(crate) fn get(path: &'static str) -> Self {
        Self {
            method: Method::GET,
            path,
            query: None,
            body: None,
        }
    }

    pub(crate) fn post(path: &'static str) -> Self {
        Self {
            method: Method::POST,
            path,
            query: None,
            body: None,
        }
    }

    pub(crate) fn delete(path: &'static str) -> Self {
        Self {
            method: Method::DELETE,
            path,
            query: None,
            body: None,
        }
    }

    pub(crate) fn with_query(mut self, query: Value) -> Self {
        self.query = Some(query);
        self
    }

    pub(crate) fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the endpoint path this request targets.
    pub(crate) fn path(&self) -> &'static str {
        self.path
    }
}

/// HTTP client for backend REST requests.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    client: reqwest::Client,
    base: BaseUrl,
}

impl ApiClient {
    /// Create a new client for the given backend.
    pub(crate) fn new(base: BaseUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quizroom/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the base URL this client is configured for.
    pub(crate) fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Dispatch a request, attaching a bearer credential when one is given.
    ///
    /// The token is attached only when present and non-empty; without one
    /// the request proceeds unauthenticated. Transport failures map to
    /// [`TransportError`](crate::error::TransportError); the response is
    /// returned regardless of status so the caller can apply its retry
    /// policy before the body is consumed.
    #[instrument(skip(self, token), fields(base = %self.base, path = request.path))]
    pub(crate) async fn dispatch(
        &self,
        request: &ApiRequest,
        token: Option<&AccessToken>,
    ) -> Result<reqwest::Response, Error> {
        let url = self.base.endpoint(request.path);
        debug!(method = %request.method, "API request");
        trace!(query = ?request.query, "query parameters");

        let mut builder = self.client.request(request.method.clone(), &url);

        if let Some(ref query) = request.query {
            builder = builder.query(query);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        } else {
            builder = builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
                .map_err(|_| AuthError::MalformedToken)?;
            builder = builder.header(AUTHORIZATION, value);
        }

        Ok(builder.send().await?)
    }

    /// Deserialize a successful response body, or parse the error body.
    pub(crate) async fn json_body<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            Err(Error::Api(parse_error_response(response).await))
        }
    }

    /// Check a response for success, discarding any body.
    pub(crate) async fn expect_success(&self, response: reqwest::Response) -> Result<(), Error> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Api(parse_error_response(response).await))
        }
    }
}

/// Parse a backend error response body.
async fn parse_error_response(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();

    // Try to parse as the backend error format
    match response.json::<ApiErrorResponse>().await {
        Ok(error_body) => ApiError::new(status, error_body.error, error_body.message),
        Err(_) => ApiError::new(status, None, None),
    }
}
