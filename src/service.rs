use reqwest::{Client, Method};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;
use url::Url;

use crate::error::ServiceError;

/// Fallback message when a failed response carries no usable error body.
const GENERIC_FAILURE: &str = "Request failed";

/// Error envelope the backend returns on non-success statuses: `{ message }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Thin backend client: one request in, exactly one normalized outcome out.
///
/// Transport failures, non-success statuses, and undecodable bodies all
/// surface as a [`ServiceError`]; nothing is retried here. Retry policy, if
/// any, belongs to the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self {
            http: Client::new(),
            base,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Issue one request against `base + endpoint` and await the exchange.
    ///
    /// `payload` is JSON-encoded for POST and PUT and ignored for other
    /// methods. Every failure passes through the operational log before it is
    /// returned; the returned value is unchanged by that.
    pub async fn call(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<Value, ServiceError> {
        let fail = |err: ServiceError| {
            warn!("{method} {endpoint} failed ({}): {err}", err.kind());
            err
        };

        let url = match self.endpoint_url(endpoint) {
            Ok(url) => url,
            Err(e) => return Err(fail(e)),
        };

        let mut request = self.http.request(method.clone(), url);
        if matches!(method, Method::POST | Method::PUT) {
            if let Some(body) = payload {
                request = request.json(body);
            }
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(fail(ServiceError::Transport(e.to_string()))),
        };

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|body| body.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            return Err(fail(ServiceError::Api(message)));
        }

        match response.json::<Value>().await {
            Ok(body) => Ok(body),
            Err(e) => Err(fail(ServiceError::MalformedResponse(e.to_string()))),
        }
    }

    pub async fn get(&self, endpoint: &str) -> Result<Value, ServiceError> {
        self.call(Method::GET, endpoint, None).await
    }

    pub async fn post(&self, endpoint: &str, payload: &Value) -> Result<Value, ServiceError> {
        self.call(Method::POST, endpoint, Some(payload)).await
    }

    pub async fn put(&self, endpoint: &str, payload: &Value) -> Result<Value, ServiceError> {
        self.call(Method::PUT, endpoint, Some(payload)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Value, ServiceError> {
        self.call(Method::DELETE, endpoint, None).await
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, ServiceError> {
        let raw = format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            endpoint.trim_start_matches('/'),
        );
        Url::parse(&raw)
            .map_err(|e| ServiceError::Transport(format!("invalid request URL {raw}: {e}")))
    }
}
