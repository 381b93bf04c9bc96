use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use dashctl_core::Envelope;

use super::error::{ApiError, UnsupportedMethod};

/// The five verbs the dashboard API speaks. Anything else is rejected when
/// the method is constructed, so an unknown verb can never reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApiMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl ApiMethod {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            ApiMethod::Get => reqwest::Method::GET,
            ApiMethod::Post => reqwest::Method::POST,
            ApiMethod::Put => reqwest::Method::PUT,
            ApiMethod::Patch => reqwest::Method::PATCH,
            ApiMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// GET and DELETE carry no body; a payload passed with them is ignored.
    fn takes_payload(self) -> bool {
        matches!(self, ApiMethod::Post | ApiMethod::Put | ApiMethod::Patch)
    }
}

impl FromStr for ApiMethod {
    type Err = UnsupportedMethod;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "GET" => Ok(ApiMethod::Get),
            "POST" => Ok(ApiMethod::Post),
            "PUT" => Ok(ApiMethod::Put),
            "PATCH" => Ok(ApiMethod::Patch),
            "DELETE" => Ok(ApiMethod::Delete),
            _ => Err(UnsupportedMethod(value.to_string())),
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiMethod::Get => "GET",
            ApiMethod::Post => "POST",
            ApiMethod::Put => "PUT",
            ApiMethod::Patch => "PATCH",
            ApiMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Per-request controls. `headers` is for caller-managed concerns like the
/// bearer token; the dispatcher itself never injects auth.
#[derive(Debug, Clone, Default)]
pub(crate) struct RequestOptions {
    pub deadline: Option<Duration>,
    pub cancel: CancellationToken,
    pub headers: HeaderMap,
}

/// Sends one request to `base_url + path` and returns the decoded body.
/// The HTTP status is consumed here: 2xx yields the body envelope verbatim,
/// anything else is `ApiError::Status`. No retries, no caching.
pub(crate) async fn dispatch(
    client: &reqwest::Client,
    base_url: &str,
    method: ApiMethod,
    path: &str,
    payload: Option<serde_json::Value>,
    options: RequestOptions,
) -> Result<Envelope, ApiError> {
    let RequestOptions {
        deadline,
        cancel,
        headers,
    } = options;

    let url = format!("{base_url}{path}");
    let builder = client
        .request(method.as_reqwest(), &url)
        .headers(fixed_headers())
        .headers(headers);
    let builder = match payload {
        Some(payload) if method.takes_payload() => builder.json(&payload),
        _ => builder,
    };

    debug!(method = %method, url = %url, "http request");
    let start = std::time::Instant::now();
    let send = async {
        let response = builder.send().await?;
        debug!(
            method = %method,
            url = %url,
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        response.json::<Envelope>().await.map_err(ApiError::Decode)
    };

    match deadline {
        Some(deadline) => {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(ApiError::Cancelled),
                outcome = tokio::time::timeout(deadline, send) => {
                    outcome.unwrap_or(Err(ApiError::DeadlineExceeded))
                }
            }
        }
        None => {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(ApiError::Cancelled),
                outcome = send => outcome,
            }
        }
    }
}

// Fixed headers the dashboard API expects on every request.
fn fixed_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers
}
