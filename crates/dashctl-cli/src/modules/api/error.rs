use thiserror::Error;

/// Everything that can go wrong with a single dispatched request. Transport
/// failures keep the underlying error; body-level failures (`status: false`
/// envelopes) are not errors at this layer and stay with the caller.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("response body is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("request deadline exceeded")]
    DeadlineExceeded,
    #[error("request cancelled")]
    Cancelled,
}

#[derive(Debug, Error)]
#[error("unsupported method '{0}', expected one of GET, POST, PUT, PATCH, DELETE")]
pub(crate) struct UnsupportedMethod(pub String);
