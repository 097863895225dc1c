use watchdeck_core::WireUpdate;

/// Lifecycle and payload events from the live feed connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// The socket is open; side effect only, no payload.
    Opened,
    /// One decoded update frame.
    Update(WireUpdate),
    /// The connection is gone for good; the handle emits nothing further.
    Closed { reason: Option<String> },
}

/// Why an outbound command failed. Commands are best-effort: the dispatcher
/// logs these and nobody retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("timeout")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("non-json response: {0}")]
    NonJsonResponse(String),
}

/// The configured base URL cannot carry a live feed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    #[error("unsupported base url scheme {0:?}")]
    UnsupportedScheme(String),
}
