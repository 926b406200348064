/// Errors surfaced by [`LedgerClient`](crate::client::LedgerClient) operations.
///
/// Every failure is returned to the caller as-is: the client never retries,
/// never substitutes a fallback value, and never logs-and-swallows.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Connection, DNS, TLS, or body-read failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The node answered with a non-success HTTP status.
    #[error("node returned HTTP {status} for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// The body did not match the structured shape expected by the operation.
    #[error("decode {target} failed: {source}; body={body}")]
    Decode {
        target: &'static str,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// A scalar body was empty or could not be interpreted.
    #[error("malformed {target} scalar `{body}`: {reason}")]
    MalformedScalar {
        target: &'static str,
        body: String,
        reason: String,
    },

    #[error("request to {url} was cancelled")]
    Cancelled { url: String },

    #[error("request to {url} exceeded its deadline")]
    DeadlineExceeded { url: String },

    /// Rejected client configuration. Only produced at construction.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl QueryError {
    /// HTTP status carried by a [`QueryError::Status`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the caller's context aborted the request.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Cancelled { .. } | Self::DeadlineExceeded { .. })
    }
}
