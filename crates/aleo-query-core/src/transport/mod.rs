//! HTTP seam between the client and the node.
//!
//! [`HttpTransport`] performs one GET and returns the status and body
//! untouched; [`CallContext`] bounds that request with an optional deadline
//! and cancellation token.

mod context;
mod http;
#[cfg(test)]
pub mod mock;

pub use context::CallContext;
pub use http::ReqwestTransport;

use async_trait::async_trait;

use crate::error::QueryError;

/// Raw node response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal transport the client needs: a single GET with no request body.
///
/// Implementations must not retry and must not interpret the body.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, QueryError>;
}
