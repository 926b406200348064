use async_trait::async_trait;

use crate::error::QueryError;

use super::{HttpResponse, HttpTransport};

/// `reqwest`-backed transport.
///
/// Built without a client-level timeout and with idle pooling disabled, so
/// every query opens and completes its own connection. Bounding latency is
/// the caller's job via [`CallContext`](super::CallContext).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, QueryError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| QueryError::InvalidConfig(format!("build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, QueryError> {
        let transport_error = |source| QueryError::Transport {
            url: url.to_owned(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(transport_error)?;
        let body = body_from_bytes(bytes.to_vec())?;

        Ok(HttpResponse { status, body })
    }
}

/// Strict UTF-8 body conversion. Invalid bytes are reported, not replaced.
fn body_from_bytes(bytes: Vec<u8>) -> Result<String, QueryError> {
    String::from_utf8(bytes).map_err(|e| {
        let reason = format!("invalid UTF-8: {}", e.utf8_error());
        QueryError::MalformedScalar {
            target: "response body",
            body: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            reason,
        }
    })
}
