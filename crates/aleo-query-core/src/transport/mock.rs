use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::QueryError;

use super::{HttpResponse, HttpTransport};

/// A mock node for testing. Serves canned responses keyed by full URL,
/// answers `404` for anything else, and records every requested URL.
pub struct MockTransport {
    routes: HashMap<String, HttpResponse>,
    delay: Option<Duration>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            routes: HashMap::new(),
            delay: None,
        }
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log lock").clone()
    }
}

pub struct MockTransportBuilder {
    routes: HashMap<String, HttpResponse>,
    delay: Option<Duration>,
}

impl MockTransportBuilder {
    pub fn with_body(self, url: &str, body: &str) -> Self {
        self.with_status(url, 200, body)
    }

    pub fn with_status(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            url.to_owned(),
            HttpResponse {
                status,
                body: body.to_owned(),
            },
        );
        self
    }

    /// Hold every response for `delay` to simulate a slow node.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            routes: self.routes,
            delay: self.delay,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, QueryError> {
        self.requests
            .lock()
            .expect("request log lock")
            .push(url.to_owned());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        Ok(self.routes.get(url).cloned().unwrap_or(HttpResponse {
            status: 404,
            body: "Not Found".to_owned(),
        }))
    }
}
