use std::future::{pending, Future};
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::error::QueryError;

/// Caller-supplied bounds for a single query.
///
/// The default context is unbounded: no deadline and no cancellation, which
/// leaves latency to the OS-level socket defaults.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
    cancel: Option<CancellationToken>,
}

impl CallContext {
    pub fn background() -> Self {
        Self::default()
    }

    /// Deadline `timeout` from now. An unrepresentable instant leaves the
    /// context unbounded.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Fail fast when the context has already fired.
    pub fn check(&self, url: &str) -> Result<(), QueryError> {
        if self.is_cancelled() {
            return Err(QueryError::Cancelled {
                url: url.to_owned(),
            });
        }
        if self.deadline.is_some_and(|deadline| deadline <= Instant::now()) {
            return Err(QueryError::DeadlineExceeded {
                url: url.to_owned(),
            });
        }
        Ok(())
    }

    /// Drive `request` to completion unless the token fires or the deadline
    /// passes first, in which case `request` is dropped mid-flight.
    pub async fn run<F, T>(&self, url: &str, request: F) -> Result<T, QueryError>
    where
        F: Future<Output = Result<T, QueryError>>,
    {
        self.check(url)?;

        let cancelled = async {
            match &self.cancel {
                Some(token) => token.cancelled().await,
                None => pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = cancelled => Err(QueryError::Cancelled { url: url.to_owned() }),
            () = expired => Err(QueryError::DeadlineExceeded { url: url.to_owned() }),
            result = request => result,
        }
    }
}
