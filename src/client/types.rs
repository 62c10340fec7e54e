use std::time::Duration;

use crate::error::{AggregateError, KvError, SocketFailure};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// `host:port` of the router.
    pub router: String,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(router: impl Into<String>) -> Self {
        Self {
            router: router.into(),
            request_timeout: None,
        }
    }
}

/// Result of a cluster-wide length query.
///
/// `total` sums every server that answered. Servers that could not be reached or returned an
/// error are listed in `failures` and contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthReport {
    pub total: usize,
    pub failures: Vec<SocketFailure>,
}

impl LengthReport {
    /// True when every server answered.
    pub fn is_exact(&self) -> bool {
        self.failures.is_empty()
    }

    /// The exact total, or `KvError::Aggregate` carrying the partial total and the failures.
    pub fn into_result(self) -> Result<usize, KvError> {
        if self.failures.is_empty() {
            Ok(self.total)
        } else {
            Err(KvError::Aggregate(AggregateError {
                total: self.total,
                failures: self.failures,
            }))
        }
    }
}
