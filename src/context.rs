// src/context.rs
//! Per-request context carried explicitly through every layer.
//!
//! The HTTP middleware creates one [`RequestContext`] per inbound request; the
//! usecase and store layers receive it by reference and use it to correlate
//! their log events and to honour the request deadline.

use std::fmt;
use std::time::Duration;
use tokio::time::Instant;
use uuid::Uuid;

/// Opaque per-request identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RequestId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    request_id: Option<RequestId>,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id: Some(request_id),
            deadline: None,
        }
    }

    /// Context with neither an id nor a deadline, for callers outside a request.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// The correlation id, or `""` when none was attached. A missing id is
    /// logged but never aborts the request.
    pub fn request_id(&self) -> &str {
        match &self.request_id {
            Some(id) => id.as_str(),
            None => {
                tracing::warn!("request id not found in context");
                ""
            }
        }
    }

    pub fn try_request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
