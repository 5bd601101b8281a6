//! Request-scoped execution context.
//!
//! Every adapter operation takes an [`ExecutionContext`] carrying the
//! already-resolved caller identity and an optional deadline. Identity is
//! read-only ambient data: an unauthenticated caller yields an empty
//! identity, never an error. Cancellation rides on the async runtime —
//! dropping an in-flight call aborts it — with the deadline applied at the
//! single network-call boundary.

use std::time::Duration;

/// Ambient per-request values threaded through adapter operations.
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    user_id: Option<String>,
    timeout: Option<Duration>,
}

impl ExecutionContext {
    /// An anonymous context with no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a resolved caller identity.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Attach a deadline for the outbound network call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The caller identity, or `""` if unauthenticated/unresolvable.
    pub fn user_id_or_empty(&self) -> &str {
        self.user_id.as_deref().unwrap_or("")
    }

    /// The network-call deadline, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
