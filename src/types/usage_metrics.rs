//! Usage accounting for evaluation-target executions.

use serde::{Deserialize, Serialize};

/// Cost/usage reported by one target execution.
///
/// Adapters whose wrapped system reports no usable metrics return the
/// zero value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalTargetUsage {
    /// Tokens consumed by the input side of the call.
    pub input_tokens: i64,
    /// Tokens produced by the output side of the call.
    pub output_tokens: i64,
}

impl EvalTargetUsage {
    /// Create a new zero-valued usage record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add usage from another record.
    pub fn add_usage(&mut self, other: &EvalTargetUsage) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
    }
}
