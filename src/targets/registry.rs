//! Adapter lookup table for the dispatch layer.

use std::collections::HashMap;
use std::sync::Arc;

use crate::types::target::EvalTargetType;

use super::source_adapter::SourceEvalTargetAdapter;

/// Registry of source adapters keyed by their discriminant.
///
/// The dispatch layer registers one adapter per [`EvalTargetType`] at wiring
/// time and routes every call through `adapter()`. Registering a second
/// adapter for the same type replaces the first.
#[derive(Default)]
pub struct SourceAdapterRegistry {
    adapters: HashMap<EvalTargetType, Arc<dyn SourceEvalTargetAdapter>>,
}

impl SourceAdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter under its own `eval_type()`.
    pub fn register(&mut self, adapter: Arc<dyn SourceEvalTargetAdapter>) {
        self.adapters.insert(adapter.eval_type(), adapter);
    }

    /// Look up the adapter owning `eval_type`.
    pub fn adapter(&self, eval_type: EvalTargetType) -> Option<Arc<dyn SourceEvalTargetAdapter>> {
        self.adapters.get(&eval_type).cloned()
    }

    /// The registered source kinds.
    pub fn types(&self) -> Vec<EvalTargetType> {
        self.adapters.keys().copied().collect()
    }
}
