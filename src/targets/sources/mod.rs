//! Concrete source adapter implementations, one module per source kind.

pub mod dify_workflow;

pub use dify_workflow::DifyWorkflowAdapter;
