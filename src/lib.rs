//! # evaltarget
//!
//! A pluggable mechanism for executing evaluation targets — callable units
//! (models, workflows, agents) whose behavior is being measured — regardless
//! of where the target's definition and credentials come from.
//!
//! Each source kind plugs in a [`targets::SourceEvalTargetAdapter`]
//! implementation that builds a canonical [`types::EvalTarget`] descriptor
//! from source-specific identifiers, gates caller input against the target's
//! declared schema, invokes the underlying service, and normalizes the raw
//! response into the canonical output shape. The dispatch layer routes calls
//! through a [`targets::SourceAdapterRegistry`] keyed by
//! [`types::EvalTargetType`].
//!
//! The reference adapter, [`targets::sources::DifyWorkflowAdapter`], wraps a
//! Dify workflow behind a single blocking HTTP call.

pub mod context;
pub mod targets;
pub mod types;
pub mod utilities;

pub use context::ExecutionContext;
pub use targets::source_adapter::{
    BuildOptions, ExecuteOutcome, ExecuteTargetParam, SourceEvalTargetAdapter, OUTPUT_SCHEMA_KEY,
};
pub use targets::sources::DifyWorkflowAdapter;
pub use targets::SourceAdapterRegistry;
pub use types::{
    Content, ContentFormat, ContentType, EvalTarget, EvalTargetInputData, EvalTargetOutputData,
    EvalTargetRunStatus, EvalTargetType, EvalTargetUsage, EvalTargetVersion,
};
pub use utilities::config::{ConfigReader, MapConfig};
pub use utilities::errors::TargetError;
