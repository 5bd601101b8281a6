//! Pluggable evaluation-target sources.
//!
//! The contract every source must satisfy lives in [`source_adapter`];
//! concrete adapters live under [`sources`], one module per source kind,
//! and are wired into a [`registry::SourceAdapterRegistry`] for dispatch.
//!
//! # Available sources
//!
//! | Source | Module |
//! |--------|--------|
//! | Dify workflow | [`sources::dify_workflow`] |

pub mod registry;
pub mod source_adapter;
pub mod sources;

pub use registry::SourceAdapterRegistry;
pub use source_adapter::{
    BuildOptions, ExecuteOutcome, ExecuteTargetParam, ListSourceParam, ListSourceVersionParam,
    SourceEvalTargetAdapter, SourceListing, SourceVersionListing, OUTPUT_SCHEMA_KEY,
};
