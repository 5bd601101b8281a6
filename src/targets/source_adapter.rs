//! The source adapter contract.
//!
//! Every pluggable source kind implements [`SourceEvalTargetAdapter`], so the
//! dispatch layer can treat all sources uniformly: identify the type, build a
//! canonical target from source identifiers, gate caller input, execute, and
//! optionally enumerate/enrich source metadata. Adapters are stateless
//! between calls; the shared HTTP client and configuration reader are
//! injected at construction.

use async_trait::async_trait;

use crate::context::ExecutionContext;
use crate::types::content::{EvalTargetInputData, EvalTargetOutputData};
use crate::types::target::{
    ArgsSchema, EvalTarget, EvalTargetRunStatus, EvalTargetType, EvalTargetVersion,
};
use crate::utilities::errors::TargetError;

/// Canonical key of the single output slot shared by all sources.
pub const OUTPUT_SCHEMA_KEY: &str = "actual_output";

// ---------------------------------------------------------------------------
// Operation parameters
// ---------------------------------------------------------------------------

/// Optional knobs accepted by `build_by_source`.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Free-form description attached to the source configuration.
    pub description: Option<String>,
}

/// Identifies what to run and with which input.
#[derive(Debug, Clone)]
pub struct ExecuteTargetParam {
    /// Adapter-specific identifier of the target.
    pub source_target_id: String,
    /// Adapter-defined version token (the API credential for the Dify
    /// adapter).
    pub source_target_version: String,
    pub input: EvalTargetInputData,
}

/// Filter for listing targets of one source kind.
#[derive(Debug, Clone, Default)]
pub struct ListSourceParam {
    pub space_id: i64,
    pub keyword: Option<String>,
    pub page_size: Option<i32>,
    pub page_token: Option<String>,
}

/// Filter for listing the versions of one source target.
#[derive(Debug, Clone, Default)]
pub struct ListSourceVersionParam {
    pub space_id: i64,
    pub source_target_id: String,
    pub page_size: Option<i32>,
    pub page_token: Option<String>,
}

/// One page of targets from a browsable source catalog.
#[derive(Debug, Clone, Default)]
pub struct SourceListing {
    pub targets: Vec<EvalTarget>,
    pub next_page_token: Option<String>,
    pub has_more: bool,
}

/// One page of versions from a browsable source catalog.
#[derive(Debug, Clone, Default)]
pub struct SourceVersionListing {
    pub versions: Vec<EvalTargetVersion>,
    pub next_page_token: Option<String>,
    pub has_more: bool,
}

// ---------------------------------------------------------------------------
// Execution outcome
// ---------------------------------------------------------------------------

/// The paired result of one execution attempt.
///
/// The run status is always present and is the caller-facing signal; the
/// error carries diagnostic detail. Fields are private so the pair can never
/// disagree: `Success` always holds an output, `Fail` always holds an error.
#[derive(Debug)]
pub struct ExecuteOutcome {
    status: EvalTargetRunStatus,
    result: Result<EvalTargetOutputData, TargetError>,
}

impl ExecuteOutcome {
    /// A successful run with its normalized output.
    pub fn success(output: EvalTargetOutputData) -> Self {
        Self {
            status: EvalTargetRunStatus::Success,
            result: Ok(output),
        }
    }

    /// A failed run with its diagnostic error.
    pub fn fail(error: TargetError) -> Self {
        Self {
            status: EvalTargetRunStatus::Fail,
            result: Err(error),
        }
    }

    pub fn status(&self) -> EvalTargetRunStatus {
        self.status
    }

    pub fn output(&self) -> Option<&EvalTargetOutputData> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&TargetError> {
        self.result.as_ref().err()
    }

    pub fn into_result(self) -> Result<EvalTargetOutputData, TargetError> {
        self.result
    }
}

impl From<Result<EvalTargetOutputData, TargetError>> for ExecuteOutcome {
    fn from(result: Result<EvalTargetOutputData, TargetError>) -> Self {
        match result {
            Ok(output) => Self::success(output),
            Err(error) => Self::fail(error),
        }
    }
}

// ---------------------------------------------------------------------------
// SourceEvalTargetAdapter trait
// ---------------------------------------------------------------------------

/// The operation surface every source adapter must implement.
///
/// Listing/enrichment operations have default no-op implementations: a
/// source without a queryable backing catalog returns empty results,
/// signaling "not dynamically browsable", never an error.
#[async_trait]
pub trait SourceEvalTargetAdapter: Send + Sync {
    /// The adapter's discriminant. Pure and constant.
    fn eval_type(&self) -> EvalTargetType;

    /// Syntactic gate on caller-supplied input against the target's declared
    /// input schema. Must not mutate `input`. Adapters with no rules accept
    /// everything.
    async fn validate_input(
        &self,
        ctx: &ExecutionContext,
        space_id: i64,
        input_schema: &[ArgsSchema],
        input: &EvalTargetInputData,
    ) -> Result<(), TargetError>;

    /// Deterministically materialize a canonical target from source-specific
    /// identifiers. Fails with an invalid-parameter error when required
    /// identifiers are missing or malformed.
    async fn build_by_source(
        &self,
        ctx: &ExecutionContext,
        space_id: i64,
        source_target_id: &str,
        source_target_version: &str,
        opts: BuildOptions,
    ) -> Result<EvalTarget, TargetError>;

    /// Invoke the wrapped target once and normalize its response. One atomic
    /// attempt: no retries, no partial completion.
    async fn execute(
        &self,
        ctx: &ExecutionContext,
        space_id: i64,
        param: &ExecuteTargetParam,
    ) -> ExecuteOutcome;

    /// Enumerate targets from the source's backing catalog, if browsable.
    async fn list_source(
        &self,
        _ctx: &ExecutionContext,
        _param: &ListSourceParam,
    ) -> Result<SourceListing, TargetError> {
        Ok(SourceListing::default())
    }

    /// Enumerate versions of one source target, if browsable.
    async fn list_source_version(
        &self,
        _ctx: &ExecutionContext,
        _param: &ListSourceVersionParam,
    ) -> Result<SourceVersionListing, TargetError> {
        Ok(SourceVersionListing::default())
    }

    /// Bulk-enrich targets with source metadata.
    async fn pack_source_info(
        &self,
        _ctx: &ExecutionContext,
        _space_id: i64,
        _targets: &mut [EvalTarget],
    ) -> Result<(), TargetError> {
        Ok(())
    }

    /// Bulk-enrich target versions with source metadata.
    async fn pack_source_version_info(
        &self,
        _ctx: &ExecutionContext,
        _space_id: i64,
        _targets: &mut [EvalTarget],
    ) -> Result<(), TargetError> {
        Ok(())
    }
}
