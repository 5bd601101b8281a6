//! Canonical evaluation-target data model.
//!
//! An [`EvalTarget`] identifies one configured target instance inside a
//! space; its single active [`EvalTargetVersion`] carries the source-specific
//! configuration payload together with the declared input/output slot
//! schemas. These objects are pure data: adapters construct them fresh on
//! every build and callers treat them as read-only afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::content::ContentType;

// ---------------------------------------------------------------------------
// Discriminants
// ---------------------------------------------------------------------------

/// Which source adapter owns a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalTargetType {
    /// A Dify workflow invoked over HTTP in blocking mode.
    DifyWorkflow,
}

/// Caller-facing outcome of one execution attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvalTargetRunStatus {
    Success,
    Fail,
}

// ---------------------------------------------------------------------------
// Slot schema
// ---------------------------------------------------------------------------

/// Declaration of one named I/O slot.
///
/// `key` is unique within its schema list; `json_schema` documents the
/// expected shape of the slot's text payload and is not structurally
/// enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgsSchema {
    pub key: String,
    pub support_content_types: Vec<ContentType>,
    pub json_schema: Option<String>,
}

// ---------------------------------------------------------------------------
// Source-specific configuration payloads
// ---------------------------------------------------------------------------

/// Configuration of a Dify workflow used as an evaluation target.
#[derive(Clone, Serialize, Deserialize)]
pub struct DifyWorkflow {
    /// User-chosen display name for this target; mirrors the target's
    /// `source_target_id`.
    pub name: String,
    /// Credential for calling the workflow. Never serialized outward.
    #[serde(skip_serializing, default)]
    pub api_key: String,
    /// Optional free-form description.
    pub description: Option<String>,
}

// Keep the credential out of debug/log output as well.
impl std::fmt::Debug for DifyWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DifyWorkflow")
            .field("name", &self.name)
            .field("api_key", &"<redacted>")
            .field("description", &self.description)
            .finish()
    }
}

/// The closed set of per-source configuration payloads, keyed by
/// [`EvalTargetType`]: exactly one variant per source kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceConfig {
    DifyWorkflow(DifyWorkflow),
}

impl SourceConfig {
    /// The adapter discriminant this payload belongs to.
    pub fn eval_type(&self) -> EvalTargetType {
        match self {
            SourceConfig::DifyWorkflow(_) => EvalTargetType::DifyWorkflow,
        }
    }

    /// The Dify workflow payload, if this is one.
    pub fn as_dify_workflow(&self) -> Option<&DifyWorkflow> {
        match self {
            SourceConfig::DifyWorkflow(config) => Some(config),
        }
    }
}

// ---------------------------------------------------------------------------
// Audit metadata
// ---------------------------------------------------------------------------

/// Identity of an acting user; empty when unresolvable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_id: Option<String>,
}

impl UserInfo {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }
}

/// Creator/updater attribution and timestamps, set at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseInfo {
    pub created_by: UserInfo,
    pub updated_by: UserInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BaseInfo {
    /// Attribute both creation and last update to `user_id` as of now.
    pub fn now_by(user_id: &str) -> Self {
        let now = Utc::now();
        Self {
            created_by: UserInfo::new(user_id),
            updated_by: UserInfo::new(user_id),
            created_at: now,
            updated_at: now,
        }
    }
}

// ---------------------------------------------------------------------------
// Target and version
// ---------------------------------------------------------------------------

/// One versioned configuration of a target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalTargetVersion {
    /// Denormalized copy of the owning target's space.
    pub space_id: i64,
    /// Denormalized copy of the owning target's type.
    pub eval_target_type: EvalTargetType,
    /// Adapter-defined version token; a constant for sourceless adapters.
    pub source_target_version: String,
    /// Source-specific configuration payload.
    pub config: SourceConfig,
    /// Named slots the adapter accepts.
    pub input_schema: Vec<ArgsSchema>,
    /// Named slots the adapter produces.
    pub output_schema: Vec<ArgsSchema>,
    pub base_info: BaseInfo,
}

/// One configured evaluation-target instance with its single active version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalTarget {
    /// Tenant/workspace scope.
    pub space_id: i64,
    /// Adapter-specific identifier (a display name for the Dify adapter).
    pub source_target_id: String,
    pub eval_target_type: EvalTargetType,
    pub version: EvalTargetVersion,
    pub base_info: BaseInfo,
}
