//! Shared data types for the evaluation-target core.

pub mod content;
pub mod target;
pub mod usage_metrics;

pub use content::{Content, ContentFormat, ContentType, EvalTargetInputData, EvalTargetOutputData};
pub use target::{
    ArgsSchema, BaseInfo, DifyWorkflow, EvalTarget, EvalTargetRunStatus, EvalTargetType,
    EvalTargetVersion, SourceConfig, UserInfo,
};
pub use usage_metrics::EvalTargetUsage;
