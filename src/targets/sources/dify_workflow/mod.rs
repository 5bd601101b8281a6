//! Dify workflow source adapter.
//!
//! Treats a user-chosen display name as the source identifier and the Dify
//! API credential as the source version. Dify has no version concept of its
//! own, so `build_by_source` synthesizes a single fixed version with one
//! text/JSON input slot and one text/JSON output slot, and `execute` issues
//! one blocking HTTP call to the workflow-run endpoint, normalizing the
//! response into the canonical output shape.
//!
//! The adapter is stateless: it rebuilds the canonical target from the
//! execution parameter on every call and holds only the injected HTTP client
//! and configuration reader, both safe for unlimited concurrent use.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::context::ExecutionContext;
use crate::targets::source_adapter::{
    BuildOptions, ExecuteOutcome, ExecuteTargetParam, SourceEvalTargetAdapter, OUTPUT_SCHEMA_KEY,
};
use crate::types::content::{Content, ContentType, EvalTargetInputData, EvalTargetOutputData};
use crate::types::target::{
    ArgsSchema, BaseInfo, DifyWorkflow, EvalTarget, EvalTargetType, EvalTargetVersion,
    SourceConfig,
};
use crate::utilities::config::ConfigReader;
use crate::utilities::errors::TargetError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Configuration key holding the Dify endpoint base address.
pub const DIFY_HOST_CONFIG_KEY: &str = "evaluation.dify.host";

/// Endpoint base used when configuration leaves the host unset.
pub const DEFAULT_DIFY_HOST: &str = "http://8.130.124.150";

/// Key of the single input slot the adapter accepts.
pub const INPUT_SCHEMA_KEY: &str = "input";

/// Fixed version token: Dify configurations have no version concept.
pub const DIFY_SOURCE_VERSION: &str = "v1.0";

const WORKFLOW_RUN_PATH: &str = "/v1/workflows/run";

// ---------------------------------------------------------------------------
// Wire types (Dify blocking mode)
// ---------------------------------------------------------------------------

/// Request body for a blocking workflow run. The caller's input JSON is
/// embedded verbatim as `inputs`.
#[derive(Debug, Serialize)]
struct DifyRunRequest {
    inputs: Box<RawValue>,
    response_mode: &'static str,
    user: String,
}

/// Response envelope of a blocking workflow run.
#[derive(Debug, Deserialize)]
struct DifyRunResponse {
    #[serde(default)]
    task_id: String,
    #[serde(default)]
    workflow_run_id: String,
    data: DifyRunData,
}

#[derive(Debug, Deserialize)]
struct DifyRunData {
    #[serde(default)]
    id: String,
    #[serde(default)]
    workflow_id: String,
    #[serde(default)]
    status: String,
    /// Opaque JSON produced by the workflow; kept raw for verbatim
    /// passthrough.
    outputs: Option<Box<RawValue>>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    elapsed_time: f64,
    #[serde(default)]
    total_tokens: i64,
    #[serde(default)]
    total_steps: i64,
    #[serde(default)]
    created_at: i64,
    #[serde(default)]
    finished_at: i64,
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

/// Source adapter executing Dify workflows over HTTP in blocking mode.
pub struct DifyWorkflowAdapter {
    http: reqwest::Client,
    config: Arc<dyn ConfigReader>,
}

impl DifyWorkflowAdapter {
    /// Create an adapter sharing `http` across all calls.
    pub fn new(http: reqwest::Client, config: Arc<dyn ConfigReader>) -> Self {
        Self { http, config }
    }

    /// The workflow-run URL, from configuration or the default host.
    fn run_url(&self) -> String {
        let host = self.config.get_string(DIFY_HOST_CONFIG_KEY);
        let host = if host.is_empty() {
            DEFAULT_DIFY_HOST.to_string()
        } else {
            host
        };
        format!("{}{}", host, WORKFLOW_RUN_PATH)
    }

    /// One blocking run: request construction, HTTP call, response decoding
    /// and canonical output assembly. Exactly one attempt.
    async fn run_workflow(
        &self,
        ctx: &ExecutionContext,
        space_id: i64,
        param: &ExecuteTargetParam,
    ) -> Result<EvalTargetOutputData, TargetError> {
        let target = self
            .build_by_source(
                ctx,
                space_id,
                &param.source_target_id,
                &param.source_target_version,
                BuildOptions::default(),
            )
            .await?;

        let workflow = target
            .version
            .config
            .as_dify_workflow()
            .ok_or_else(|| {
                TargetError::invalid_param("dify workflow config not found in eval target version")
            })?;
        let api_key = workflow.api_key.as_str();
        if api_key.is_empty() {
            return Err(TargetError::invalid_param("dify api key is empty"));
        }

        let url = self.run_url();

        // Default to an empty JSON object when the input slot is absent or
        // carries no text.
        let inputs_json = match param.input.field_text(INPUT_SCHEMA_KEY) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => "{}".to_string(),
        };
        let inputs = RawValue::from_string(inputs_json).map_err(|_| {
            TargetError::invalid_param("dify workflow input must be a valid json string")
        })?;

        let body = DifyRunRequest {
            inputs,
            response_mode: "blocking",
            user: format!("cozeloop_user_{}", space_id),
        };

        log::info!(
            "[dify-workflow] sending blocking run to {} for space {}",
            url,
            space_id
        );
        log::debug!("[dify-workflow] request inputs: {}", body.inputs.get());

        let mut request = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body);
        if let Some(timeout) = ctx.timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let response_body = response.text().await?;

        log::debug!(
            "[dify-workflow] received status {} with body: {}",
            status,
            response_body
        );

        if status != reqwest::StatusCode::OK {
            log::warn!("[dify-workflow] run failed with http status {}", status);
            return Err(TargetError::RemoteHttp {
                status: status.as_u16(),
                body: response_body,
            });
        }

        let envelope: DifyRunResponse =
            serde_json::from_str(&response_body).map_err(|source| {
                TargetError::MalformedResponse {
                    source,
                    body: response_body.clone(),
                }
            })?;

        if envelope.data.status != "succeeded" {
            return Err(TargetError::ExecutionFailed {
                status: envelope.data.status,
                message: envelope.data.error.unwrap_or_default(),
            });
        }

        log::debug!(
            "[dify-workflow] run {} (task {}) succeeded: workflow {}/{} in {:.3}s, {} tokens over {} steps ({} -> {})",
            envelope.workflow_run_id,
            envelope.task_id,
            envelope.data.workflow_id,
            envelope.data.id,
            envelope.data.elapsed_time,
            envelope.data.total_tokens,
            envelope.data.total_steps,
            envelope.data.created_at,
            envelope.data.finished_at,
        );

        // Normalize the opaque outputs to a valid JSON object string.
        let mut output_text = envelope
            .data
            .outputs
            .map(|raw| raw.get().to_string())
            .unwrap_or_default();
        if output_text.is_empty() || output_text == "null" {
            output_text = "{}".to_string();
        }

        Ok(EvalTargetOutputData::from_field(
            OUTPUT_SCHEMA_KEY,
            Content::json_text(output_text),
        ))
    }
}

#[async_trait]
impl SourceEvalTargetAdapter for DifyWorkflowAdapter {
    fn eval_type(&self) -> EvalTargetType {
        EvalTargetType::DifyWorkflow
    }

    async fn validate_input(
        &self,
        _ctx: &ExecutionContext,
        _space_id: i64,
        _input_schema: &[ArgsSchema],
        input: &EvalTargetInputData,
    ) -> Result<(), TargetError> {
        // Dify takes its inputs as one JSON document; only its syntactic
        // validity is checked here. An absent or empty slot is accepted and
        // defaults to "{}" at execution time.
        if let Some(text) = input.field_text(INPUT_SCHEMA_KEY) {
            if !text.is_empty() && serde_json::from_str::<&RawValue>(text).is_err() {
                return Err(TargetError::invalid_param(
                    "dify workflow input must be a valid json string",
                ));
            }
        }
        Ok(())
    }

    async fn build_by_source(
        &self,
        ctx: &ExecutionContext,
        space_id: i64,
        source_target_id: &str,
        source_target_version: &str,
        opts: BuildOptions,
    ) -> Result<EvalTarget, TargetError> {
        // The source identifier is the user-chosen display name; the source
        // version carries the API credential.
        let api_key = source_target_version;
        if api_key.is_empty() {
            return Err(TargetError::invalid_param("api key is required"));
        }
        let user_id = ctx.user_id_or_empty();

        Ok(EvalTarget {
            space_id,
            source_target_id: source_target_id.to_string(),
            eval_target_type: EvalTargetType::DifyWorkflow,
            version: EvalTargetVersion {
                space_id,
                eval_target_type: EvalTargetType::DifyWorkflow,
                source_target_version: DIFY_SOURCE_VERSION.to_string(),
                config: SourceConfig::DifyWorkflow(DifyWorkflow {
                    name: source_target_id.to_string(),
                    api_key: api_key.to_string(),
                    description: opts.description,
                }),
                input_schema: vec![ArgsSchema {
                    key: INPUT_SCHEMA_KEY.to_string(),
                    support_content_types: vec![ContentType::Text],
                    json_schema: Some(
                        r#"{"type": "string", "description": "Inputs for the workflow run; must be a JSON-formatted string"}"#
                            .to_string(),
                    ),
                }],
                output_schema: vec![ArgsSchema {
                    key: OUTPUT_SCHEMA_KEY.to_string(),
                    support_content_types: vec![ContentType::Text],
                    json_schema: Some(
                        r#"{"type": "string", "description": "Outputs of the workflow run, as a JSON-formatted string"}"#
                            .to_string(),
                    ),
                }],
                base_info: BaseInfo::now_by(user_id),
            },
            base_info: BaseInfo::now_by(user_id),
        })
    }

    async fn execute(
        &self,
        ctx: &ExecutionContext,
        space_id: i64,
        param: &ExecuteTargetParam,
    ) -> ExecuteOutcome {
        ExecuteOutcome::from(self.run_workflow(ctx, space_id, param).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::target::EvalTargetRunStatus;
    use crate::utilities::config::MapConfig;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    fn adapter_for(host: &str) -> DifyWorkflowAdapter {
        let config = MapConfig::new().set(DIFY_HOST_CONFIG_KEY, host);
        DifyWorkflowAdapter::new(reqwest::Client::new(), Arc::new(config))
    }

    fn execute_param(input: Option<&str>) -> ExecuteTargetParam {
        let input = match input {
            Some(text) => EvalTargetInputData::from_field(INPUT_SCHEMA_KEY, Content::json_text(text)),
            None => EvalTargetInputData::new(),
        };
        ExecuteTargetParam {
            source_target_id: "orders".to_string(),
            source_target_version: "sk-test".to_string(),
            input,
        }
    }

    /// Serve `app` on an ephemeral local port, returning its base URL.
    async fn spawn_mock(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn succeeded_envelope(outputs: Value) -> Value {
        json!({
            "task_id": "task-1",
            "workflow_run_id": "run-1",
            "data": {
                "id": "run-1",
                "workflow_id": "wf-1",
                "status": "succeeded",
                "outputs": outputs,
                "error": null,
                "elapsed_time": 0.42,
                "total_tokens": 128,
                "total_steps": 3,
                "created_at": 1700000000,
                "finished_at": 1700000001
            }
        })
    }

    /// Echoes the request's `inputs` and `user` back through `outputs`,
    /// rejecting calls without the expected bearer token.
    async fn echo_handler(headers: HeaderMap, Json(body): Json<Value>) -> Response {
        let authorized = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v == "Bearer sk-test")
            .unwrap_or(false);
        if !authorized {
            return (StatusCode::UNAUTHORIZED, "missing or bad bearer token").into_response();
        }
        Json(succeeded_envelope(json!({
            "inputs": body["inputs"],
            "user": body["user"],
        })))
        .into_response()
    }

    // --- build phase ---

    #[tokio::test]
    async fn test_build_by_source_shape() {
        let adapter = adapter_for("http://unused");
        let ctx = ExecutionContext::new().with_user("u-7");
        let target = adapter
            .build_by_source(&ctx, 42, "orders", "sk-test", BuildOptions::default())
            .await
            .unwrap();

        assert_eq!(target.space_id, 42);
        assert_eq!(target.eval_target_type, EvalTargetType::DifyWorkflow);
        assert_eq!(target.source_target_id, "orders");
        assert_eq!(target.version.source_target_version, DIFY_SOURCE_VERSION);
        assert_eq!(target.version.input_schema.len(), 1);
        assert_eq!(target.version.input_schema[0].key, INPUT_SCHEMA_KEY);
        assert_eq!(target.version.output_schema.len(), 1);
        assert_eq!(target.version.output_schema[0].key, OUTPUT_SCHEMA_KEY);

        let workflow = target.version.config.as_dify_workflow().unwrap();
        assert_eq!(workflow.name, "orders");
        assert_eq!(workflow.api_key, "sk-test");

        assert_eq!(target.base_info.created_by.user_id.as_deref(), Some("u-7"));
        assert_eq!(target.base_info.updated_by.user_id.as_deref(), Some("u-7"));
    }

    #[tokio::test]
    async fn test_build_by_source_empty_api_key_rejected() {
        let adapter = adapter_for("http://unused");
        let err = adapter
            .build_by_source(
                &ExecutionContext::new(),
                42,
                "orders",
                "",
                BuildOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_invalid_param());
    }

    #[tokio::test]
    async fn test_build_by_source_empty_name_accepted() {
        let adapter = adapter_for("http://unused");
        let target = adapter
            .build_by_source(
                &ExecutionContext::new(),
                42,
                "",
                "sk-test",
                BuildOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(target.source_target_id, "");
        // Unresolvable identity is attributed as the empty user, not an error.
        assert_eq!(target.base_info.created_by.user_id.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_build_by_source_description_option() {
        let adapter = adapter_for("http://unused");
        let opts = BuildOptions {
            description: Some("order processing".to_string()),
        };
        let target = adapter
            .build_by_source(&ExecutionContext::new(), 42, "orders", "sk-test", opts)
            .await
            .unwrap();
        let workflow = target.version.config.as_dify_workflow().unwrap();
        assert_eq!(workflow.description.as_deref(), Some("order processing"));
    }

    // --- validate phase ---

    #[tokio::test]
    async fn test_validate_input_accepts_valid_json() {
        let adapter = adapter_for("http://unused");
        let input = EvalTargetInputData::from_field(
            INPUT_SCHEMA_KEY,
            Content::json_text(r#"{"query": "hello"}"#),
        );
        adapter
            .validate_input(&ExecutionContext::new(), 42, &[], &input)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_validate_input_rejects_malformed_json() {
        let adapter = adapter_for("http://unused");
        let input = EvalTargetInputData::from_field(INPUT_SCHEMA_KEY, Content::json_text("{not json"));
        let err = adapter
            .validate_input(&ExecutionContext::new(), 42, &[], &input)
            .await
            .unwrap_err();
        assert!(err.is_invalid_param());
    }

    #[tokio::test]
    async fn test_validate_input_accepts_absent_slot() {
        let adapter = adapter_for("http://unused");
        adapter
            .validate_input(&ExecutionContext::new(), 42, &[], &EvalTargetInputData::new())
            .await
            .unwrap();
    }

    // --- execute phase ---

    #[tokio::test]
    async fn test_execute_success_maps_outputs_verbatim() {
        let _ = env_logger::builder().is_test(true).try_init();
        let app = Router::new().route(
            WORKFLOW_RUN_PATH,
            post(|| async { Json(succeeded_envelope(json!({"a":1}))) }),
        );
        let host = spawn_mock(app).await;
        let adapter = adapter_for(&host);

        let outcome = adapter
            .execute(&ExecutionContext::new(), 42, &execute_param(Some("{}")))
            .await;
        assert_eq!(outcome.status(), EvalTargetRunStatus::Success);
        let output = outcome.output().unwrap();
        assert_eq!(output.field_text(OUTPUT_SCHEMA_KEY), Some(r#"{"a":1}"#));
        assert_eq!(output.usage, crate::types::EvalTargetUsage::default());
    }

    #[tokio::test]
    async fn test_execute_null_outputs_normalized_to_empty_object() {
        let app = Router::new().route(
            WORKFLOW_RUN_PATH,
            post(|| async { Json(succeeded_envelope(Value::Null)) }),
        );
        let host = spawn_mock(app).await;
        let adapter = adapter_for(&host);

        let outcome = adapter
            .execute(&ExecutionContext::new(), 42, &execute_param(Some("{}")))
            .await;
        assert_eq!(outcome.status(), EvalTargetRunStatus::Success);
        assert_eq!(
            outcome.output().unwrap().field_text(OUTPUT_SCHEMA_KEY),
            Some("{}")
        );
    }

    #[tokio::test]
    async fn test_execute_http_error_fails_with_status() {
        let app = Router::new().route(
            WORKFLOW_RUN_PATH,
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "internal boom") }),
        );
        let host = spawn_mock(app).await;
        let adapter = adapter_for(&host);

        let outcome = adapter
            .execute(&ExecutionContext::new(), 42, &execute_param(Some("{}")))
            .await;
        assert_eq!(outcome.status(), EvalTargetRunStatus::Fail);
        let message = outcome.error().unwrap().to_string();
        assert!(message.contains("500"));
        assert!(message.contains("internal boom"));
    }

    #[tokio::test]
    async fn test_execute_remote_failure_status_fails_with_remote_error() {
        let app = Router::new().route(
            WORKFLOW_RUN_PATH,
            post(|| async {
                Json(json!({
                    "task_id": "task-1",
                    "workflow_run_id": "run-1",
                    "data": {
                        "id": "run-1",
                        "workflow_id": "wf-1",
                        "status": "failed",
                        "outputs": null,
                        "error": "boom",
                        "elapsed_time": 0.1,
                        "total_tokens": 0,
                        "total_steps": 1,
                        "created_at": 1700000000,
                        "finished_at": 1700000001
                    }
                }))
            }),
        );
        let host = spawn_mock(app).await;
        let adapter = adapter_for(&host);

        let outcome = adapter
            .execute(&ExecutionContext::new(), 42, &execute_param(Some("{}")))
            .await;
        assert_eq!(outcome.status(), EvalTargetRunStatus::Fail);
        let message = outcome.error().unwrap().to_string();
        assert!(message.contains("failed"));
        assert!(message.contains("boom"));
    }

    #[tokio::test]
    async fn test_execute_malformed_response_fails_with_raw_body() {
        let app = Router::new().route(WORKFLOW_RUN_PATH, post(|| async { "not json at all" }));
        let host = spawn_mock(app).await;
        let adapter = adapter_for(&host);

        let outcome = adapter
            .execute(&ExecutionContext::new(), 42, &execute_param(Some("{}")))
            .await;
        assert_eq!(outcome.status(), EvalTargetRunStatus::Fail);
        assert!(outcome
            .error()
            .unwrap()
            .to_string()
            .contains("not json at all"));
    }

    #[tokio::test]
    async fn test_execute_transport_failure() {
        // Nothing listens here.
        let adapter = adapter_for("http://127.0.0.1:1");
        let outcome = adapter
            .execute(&ExecutionContext::new(), 42, &execute_param(Some("{}")))
            .await;
        assert_eq!(outcome.status(), EvalTargetRunStatus::Fail);
        assert!(matches!(
            outcome.error().unwrap(),
            TargetError::Transport(_)
        ));
    }

    #[tokio::test]
    async fn test_execute_empty_api_key_fails_before_any_request() {
        let adapter = adapter_for("http://127.0.0.1:1");
        let param = ExecuteTargetParam {
            source_target_id: "orders".to_string(),
            source_target_version: String::new(),
            input: EvalTargetInputData::new(),
        };
        let outcome = adapter.execute(&ExecutionContext::new(), 42, &param).await;
        assert_eq!(outcome.status(), EvalTargetRunStatus::Fail);
        assert!(outcome.error().unwrap().is_invalid_param());
    }

    #[tokio::test]
    async fn test_execute_invalid_input_json_fails_before_any_request() {
        let adapter = adapter_for("http://127.0.0.1:1");
        let outcome = adapter
            .execute(
                &ExecutionContext::new(),
                42,
                &execute_param(Some("{not json")),
            )
            .await;
        assert_eq!(outcome.status(), EvalTargetRunStatus::Fail);
        assert!(outcome.error().unwrap().is_invalid_param());
    }

    #[tokio::test]
    async fn test_execute_sends_bearer_token_and_caller_identity() {
        let app = Router::new().route(WORKFLOW_RUN_PATH, post(echo_handler));
        let host = spawn_mock(app).await;
        let adapter = adapter_for(&host);

        let outcome = adapter
            .execute(
                &ExecutionContext::new(),
                42,
                &execute_param(Some(r#"{"query":"hi"}"#)),
            )
            .await;
        assert_eq!(outcome.status(), EvalTargetRunStatus::Success);
        let echoed: Value =
            serde_json::from_str(outcome.output().unwrap().field_text(OUTPUT_SCHEMA_KEY).unwrap())
                .unwrap();
        assert_eq!(echoed["user"], "cozeloop_user_42");
        assert_eq!(echoed["inputs"], json!({"query": "hi"}));
    }

    #[tokio::test]
    async fn test_execute_absent_input_defaults_to_empty_object() {
        let app = Router::new().route(WORKFLOW_RUN_PATH, post(echo_handler));
        let host = spawn_mock(app).await;
        let adapter = adapter_for(&host);

        let outcome = adapter
            .execute(&ExecutionContext::new(), 42, &execute_param(None))
            .await;
        assert_eq!(outcome.status(), EvalTargetRunStatus::Success);
        let echoed: Value =
            serde_json::from_str(outcome.output().unwrap().field_text(OUTPUT_SCHEMA_KEY).unwrap())
                .unwrap();
        assert_eq!(echoed["inputs"], json!({}));
    }

    #[tokio::test]
    async fn test_execute_idempotent_against_deterministic_endpoint() {
        let app = Router::new().route(
            WORKFLOW_RUN_PATH,
            post(|| async { Json(succeeded_envelope(json!({"a":1,"b":[2,3]}))) }),
        );
        let host = spawn_mock(app).await;
        let adapter = adapter_for(&host);
        let ctx = ExecutionContext::new();
        let param = execute_param(Some("{}"));

        let first = adapter.execute(&ctx, 42, &param).await;
        let second = adapter.execute(&ctx, 42, &param).await;
        assert_eq!(
            first.output().unwrap().field_text(OUTPUT_SCHEMA_KEY),
            second.output().unwrap().field_text(OUTPUT_SCHEMA_KEY),
        );
    }

    #[tokio::test]
    async fn test_execute_concurrent_calls_stay_isolated() {
        let app = Router::new().route(WORKFLOW_RUN_PATH, post(echo_handler));
        let host = spawn_mock(app).await;
        let adapter = Arc::new(adapter_for(&host));

        let calls = (0..50).map(|i| {
            let adapter = Arc::clone(&adapter);
            async move {
                let param = execute_param(Some(&format!(r#"{{"n":{}}}"#, i)));
                let outcome = adapter.execute(&ExecutionContext::new(), 42, &param).await;
                (i, outcome)
            }
        });
        for (i, outcome) in futures::future::join_all(calls).await {
            assert_eq!(outcome.status(), EvalTargetRunStatus::Success);
            let echoed: Value = serde_json::from_str(
                outcome.output().unwrap().field_text(OUTPUT_SCHEMA_KEY).unwrap(),
            )
            .unwrap();
            // Each call's output must reflect only its own request.
            assert_eq!(echoed["inputs"]["n"], json!(i));
        }
    }

    // --- discovery operations ---

    #[tokio::test]
    async fn test_listing_operations_are_empty_not_errors() {
        use crate::targets::source_adapter::{ListSourceParam, ListSourceVersionParam};

        let adapter = adapter_for("http://unused");
        let ctx = ExecutionContext::new();

        let listing = adapter
            .list_source(&ctx, &ListSourceParam::default())
            .await
            .unwrap();
        assert!(listing.targets.is_empty());
        assert!(!listing.has_more);

        let versions = adapter
            .list_source_version(&ctx, &ListSourceVersionParam::default())
            .await
            .unwrap();
        assert!(versions.versions.is_empty());

        let mut targets = Vec::new();
        adapter.pack_source_info(&ctx, 42, &mut targets).await.unwrap();
        adapter
            .pack_source_version_info(&ctx, 42, &mut targets)
            .await
            .unwrap();
    }
}
