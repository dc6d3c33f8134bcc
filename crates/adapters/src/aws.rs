// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real adapter shelling out to the AWS platform CLI
//!
//! Credentials stay entirely inside the platform CLI and its normal
//! credential chain; `--profile` and `--region` are passed through
//! untouched. Replies are requested as JSON and parsed here.

use crate::api::{ApiError, WorkspacesApi};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use tokio::process::Command;
use wsops_core::{OpFailure, WorkspaceId, WorkspaceRecord, WorkspaceState};

/// Adapter invoking `aws workspaces <operation>` per call
#[derive(Debug, Clone, Default)]
pub struct AwsCliApi {
    profile: Option<String>,
    region: Option<String>,
}

impl AwsCliApi {
    pub fn new(profile: Option<String>, region: Option<String>) -> Self {
        Self { profile, region }
    }

    async fn call(&self, operation: &'static str, args: &[String]) -> Result<Vec<u8>, ApiError> {
        let mut cmd = Command::new("aws");
        cmd.args(["workspaces", operation]);
        cmd.args(args);
        if let Some(profile) = &self.profile {
            cmd.args(["--profile", profile]);
        }
        if let Some(region) = &self.region {
            cmd.args(["--region", region]);
        }
        cmd.args(["--output", "json"]);

        let output = cmd.output().await?;
        if !output.status.success() {
            return Err(ApiError::CallFailed {
                operation,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(output.stdout)
    }
}

#[async_trait]
impl WorkspacesApi for AwsCliApi {
    async fn describe(&self, ids: &[WorkspaceId]) -> Result<Vec<WorkspaceRecord>, ApiError> {
        // The service rejects the whole call on a malformed id, so only
        // ids matching its strict pattern are ever sent; the rest are
        // reported absent, same as unknown ids.
        let valid: Vec<String> = ids
            .iter()
            .filter(|id| is_strict_id(id.as_str()))
            .map(|id| id.as_str().to_string())
            .collect();
        if valid.is_empty() {
            return Ok(Vec::new());
        }

        let mut args = vec!["--workspace-ids".to_string()];
        args.extend(valid);
        let reply = self.call("describe-workspaces", &args).await?;
        parse_workspaces("describe-workspaces", &reply)
    }

    async fn list_all(&self) -> Result<Vec<WorkspaceRecord>, ApiError> {
        // the platform CLI aggregates pages itself
        let reply = self.call("describe-workspaces", &[]).await?;
        parse_workspaces("describe-workspaces", &reply)
    }

    async fn describe_tags(
        &self,
        id: &WorkspaceId,
    ) -> Result<BTreeMap<String, String>, ApiError> {
        let args = vec!["--resource-id".to_string(), id.as_str().to_string()];
        let reply = self.call("describe-tags", &args).await?;
        parse_tags("describe-tags", &reply)
    }

    async fn start(&self, ids: &[WorkspaceId]) -> Result<Vec<OpFailure>, ApiError> {
        let args = vec![
            "--start-workspace-requests".to_string(),
            request_payload(ids),
        ];
        let reply = self.call("start-workspaces", &args).await?;
        parse_failed_requests("start-workspaces", &reply)
    }

    async fn stop(&self, ids: &[WorkspaceId]) -> Result<Vec<OpFailure>, ApiError> {
        let args = vec![
            "--stop-workspace-requests".to_string(),
            request_payload(ids),
        ];
        let reply = self.call("stop-workspaces", &args).await?;
        parse_failed_requests("stop-workspaces", &reply)
    }
}

/// The service's own id pattern: `ws-` then 8-63 lowercase alphanumerics
fn is_strict_id(token: &str) -> bool {
    let Some(rest) = token.strip_prefix("ws-") else {
        return false;
    };
    (8..=63).contains(&rest.len())
        && rest
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// JSON payload for the bulk start/stop request argument
fn request_payload(ids: &[WorkspaceId]) -> String {
    let rows: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| serde_json::json!({ "WorkspaceId": id.as_str() }))
        .collect();
    serde_json::Value::Array(rows).to_string()
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeReply {
    #[serde(default)]
    workspaces: Vec<WireWorkspace>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireWorkspace {
    workspace_id: String,
    #[serde(default)]
    computer_name: Option<String>,
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

impl WireWorkspace {
    fn into_record(self) -> WorkspaceRecord {
        WorkspaceRecord {
            id: WorkspaceId::new(self.workspace_id),
            computer_name: self.computer_name,
            user_name: self.user_name,
            state: WorkspaceState::from_wire(self.state.as_deref().unwrap_or("UNKNOWN")),
            tags: BTreeMap::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TagsReply {
    #[serde(default)]
    tag_list: Vec<WireTag>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireTag {
    key: String,
    #[serde(default)]
    value: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BulkOpReply {
    #[serde(default)]
    failed_requests: Vec<WireFailedRequest>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireFailedRequest {
    #[serde(default)]
    workspace_id: String,
    #[serde(default)]
    error_code: String,
    #[serde(default)]
    error_message: String,
}

fn parse_workspaces(
    operation: &'static str,
    reply: &[u8],
) -> Result<Vec<WorkspaceRecord>, ApiError> {
    let parsed: DescribeReply =
        serde_json::from_slice(reply).map_err(|source| ApiError::Malformed { operation, source })?;
    Ok(parsed
        .workspaces
        .into_iter()
        .map(WireWorkspace::into_record)
        .collect())
}

fn parse_tags(
    operation: &'static str,
    reply: &[u8],
) -> Result<BTreeMap<String, String>, ApiError> {
    let parsed: TagsReply =
        serde_json::from_slice(reply).map_err(|source| ApiError::Malformed { operation, source })?;
    Ok(parsed
        .tag_list
        .into_iter()
        .map(|t| (t.key, t.value))
        .collect())
}

fn parse_failed_requests(
    operation: &'static str,
    reply: &[u8],
) -> Result<Vec<OpFailure>, ApiError> {
    let parsed: BulkOpReply =
        serde_json::from_slice(reply).map_err(|source| ApiError::Malformed { operation, source })?;
    Ok(parsed
        .failed_requests
        .into_iter()
        .filter(|f| !f.workspace_id.is_empty())
        .map(|f| OpFailure {
            id: WorkspaceId::new(f.workspace_id),
            code: f.error_code,
            message: f.error_message,
        })
        .collect())
}

#[cfg(test)]
#[path = "aws_tests.rs"]
mod tests;
