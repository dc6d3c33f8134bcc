// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The remote workspace service as an opaque API
//!
//! Per-id operation failures are data in the reply, not errors; `ApiError`
//! is reserved for transport-level trouble (the platform CLI missing, a
//! whole call rejected, an unreadable reply).

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;
use wsops_core::{OpFailure, WorkspaceId, WorkspaceRecord};

/// The remote API accepts at most this many ids per call
pub const MAX_BATCH: usize = 25;

/// Transport-level errors from the remote service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not run the platform CLI: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("{operation} failed: {stderr}")]
    CallFailed {
        operation: &'static str,
        stderr: String,
    },
    #[error("unexpected {operation} reply: {source}")]
    Malformed {
        operation: &'static str,
        source: serde_json::Error,
    },
}

/// Adapter for the remote workspace service
#[async_trait]
pub trait WorkspacesApi: Clone + Send + Sync + 'static {
    /// Describe up to [`MAX_BATCH`] workspaces by id. Unknown ids are
    /// simply absent from the reply.
    async fn describe(&self, ids: &[WorkspaceId]) -> Result<Vec<WorkspaceRecord>, ApiError>;

    /// Fetch the full workspace listing (the service paginates; the
    /// adapter returns the aggregated result)
    async fn list_all(&self) -> Result<Vec<WorkspaceRecord>, ApiError>;

    /// Fetch the tag map for one workspace
    async fn describe_tags(&self, id: &WorkspaceId)
        -> Result<BTreeMap<String, String>, ApiError>;

    /// Request a start for up to [`MAX_BATCH`] workspaces. The reply lists
    /// only the failed requests; an id absent from it was accepted.
    async fn start(&self, ids: &[WorkspaceId]) -> Result<Vec<OpFailure>, ApiError>;

    /// Request a stop for up to [`MAX_BATCH`] workspaces. Same reply
    /// semantics as [`WorkspacesApi::start`].
    async fn stop(&self, ids: &[WorkspaceId]) -> Result<Vec<OpFailure>, ApiError>;
}
