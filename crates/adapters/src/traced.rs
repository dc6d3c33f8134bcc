// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::api::{ApiError, WorkspacesApi};
use async_trait::async_trait;
use std::collections::BTreeMap;
use wsops_core::{OpFailure, WorkspaceId, WorkspaceRecord};

/// Wrapper that adds tracing to any WorkspacesApi
#[derive(Clone)]
pub struct TracedApi<A> {
    inner: A,
}

impl<A> TracedApi<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<A: WorkspacesApi> WorkspacesApi for TracedApi<A> {
    async fn describe(&self, ids: &[WorkspaceId]) -> Result<Vec<WorkspaceRecord>, ApiError> {
        let span = tracing::info_span!("api.describe", ids = ids.len());
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.describe(ids).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(records) => tracing::info!(
                found = records.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "described"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "describe failed"
            ),
        }
        result
    }

    async fn list_all(&self) -> Result<Vec<WorkspaceRecord>, ApiError> {
        let span = tracing::info_span!("api.list_all");
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.list_all().await;
        let elapsed = start.elapsed();

        match &result {
            Ok(records) => tracing::info!(
                count = records.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "listing fetched"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "listing failed"
            ),
        }
        result
    }

    async fn describe_tags(
        &self,
        id: &WorkspaceId,
    ) -> Result<BTreeMap<String, String>, ApiError> {
        let span = tracing::info_span!("api.describe_tags", id = %id);
        let _guard = span.enter();

        let result = self.inner.describe_tags(id).await;
        match &result {
            Ok(tags) => tracing::debug!(tags = tags.len(), "tags fetched"),
            Err(e) => tracing::warn!(error = %e, "tag fetch failed"),
        }
        result
    }

    async fn start(&self, ids: &[WorkspaceId]) -> Result<Vec<OpFailure>, ApiError> {
        let span = tracing::info_span!("api.start", ids = ids.len());
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.start(ids).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(failures) => tracing::info!(
                failed = failures.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "start requested"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "start call failed"
            ),
        }
        result
    }

    async fn stop(&self, ids: &[WorkspaceId]) -> Result<Vec<OpFailure>, ApiError> {
        let span = tracing::info_span!("api.stop", ids = ids.len());
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.stop(ids).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(failures) => tracing::info!(
                failed = failures.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "stop requested"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "stop call failed"
            ),
        }
        result
    }
}
