// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake workspace service for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::api::{ApiError, WorkspacesApi};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use wsops_core::{OpFailure, WorkspaceId, WorkspaceRecord};

/// Recorded API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Describe { ids: Vec<WorkspaceId> },
    ListAll,
    DescribeTags { id: WorkspaceId },
    Start { ids: Vec<WorkspaceId> },
    Stop { ids: Vec<WorkspaceId> },
}

#[derive(Default)]
struct FakeState {
    records: Vec<WorkspaceRecord>,
    tags: HashMap<WorkspaceId, BTreeMap<String, String>>,
    calls: Vec<ApiCall>,
    // Configurable failure modes
    op_failures: HashMap<WorkspaceId, (String, String)>,
    transport_fail_ops: HashSet<usize>,
    fail_listing: bool,
    op_call_count: usize,
}

/// Fake service with call recording for testing
#[derive(Clone, Default)]
pub struct FakeWorkspaces {
    state: Arc<Mutex<FakeState>>,
}

impl FakeWorkspaces {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Seed a workspace into the backing listing (listing order is
    /// seeding order)
    pub fn seed(&self, record: WorkspaceRecord) {
        self.lock().records.push(record);
    }

    /// Seed the tag map returned by `describe_tags` for one workspace
    pub fn seed_tags<I, K, V>(&self, id: &WorkspaceId, tags: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = tags
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.lock().tags.insert(id.clone(), map);
    }

    /// Make start/stop report this id as failed with the given code
    pub fn fail_operation(&self, id: &WorkspaceId, code: &str, message: &str) {
        self.lock()
            .op_failures
            .insert(id.clone(), (code.to_string(), message.to_string()));
    }

    /// Make the nth start/stop call (0-based, counted together) fail at
    /// the transport level
    pub fn fail_transport_on_op(&self, nth: usize) {
        self.lock().transport_fail_ops.insert(nth);
    }

    /// Make the bulk listing call fail
    pub fn fail_listing(&self) {
        self.lock().fail_listing = true;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    /// Number of bulk listing calls so far
    pub fn listing_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, ApiCall::ListAll))
            .count()
    }

    /// Number of tag lookups so far
    pub fn tag_lookup_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| matches!(c, ApiCall::DescribeTags { .. }))
            .count()
    }

    /// Sizes of the start/stop batches dispatched so far, in order
    pub fn op_batch_sizes(&self) -> Vec<usize> {
        self.lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                ApiCall::Start { ids } | ApiCall::Stop { ids } => Some(ids.len()),
                _ => None,
            })
            .collect()
    }

    fn bulk_op(&self, call: ApiCall, ids: &[WorkspaceId]) -> Result<Vec<OpFailure>, ApiError> {
        let mut state = self.lock();
        state.calls.push(call);
        let nth = state.op_call_count;
        state.op_call_count += 1;

        if state.transport_fail_ops.contains(&nth) {
            return Err(ApiError::CallFailed {
                operation: "bulk-operation",
                stderr: "injected transport failure".to_string(),
            });
        }

        Ok(ids
            .iter()
            .filter_map(|id| {
                state.op_failures.get(id).map(|(code, message)| OpFailure {
                    id: id.clone(),
                    code: code.clone(),
                    message: message.clone(),
                })
            })
            .collect())
    }
}

#[async_trait]
impl WorkspacesApi for FakeWorkspaces {
    async fn describe(&self, ids: &[WorkspaceId]) -> Result<Vec<WorkspaceRecord>, ApiError> {
        let mut state = self.lock();
        state.calls.push(ApiCall::Describe { ids: ids.to_vec() });
        let wanted: HashSet<&WorkspaceId> = ids.iter().collect();
        Ok(state
            .records
            .iter()
            .filter(|r| wanted.contains(&r.id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<WorkspaceRecord>, ApiError> {
        let mut state = self.lock();
        state.calls.push(ApiCall::ListAll);
        if state.fail_listing {
            return Err(ApiError::CallFailed {
                operation: "describe-workspaces",
                stderr: "injected listing failure".to_string(),
            });
        }
        Ok(state.records.clone())
    }

    async fn describe_tags(
        &self,
        id: &WorkspaceId,
    ) -> Result<BTreeMap<String, String>, ApiError> {
        let mut state = self.lock();
        state.calls.push(ApiCall::DescribeTags { id: id.clone() });
        Ok(state.tags.get(id).cloned().unwrap_or_default())
    }

    async fn start(&self, ids: &[WorkspaceId]) -> Result<Vec<OpFailure>, ApiError> {
        self.bulk_op(ApiCall::Start { ids: ids.to_vec() }, ids)
    }

    async fn stop(&self, ids: &[WorkspaceId]) -> Result<Vec<OpFailure>, ApiError> {
        self.bulk_op(ApiCall::Stop { ids: ids.to_vec() }, ids)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
