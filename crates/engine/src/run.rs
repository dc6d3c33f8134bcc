// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run driver
//!
//! One `Runner::run` call is one complete invocation: resolve, gate by
//! state for executing actions, execute in batches, summarize. The
//! report carries every decision as data; rendering and logging happen
//! at the binary boundary.

use crate::executor;
use crate::resolver::{self, ResolveOptions, DEFAULT_TAG_BUDGET};
use std::collections::HashSet;
use wsops_adapters::{ApiError, WorkspacesApi};
use wsops_core::{
    partition_by_state, Action, ActionOutcome, Resolution, RunEvent, RunSummary, TargetList,
    WorkspaceRecord,
};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub include_tags: bool,
    pub max_tag_lookups: usize,
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            include_tags: false,
            max_tag_lookups: DEFAULT_TAG_BUDGET,
            dry_run: false,
        }
    }
}

/// Everything a run decided, in the order it was decided
#[derive(Debug)]
pub struct RunReport {
    pub action: Action,
    pub resolutions: Vec<Resolution>,
    /// Skipped records first (resolution order), then executed records
    /// (batch order); one entry per distinct workspace
    pub outcomes: Vec<(WorkspaceRecord, ActionOutcome)>,
    pub events: Vec<RunEvent>,
    pub summary: RunSummary,
}

/// Drives a full run against one adapter
#[derive(Debug, Clone)]
pub struct Runner<A: WorkspacesApi> {
    api: A,
    opts: RunOptions,
}

impl<A: WorkspacesApi> Runner<A> {
    pub fn new(api: A, opts: RunOptions) -> Self {
        Self { api, opts }
    }

    /// Run `action` over `targets`. `Err` means the remote service could
    /// not be consulted at all (exit 4 territory); everything per-target
    /// or per-id is captured inside the report.
    pub async fn run(&self, action: Action, targets: &TargetList) -> Result<RunReport, ApiError> {
        let resolve_opts = ResolveOptions {
            include_tags: self.opts.include_tags,
            max_tag_lookups: self.opts.max_tag_lookups,
        };
        let resolved = resolver::resolve(&self.api, targets, &resolve_opts).await?;
        let mut events = resolved.events;
        let resolutions = resolved.resolutions;

        let matched = resolutions.iter().filter(|r| r.is_matched()).count();
        let unresolved = resolutions.len() - matched;

        // several tokens may name the same workspace; operate on each
        // workspace once
        let mut seen = HashSet::new();
        let records: Vec<WorkspaceRecord> = resolutions
            .iter()
            .filter_map(Resolution::record)
            .filter(|r| seen.insert(r.id.clone()))
            .cloned()
            .collect();

        let (eligible, skipped) = partition_by_state(records, action);
        tracing::debug!(
            action = %action,
            matched,
            unresolved,
            eligible = eligible.len(),
            skipped = skipped.len(),
            "resolution complete"
        );

        let mut outcomes: Vec<(WorkspaceRecord, ActionOutcome)> = Vec::new();
        for (record, state) in skipped {
            events.push(RunEvent::SkippedState {
                id: record.id.clone(),
                state: state.clone(),
            });
            outcomes.push((record, ActionOutcome::Skipped { state }));
        }

        if action.executes() {
            let executed =
                executor::execute(&self.api, &eligible, action, self.opts.dry_run).await;
            events.extend(executed.events);
            outcomes.extend(executed.outcomes);
        }

        let summary = RunSummary {
            resolved: matched,
            unresolved,
            skipped: outcomes
                .iter()
                .filter(|(_, o)| matches!(o, ActionOutcome::Skipped { .. }))
                .count(),
            succeeded: outcomes
                .iter()
                .filter(|(_, o)| matches!(o, ActionOutcome::Succeeded))
                .count(),
            failed: outcomes
                .iter()
                .filter(|(_, o)| matches!(o, ActionOutcome::Failed { .. }))
                .count(),
            executed: action.executes(),
        };

        Ok(RunReport {
            action,
            resolutions,
            outcomes,
            events,
            summary,
        })
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
