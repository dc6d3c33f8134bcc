// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch execution of state-changing actions
//!
//! Eligible records are submitted in order, in chunks of at most
//! [`MAX_BATCH`] ids. Each id succeeds or fails independently; a call
//! that fails at the transport level marks every id in that batch failed
//! and execution continues with the remaining batches. No retries here;
//! a failed id is reported, not retried.

use std::collections::HashMap;
use wsops_adapters::{WorkspacesApi, MAX_BATCH};
use wsops_core::{Action, ActionOutcome, RunEvent, WorkspaceId, WorkspaceRecord, TRANSPORT_ERROR};

/// Per-record outcomes in submission order plus the batch-level events
#[derive(Debug, Default)]
pub struct ExecOutput {
    pub outcomes: Vec<(WorkspaceRecord, ActionOutcome)>,
    pub events: Vec<RunEvent>,
}

/// Execute `action` over `eligible`. With `dry_run`, every record is
/// reported as a hypothetical success and the remote service is never
/// contacted. Infallible: per-id and per-batch failures are outcomes,
/// not errors.
pub async fn execute<A: WorkspacesApi>(
    api: &A,
    eligible: &[WorkspaceRecord],
    action: Action,
    dry_run: bool,
) -> ExecOutput {
    let mut output = ExecOutput::default();
    if !action.executes() || eligible.is_empty() {
        return output;
    }

    if dry_run {
        for record in eligible {
            output.events.push(RunEvent::DryRun {
                id: record.id.clone(),
            });
            output
                .outcomes
                .push((record.clone(), ActionOutcome::Succeeded));
        }
        return output;
    }

    for (index, batch) in eligible.chunks(MAX_BATCH).enumerate() {
        let ids: Vec<WorkspaceId> = batch.iter().map(|r| r.id.clone()).collect();
        output.events.push(RunEvent::BatchDispatched {
            index,
            size: ids.len(),
        });

        let reply = if matches!(action, Action::Start) {
            api.start(&ids).await
        } else {
            api.stop(&ids).await
        };

        match reply {
            Ok(failures) => {
                let failed_by_id: HashMap<WorkspaceId, (String, String)> = failures
                    .into_iter()
                    .map(|f| (f.id, (f.code, f.message)))
                    .collect();
                for record in batch {
                    match failed_by_id.get(&record.id) {
                        Some((code, message)) => {
                            output.events.push(RunEvent::OperationFailed {
                                id: record.id.clone(),
                                code: code.clone(),
                            });
                            output.outcomes.push((
                                record.clone(),
                                ActionOutcome::Failed {
                                    code: code.clone(),
                                    message: message.clone(),
                                },
                            ));
                        }
                        None => {
                            output
                                .outcomes
                                .push((record.clone(), ActionOutcome::Succeeded));
                        }
                    }
                }
            }
            Err(err) => {
                // one bad batch never aborts the rest
                output.events.push(RunEvent::BatchFailed {
                    index,
                    error: err.to_string(),
                });
                for record in batch {
                    output.outcomes.push((
                        record.clone(),
                        ActionOutcome::Failed {
                            code: TRANSPORT_ERROR.to_string(),
                            message: err.to_string(),
                        },
                    ));
                }
            }
        }
    }

    output
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
