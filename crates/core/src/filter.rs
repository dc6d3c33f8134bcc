// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Eligibility filtering for state-changing actions

use crate::record::{WorkspaceRecord, WorkspaceState};

/// What the operator asked the tool to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Resolve,
    Start,
    Stop,
    Users,
    Status,
}

impl Action {
    /// State a workspace must be in for this action to apply.
    /// `None` means the action has no state gate.
    pub fn required_state(&self) -> Option<WorkspaceState> {
        match self {
            Self::Start => Some(WorkspaceState::Stopped),
            Self::Stop => Some(WorkspaceState::Available),
            Self::Resolve | Self::Users | Self::Status => None,
        }
    }

    /// Whether this action issues state-changing remote calls
    pub fn executes(&self) -> bool {
        matches!(self, Self::Start | Self::Stop)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Resolve => "resolve",
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Users => "users",
            Self::Status => "status",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Split resolved records into those eligible for `action` and those
/// skipped, with the current state as the skip reason. Actions without a
/// state gate treat every record as eligible. Total: an empty eligible
/// set is a valid result, not an error.
pub fn partition_by_state(
    records: Vec<WorkspaceRecord>,
    action: Action,
) -> (Vec<WorkspaceRecord>, Vec<(WorkspaceRecord, WorkspaceState)>) {
    let Some(required) = action.required_state() else {
        return (records, Vec::new());
    };

    let mut eligible = Vec::new();
    let mut skipped = Vec::new();
    for record in records {
        if record.state == required {
            eligible.push(record);
        } else {
            let state = record.state.clone();
            skipped.push((record, state));
        }
    }
    (eligible, skipped)
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
