// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical workspace records
//!
//! A `WorkspaceRecord` is the resolved view of one remote workspace.
//! Records are immutable for the duration of a run; state captured here
//! is the state observed at resolution time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for a workspace
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkspaceId(pub String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a token has the shape of a workspace id (`ws-` followed by
    /// lowercase alphanumerics). Gates the id-lookup strategy so arbitrary
    /// names never reach the describe call; the adapter enforces the
    /// service's stricter pattern.
    pub fn looks_like_id(token: &str) -> bool {
        let Some(rest) = token.strip_prefix("ws-") else {
            return false;
        };
        !rest.is_empty()
            && rest.len() <= 63
            && rest
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    }
}

impl std::fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkspaceState {
    Available,
    Stopped,
    Pending,
    Starting,
    Stopping,
    Rebooting,
    Error,
    Terminated,
    /// Transitional or future state the tool does not special-case
    Other(String),
}

impl WorkspaceState {
    /// Parse the wire spelling (`AVAILABLE`, `STOPPED`, ...), case-insensitively.
    /// Unknown spellings are preserved in `Other` rather than rejected.
    pub fn from_wire(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "AVAILABLE" => Self::Available,
            "STOPPED" => Self::Stopped,
            "PENDING" => Self::Pending,
            "STARTING" => Self::Starting,
            "STOPPING" => Self::Stopping,
            "REBOOTING" => Self::Rebooting,
            "ERROR" => Self::Error,
            "TERMINATED" => Self::Terminated,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire spelling, as shown in tables and logs
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Stopped => "STOPPED",
            Self::Pending => "PENDING",
            Self::Starting => "STARTING",
            Self::Stopping => "STOPPING",
            Self::Rebooting => "REBOOTING",
            Self::Error => "ERROR",
            Self::Terminated => "TERMINATED",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for WorkspaceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// A workspace as described by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceRecord {
    pub id: WorkspaceId,
    pub computer_name: Option<String>,
    pub user_name: Option<String>,
    pub state: WorkspaceState,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl WorkspaceRecord {
    /// Best human-facing name: computer name, falling back to the id
    pub fn display_name(&self) -> &str {
        self.computer_name.as_deref().unwrap_or(self.id.as_str())
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
