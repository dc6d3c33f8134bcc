// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-target resolution results
//!
//! Every input target produces exactly one `Resolution`, in input order.

use crate::record::WorkspaceRecord;

/// The strategy that matched a target, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    WorkspaceId,
    ComputerName,
    UserName,
    NameTag,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::WorkspaceId => "workspace_id",
            Self::ComputerName => "computer_name",
            Self::UserName => "user_name",
            Self::NameTag => "name_tag",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a target failed to resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// No strategy produced a match
    NoMatch,
    /// A strategy produced more than one match; refusing to guess
    Ambiguous { matches: usize },
    /// The tag-lookup budget ran out before this target was tried
    TagBudgetExhausted,
}

impl std::fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch => f.write_str("no match"),
            Self::Ambiguous { matches } => write!(f, "ambiguous ({} matches)", matches),
            Self::TagBudgetExhausted => f.write_str("tag-budget exhausted"),
        }
    }
}

/// A target that did not resolve, with the original spelling kept for
/// reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    pub token: String,
    pub reason: UnresolvedReason,
}

/// Outcome of resolving one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched {
        token: String,
        record: WorkspaceRecord,
        strategy: Strategy,
    },
    Unmatched(Unresolved),
}

impl Resolution {
    pub fn token(&self) -> &str {
        match self {
            Self::Matched { token, .. } => token,
            Self::Unmatched(u) => &u.token,
        }
    }

    pub fn record(&self) -> Option<&WorkspaceRecord> {
        match self {
            Self::Matched { record, .. } => Some(record),
            Self::Unmatched(_) => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}
