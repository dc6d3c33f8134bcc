// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wsops-core: Core library for the wsops CLI tool
//!
//! This crate provides:
//! - Target normalization for file and CLI token lists
//! - Canonical workspace records and lifecycle states
//! - Resolution, eligibility, and outcome value types
//! - The run summary and its exit-code contract
//!
//! Everything here is a plain value scoped to a single run. No I/O, no
//! shared mutable state; the adapters and engine crates do the talking.

pub mod event;
pub mod filter;
pub mod outcome;
pub mod record;
pub mod resolution;
pub mod target;

// Re-exports
pub use event::RunEvent;
pub use filter::{partition_by_state, Action};
pub use outcome::{ActionOutcome, ExitCode, OpFailure, RunSummary, TRANSPORT_ERROR};
pub use record::{WorkspaceId, WorkspaceRecord, WorkspaceState};
pub use resolution::{Resolution, Strategy, Unresolved, UnresolvedReason};
pub use target::{InputError, Origin, Target, TargetList};
