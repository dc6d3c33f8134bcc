// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! wsops-engine: target resolution and batch execution
//!
//! The engine turns a normalized target list into canonical workspace
//! records (strategy chain, one bulk listing, bounded tag lookups) and
//! drives state-changing actions in bounded batches with partial-failure
//! accounting. All remote I/O goes through the `WorkspacesApi` adapter.

pub mod executor;
pub mod resolver;
pub mod run;

pub use executor::{execute, ExecOutput};
pub use resolver::{resolve, ResolveOptions, ResolveOutput, DEFAULT_TAG_BUDGET};
pub use run::{RunOptions, RunReport, Runner};
