// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation logging
//!
//! Console output goes to stderr so stdout stays pure tables. Each
//! invocation also gets its own log file named
//! `logs/YYYYMMDDHHMMSS-workspace-<action>.log`.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wsops_core::{Action, RunEvent};

/// Set up the subscriber. Returns the appender guard; dropping it
/// flushes the file. Falls back to stderr-only when the log directory
/// cannot be created.
pub fn init(action: Action) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let filename = format!("{timestamp}-workspace-{action}.log");
    let log_dir = PathBuf::from("logs");

    match std::fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::never(&log_dir, &filename);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                .init();
            tracing::info!(log = %log_dir.join(&filename).display(), "log file");
            Some(guard)
        }
        Err(err) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            tracing::warn!(
                error = %err,
                "could not create log directory; logging to stderr only"
            );
            None
        }
    }
}

/// Forward the engine's structured events to the subscriber, in the
/// order the engine decided them
pub fn log_events(events: &[RunEvent]) {
    for event in events {
        match event {
            RunEvent::ListingFetched { count } => {
                tracing::info!(count = *count, "fetched workspace listing");
            }
            RunEvent::Resolved {
                token,
                id,
                strategy,
            } => {
                tracing::info!(token = %token, id = %id, strategy = %strategy, "resolved");
            }
            RunEvent::Unresolved { token, reason } => {
                tracing::warn!(token = %token, reason = %reason, "unresolved");
            }
            RunEvent::TagLookup { id, budget_left } => {
                tracing::debug!(id = %id, budget_left = *budget_left, "tag lookup");
            }
            RunEvent::TagBudgetExhausted { remaining } => {
                tracing::warn!(remaining = *remaining, "tag-lookup budget exhausted");
            }
            RunEvent::SkippedState { id, state } => {
                tracing::info!(id = %id, state = %state, "skipping, not in required state");
            }
            RunEvent::BatchDispatched { index, size } => {
                tracing::info!(index = *index, size = *size, "batch dispatched");
            }
            RunEvent::BatchFailed { index, error } => {
                tracing::error!(index = *index, error = %error, "batch call failed");
            }
            RunEvent::OperationFailed { id, code } => {
                tracing::warn!(id = %id, code = %code, "operation failed");
            }
            RunEvent::DryRun { id } => {
                tracing::info!(id = %id, "[dry-run] would submit");
            }
        }
    }
}
