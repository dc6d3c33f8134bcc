// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod power;
pub mod resolve;
pub mod status;
pub mod users;

use wsops_core::Action;
use wsops_engine::RunReport;

/// Render the tables for a completed run
pub fn render(report: &RunReport) {
    match report.action {
        Action::Resolve => resolve::render(report),
        Action::Start | Action::Stop => power::render(report),
        Action::Users => users::render(report),
        Action::Status => status::render(report),
    }
}
