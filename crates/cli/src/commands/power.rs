// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Skip and failure tables for start/stop

use crate::output::Table;
use wsops_core::ActionOutcome;
use wsops_engine::RunReport;

pub fn render(report: &RunReport) {
    let mut skipped = Table::new(&["ws_name", "ws_id", "current_state"]);
    let mut failures = Table::new(&["ws_name", "ws_id", "error_code", "error_message"]);

    for (record, outcome) in &report.outcomes {
        match outcome {
            ActionOutcome::Skipped { state } => {
                skipped.row([
                    record.display_name().to_string(),
                    record.id.to_string(),
                    state.to_string(),
                ]);
            }
            ActionOutcome::Failed { code, message } => {
                failures.row([
                    record.display_name().to_string(),
                    record.id.to_string(),
                    code.clone(),
                    message.clone(),
                ]);
            }
            ActionOutcome::Succeeded => {}
        }
    }

    if !skipped.is_empty() {
        skipped.print();
    }
    if !failures.is_empty() {
        if !skipped.is_empty() {
            println!();
        }
        failures.print();
    }
}
