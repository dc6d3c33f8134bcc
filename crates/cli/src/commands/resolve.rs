// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution tables

use crate::output::Table;
use wsops_core::Resolution;
use wsops_engine::RunReport;

pub fn render(report: &RunReport) {
    let mut resolved = Table::new(&["workspace_name", "workspace_id"]);
    let mut unresolved = Table::new(&["input", "reason"]);

    for resolution in &report.resolutions {
        match resolution {
            Resolution::Matched { token, record, .. } => {
                resolved.row([token.clone(), record.id.to_string()]);
            }
            Resolution::Unmatched(u) => {
                unresolved.row([u.token.clone(), u.reason.to_string()]);
            }
        }
    }

    resolved.print();
    if !unresolved.is_empty() {
        println!();
        unresolved.print();
    }
}
