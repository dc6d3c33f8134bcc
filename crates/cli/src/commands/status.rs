// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle-state table

use crate::output::Table;
use wsops_engine::RunReport;

pub fn render(report: &RunReport) {
    let mut table = Table::new(&["ws_name", "ws_id", "state"]);
    for resolution in &report.resolutions {
        if let Some(record) = resolution.record() {
            table.row([
                record.display_name().to_string(),
                record.id.to_string(),
                record.state.to_string(),
            ]);
        }
    }
    table.print();
}
