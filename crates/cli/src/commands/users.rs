// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assigned-user table

use crate::output::Table;
use wsops_engine::RunReport;

pub fn render(report: &RunReport) {
    let mut table = Table::new(&["ws_name", "ws_id", "ws_user"]);
    for resolution in &report.resolutions {
        if let Some(record) = resolution.record() {
            table.row([
                record.display_name().to_string(),
                record.id.to_string(),
                record.user_name.clone().unwrap_or_default(),
            ]);
        }
    }
    table.print();
}
