// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table output for CLI commands

/// Width-aligned text table: ` | ` separators, a dashed underline, and
/// `(no results)` when empty. Rows print in insertion order.
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return "(no results)".to_string();
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.len());
                }
            }
        }

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(widths.iter().copied())
            .map(|(h, w)| format!("{h:<w$}"))
            .collect();
        let underline: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        let mut lines = vec![header.join(" | "), underline.join("-+-")];
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(widths.iter().copied())
                .map(|(cell, w)| format!("{cell:<w$}"))
                .collect();
            lines.push(cells.join(" | "));
        }
        lines.join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
