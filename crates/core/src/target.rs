// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target token normalization
//!
//! Raw operator input (a targets file, a comma-separated CLI list, or
//! both) becomes an ordered, deduplicated list of resolution targets.

use std::collections::HashSet;
use thiserror::Error;

/// Where a target token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Line or comma entry in a targets file
    File,
    /// Entry in the comma-separated CLI list
    CliList,
}

/// Errors from input parsing
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no targets supplied; provide --names or --file")]
    NoTargets,
}

/// A single normalized token awaiting resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// The token as the operator spelled it, post-trim
    pub raw: String,
    pub origin: Origin,
}

impl Target {
    /// Case-insensitive identity used for dedup and matching
    pub fn key(&self) -> String {
        self.raw.to_lowercase()
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Ordered, deduplicated list of targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetList(Vec<Target>);

impl TargetList {
    /// Parse targets from the CLI list and/or a targets file.
    ///
    /// Both sources split on commas (file contents also on newlines) and
    /// are trimmed and merged CLI-first. `#`-prefixed lines in the file
    /// are comments. Duplicates are dropped case-insensitively, keeping
    /// the first occurrence so downstream batching and reporting stay
    /// deterministic.
    pub fn parse(cli_csv: Option<&str>, file_contents: Option<&str>) -> Result<Self, InputError> {
        let mut targets = Vec::new();
        if let Some(csv) = cli_csv {
            targets.extend(split_csv(csv).map(|raw| Target {
                raw,
                origin: Origin::CliList,
            }));
        }
        if let Some(contents) = file_contents {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                targets.extend(split_csv(line).map(|raw| Target {
                    raw,
                    origin: Origin::File,
                }));
            }
        }

        let mut seen = HashSet::new();
        targets.retain(|t| seen.insert(t.key()));

        if targets.is_empty() {
            return Err(InputError::NoTargets);
        }
        Ok(Self(targets))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a TargetList {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn split_csv(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
