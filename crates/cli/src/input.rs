// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Boundary between the filesystem and the pure target parser

use anyhow::Context;
use std::path::Path;
use wsops_core::TargetList;

/// Read the optional targets file and merge it with the CLI list.
/// Any failure here is invalid input (exit 3): an unreadable file, or
/// no usable tokens in either source.
pub fn load_targets(names: Option<&str>, file: Option<&Path>) -> anyhow::Result<TargetList> {
    let contents = match file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("could not read targets file {}", path.display()))?,
        ),
        None => None,
    };
    Ok(TargetList::parse(names, contents.as_deref())?)
}
