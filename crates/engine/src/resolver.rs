// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target resolution
//!
//! Strategies run in strict priority order per target: workspace id,
//! computer name, user name, then (opt-in) the `Name` tag. The first
//! strategy with a unique match wins; a strategy with several matches
//! marks the target ambiguous with no fallthrough. The bulk listing
//! behind the name strategies is fetched at most once per run.

use std::collections::{HashMap, HashSet};
use wsops_adapters::{ApiError, WorkspacesApi, MAX_BATCH};
use wsops_core::{
    Resolution, RunEvent, Strategy, Target, TargetList, Unresolved, UnresolvedReason, WorkspaceId,
    WorkspaceRecord,
};

/// Default cap on tag lookups when tag matching is enabled
pub const DEFAULT_TAG_BUDGET: usize = 500;

#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Enable the `Name`-tag strategy
    pub include_tags: bool,
    /// Tag lookups permitted per run; one unit per workspace fetched
    pub max_tag_lookups: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            include_tags: false,
            max_tag_lookups: DEFAULT_TAG_BUDGET,
        }
    }
}

/// Resolutions in input order plus the decisions that produced them
#[derive(Debug)]
pub struct ResolveOutput {
    pub resolutions: Vec<Resolution>,
    pub events: Vec<RunEvent>,
}

/// Resolve every target in `targets`. Transport failures during the id
/// lookup or the bulk listing abort the run; a failed tag lookup only
/// costs its budget unit.
pub async fn resolve<A: WorkspacesApi>(
    api: &A,
    targets: &TargetList,
    opts: &ResolveOptions,
) -> Result<ResolveOutput, ApiError> {
    let mut matched: HashMap<String, (WorkspaceRecord, Strategy)> = HashMap::new();
    let mut ambiguous: HashMap<String, usize> = HashMap::new();
    let mut events = Vec::new();

    // 1. direct id lookup for id-shaped tokens, batched
    let id_targets: Vec<&Target> = targets
        .iter()
        .filter(|t| WorkspaceId::looks_like_id(&t.key()))
        .collect();
    for chunk in id_targets.chunks(MAX_BATCH) {
        let ids: Vec<WorkspaceId> = chunk.iter().map(|t| WorkspaceId::new(t.key())).collect();
        let records = api.describe(&ids).await?;
        let by_id: HashMap<String, WorkspaceRecord> = records
            .into_iter()
            .map(|r| (r.id.as_str().to_string(), r))
            .collect();
        for target in chunk {
            if let Some(record) = by_id.get(&target.key()) {
                events.push(RunEvent::Resolved {
                    token: target.raw.clone(),
                    id: record.id.clone(),
                    strategy: Strategy::WorkspaceId,
                });
                matched.insert(target.key(), (record.clone(), Strategy::WorkspaceId));
            }
        }
    }

    // 2+3. name matching against the bulk listing, fetched at most once
    // per run and reused read-only from here on
    let mut listing: Vec<WorkspaceRecord> = Vec::new();
    if targets.iter().any(|t| !matched.contains_key(&t.key())) {
        listing = api.list_all().await?;
        events.push(RunEvent::ListingFetched {
            count: listing.len(),
        });

        let mut by_computer: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_user: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, record) in listing.iter().enumerate() {
            if let Some(name) = &record.computer_name {
                by_computer.entry(name.to_lowercase()).or_default().push(idx);
            }
            if let Some(user) = &record.user_name {
                by_user.entry(user.to_lowercase()).or_default().push(idx);
            }
        }

        for target in targets {
            let key = target.key();
            if matched.contains_key(&key) {
                continue;
            }
            for (index, strategy) in [
                (&by_computer, Strategy::ComputerName),
                (&by_user, Strategy::UserName),
            ] {
                match index.get(&key).map(Vec::as_slice) {
                    Some([only]) => {
                        let record = listing[*only].clone();
                        events.push(RunEvent::Resolved {
                            token: target.raw.clone(),
                            id: record.id.clone(),
                            strategy,
                        });
                        matched.insert(key.clone(), (record, strategy));
                        break;
                    }
                    Some(several) => {
                        // refusing to guess; later strategies are not tried
                        ambiguous.insert(key.clone(), several.len());
                        break;
                    }
                    None => {}
                }
            }
        }
    }

    // 4. Name-tag matching over listing order, bounded by the budget
    let mut budget_exhausted = false;
    if opts.include_tags {
        let mut pending: HashSet<String> = targets
            .iter()
            .map(Target::key)
            .filter(|k| !matched.contains_key(k) && !ambiguous.contains_key(k))
            .collect();
        let raw_by_key: HashMap<String, String> = targets
            .iter()
            .map(|t| (t.key(), t.raw.clone()))
            .collect();

        if !pending.is_empty() {
            let claimed: HashSet<WorkspaceId> =
                matched.values().map(|(r, _)| r.id.clone()).collect();
            let mut budget = opts.max_tag_lookups;

            for record in &listing {
                if pending.is_empty() {
                    break;
                }
                if budget == 0 {
                    budget_exhausted = true;
                    events.push(RunEvent::TagBudgetExhausted {
                        remaining: pending.len(),
                    });
                    break;
                }
                if claimed.contains(&record.id) {
                    continue;
                }

                budget -= 1;
                events.push(RunEvent::TagLookup {
                    id: record.id.clone(),
                    budget_left: budget,
                });
                // tag enrichment is best-effort; a failed lookup costs
                // its budget unit and nothing else
                let Ok(tags) = api.describe_tags(&record.id).await else {
                    continue;
                };

                let Some(tag_name) = tags
                    .get("Name")
                    .or_else(|| tags.get("name"))
                    .map(|v| v.trim().to_lowercase())
                    .filter(|v| !v.is_empty())
                else {
                    continue;
                };
                if pending.remove(&tag_name) {
                    let mut enriched = record.clone();
                    enriched.tags = tags;
                    events.push(RunEvent::Resolved {
                        token: raw_by_key.get(&tag_name).cloned().unwrap_or_default(),
                        id: enriched.id.clone(),
                        strategy: Strategy::NameTag,
                    });
                    matched.insert(tag_name, (enriched, Strategy::NameTag));
                }
            }
        }
    }

    // exactly one resolution per target, in input order
    let mut resolutions = Vec::with_capacity(targets.len());
    for target in targets {
        let key = target.key();
        if let Some((record, strategy)) = matched.get(&key) {
            resolutions.push(Resolution::Matched {
                token: target.raw.clone(),
                record: record.clone(),
                strategy: *strategy,
            });
        } else {
            let reason = if let Some(&matches) = ambiguous.get(&key) {
                UnresolvedReason::Ambiguous { matches }
            } else if budget_exhausted {
                UnresolvedReason::TagBudgetExhausted
            } else {
                UnresolvedReason::NoMatch
            };
            events.push(RunEvent::Unresolved {
                token: target.raw.clone(),
                reason: reason.clone(),
            });
            resolutions.push(Resolution::Unmatched(Unresolved {
                token: target.raw.clone(),
                reason,
            }));
        }
    }

    Ok(ResolveOutput {
        resolutions,
        events,
    })
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
