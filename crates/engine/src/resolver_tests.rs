use super::*;
use wsops_adapters::{ApiCall, FakeWorkspaces};
use wsops_core::WorkspaceState;

fn record(id: &str, computer: Option<&str>, user: Option<&str>) -> WorkspaceRecord {
    WorkspaceRecord {
        id: WorkspaceId::new(id),
        computer_name: computer.map(str::to_string),
        user_name: user.map(str::to_string),
        state: WorkspaceState::Available,
        tags: Default::default(),
    }
}

fn targets(tokens: &[&str]) -> TargetList {
    TargetList::parse(Some(&tokens.join(",")), None).unwrap()
}

fn opts() -> ResolveOptions {
    ResolveOptions::default()
}

fn with_tags(max: usize) -> ResolveOptions {
    ResolveOptions {
        include_tags: true,
        max_tag_lookups: max,
    }
}

#[tokio::test]
async fn id_tokens_resolve_without_touching_the_listing() {
    let fake = FakeWorkspaces::new();
    fake.seed(record("ws-abc123def0", Some("DESKTOP-1"), None));

    let out = resolve(&fake, &targets(&["ws-abc123def0"]), &opts())
        .await
        .unwrap();

    assert!(out.resolutions[0].is_matched());
    assert!(matches!(
        out.resolutions[0],
        Resolution::Matched {
            strategy: Strategy::WorkspaceId,
            ..
        }
    ));
    assert_eq!(fake.listing_count(), 0);
}

#[tokio::test]
async fn id_lookups_are_batched_in_chunks_of_twenty_five() {
    let fake = FakeWorkspaces::new();
    let tokens: Vec<String> = (0..30).map(|i| format!("ws-abc{:08}", i)).collect();
    for t in &tokens {
        fake.seed(record(t, None, None));
    }
    let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();

    let out = resolve(&fake, &targets(&refs), &opts()).await.unwrap();

    assert!(out.resolutions.iter().all(Resolution::is_matched));
    let describe_sizes: Vec<usize> = fake
        .calls()
        .iter()
        .filter_map(|c| match c {
            ApiCall::Describe { ids } => Some(ids.len()),
            _ => None,
        })
        .collect();
    assert_eq!(describe_sizes, vec![25, 5]);
}

#[tokio::test]
async fn computer_name_matches_case_insensitively() {
    let fake = FakeWorkspaces::new();
    fake.seed(record("ws-abc123def0", Some("DESKTOP-1"), Some("jdoe")));

    let out = resolve(&fake, &targets(&["desktop-1"]), &opts())
        .await
        .unwrap();

    match &out.resolutions[0] {
        Resolution::Matched {
            record, strategy, ..
        } => {
            assert_eq!(record.id.as_str(), "ws-abc123def0");
            assert_eq!(*strategy, Strategy::ComputerName);
        }
        other => panic!("expected a match, got {other:?}"),
    }
}

#[tokio::test]
async fn user_name_is_tried_after_computer_name() {
    let fake = FakeWorkspaces::new();
    fake.seed(record("ws-abc123def0", Some("DESKTOP-1"), Some("jdoe")));

    let out = resolve(&fake, &targets(&["JDOE"]), &opts()).await.unwrap();

    assert!(matches!(
        out.resolutions[0],
        Resolution::Matched {
            strategy: Strategy::UserName,
            ..
        }
    ));
}

#[tokio::test]
async fn id_strategy_beats_a_colliding_computer_name() {
    let fake = FakeWorkspaces::new();
    fake.seed(record("ws-abc123def0", Some("DESKTOP-1"), None));
    // another workspace whose computer name happens to spell an id
    fake.seed(record("ws-def456abc1", Some("ws-abc123def0"), None));

    let out = resolve(&fake, &targets(&["ws-abc123def0"]), &opts())
        .await
        .unwrap();

    match &out.resolutions[0] {
        Resolution::Matched {
            record, strategy, ..
        } => {
            assert_eq!(record.id.as_str(), "ws-abc123def0");
            assert_eq!(*strategy, Strategy::WorkspaceId);
        }
        other => panic!("expected a match, got {other:?}"),
    }
}

#[tokio::test]
async fn ambiguous_computer_name_never_falls_through() {
    let fake = FakeWorkspaces::new();
    fake.seed(record("ws-aaaa1111bb", Some("SHARED"), None));
    fake.seed(record("ws-bbbb2222cc", Some("SHARED"), None));
    // a unique user-name match exists, but ambiguity is terminal
    fake.seed(record("ws-cccc3333dd", None, Some("shared")));

    let out = resolve(&fake, &targets(&["shared"]), &opts()).await.unwrap();

    match &out.resolutions[0] {
        Resolution::Unmatched(u) => {
            assert_eq!(u.reason, UnresolvedReason::Ambiguous { matches: 2 });
        }
        other => panic!("expected unresolved, got {other:?}"),
    }
}

#[tokio::test]
async fn listing_is_fetched_exactly_once_for_many_name_targets() {
    let fake = FakeWorkspaces::new();
    for i in 0..40 {
        fake.seed(record(
            &format!("ws-abc{:08}", i),
            Some(&format!("DESKTOP-{i}")),
            None,
        ));
    }
    let tokens: Vec<String> = (0..40).map(|i| format!("DESKTOP-{i}")).collect();
    let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();

    let out = resolve(&fake, &targets(&refs), &opts()).await.unwrap();

    assert!(out.resolutions.iter().all(Resolution::is_matched));
    assert_eq!(fake.listing_count(), 1);
}

#[tokio::test]
async fn name_tag_matches_when_enabled_and_attaches_tags() {
    let fake = FakeWorkspaces::new();
    fake.seed(record("ws-abc123def0", None, None));
    fake.seed_tags(
        &WorkspaceId::new("ws-abc123def0"),
        [("Name", "build-agent-7"), ("team", "infra")],
    );

    let out = resolve(&fake, &targets(&["build-agent-7"]), &with_tags(10))
        .await
        .unwrap();

    match &out.resolutions[0] {
        Resolution::Matched {
            record, strategy, ..
        } => {
            assert_eq!(*strategy, Strategy::NameTag);
            assert_eq!(record.tags.get("team").map(String::as_str), Some("infra"));
        }
        other => panic!("expected a match, got {other:?}"),
    }
}

#[tokio::test]
async fn tags_are_not_consulted_unless_enabled() {
    let fake = FakeWorkspaces::new();
    fake.seed(record("ws-abc123def0", None, None));
    fake.seed_tags(&WorkspaceId::new("ws-abc123def0"), [("Name", "alpha")]);

    let out = resolve(&fake, &targets(&["alpha"]), &opts()).await.unwrap();

    assert!(!out.resolutions[0].is_matched());
    assert_eq!(fake.tag_lookup_count(), 0);
}

#[tokio::test]
async fn tag_budget_is_a_hard_cap() {
    let fake = FakeWorkspaces::new();
    for i in 0..10 {
        fake.seed(record(&format!("ws-abc{:08}", i), None, None));
    }
    // the only tagged workspace sits beyond the budget
    fake.seed_tags(&WorkspaceId::new("ws-abc00000009"), [("Name", "wanted")]);

    let out = resolve(&fake, &targets(&["wanted"]), &with_tags(3))
        .await
        .unwrap();

    assert_eq!(fake.tag_lookup_count(), 3);
    match &out.resolutions[0] {
        Resolution::Unmatched(u) => {
            assert_eq!(u.reason, UnresolvedReason::TagBudgetExhausted);
        }
        other => panic!("expected unresolved, got {other:?}"),
    }
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, RunEvent::TagBudgetExhausted { remaining: 1 })));
}

#[tokio::test]
async fn unmatched_with_budget_to_spare_is_a_plain_no_match() {
    let fake = FakeWorkspaces::new();
    fake.seed(record("ws-abc123def0", None, None));

    let out = resolve(&fake, &targets(&["ghost"]), &with_tags(100))
        .await
        .unwrap();

    match &out.resolutions[0] {
        Resolution::Unmatched(u) => assert_eq!(u.reason, UnresolvedReason::NoMatch),
        other => panic!("expected unresolved, got {other:?}"),
    }
}

#[tokio::test]
async fn tag_scan_skips_workspaces_already_claimed() {
    let fake = FakeWorkspaces::new();
    fake.seed(record("ws-aaaa1111bb", Some("DESKTOP-1"), None));
    fake.seed(record("ws-bbbb2222cc", None, None));
    fake.seed_tags(&WorkspaceId::new("ws-bbbb2222cc"), [("Name", "alpha")]);

    let out = resolve(&fake, &targets(&["DESKTOP-1", "alpha"]), &with_tags(1))
        .await
        .unwrap();

    // budget of one is enough because the claimed workspace is not fetched
    assert!(out.resolutions.iter().all(Resolution::is_matched));
    assert_eq!(fake.tag_lookup_count(), 1);
}

#[tokio::test]
async fn every_target_gets_exactly_one_resolution_in_input_order() {
    let fake = FakeWorkspaces::new();
    fake.seed(record("ws-abc123def0", Some("DESKTOP-1"), Some("jdoe")));
    fake.seed(record("ws-def456abc1", Some("DESKTOP-2"), None));

    let input = targets(&["DESKTOP-2", "ws-abc123def0", "ghost", "jdoe"]);
    let out = resolve(&fake, &input, &opts()).await.unwrap();

    let tokens: Vec<&str> = out.resolutions.iter().map(Resolution::token).collect();
    assert_eq!(tokens, vec!["DESKTOP-2", "ws-abc123def0", "ghost", "jdoe"]);
    assert_eq!(
        out.resolutions.iter().filter(|r| r.is_matched()).count(),
        3
    );
}

#[tokio::test]
async fn resolution_is_idempotent_on_static_data() {
    let fake = FakeWorkspaces::new();
    fake.seed(record("ws-abc123def0", Some("DESKTOP-1"), Some("jdoe")));
    fake.seed(record("ws-def456abc1", Some("DESKTOP-2"), Some("asmith")));

    let input = targets(&["DESKTOP-1", "asmith", "ghost"]);
    let first = resolve(&fake, &input, &opts()).await.unwrap();
    let second = resolve(&fake, &input, &opts()).await.unwrap();

    assert_eq!(first.resolutions, second.resolutions);
}

#[tokio::test]
async fn listing_failure_is_fatal() {
    let fake = FakeWorkspaces::new();
    fake.fail_listing();

    let result = resolve(&fake, &targets(&["DESKTOP-1"]), &opts()).await;
    assert!(result.is_err());
}
