use super::*;
use std::collections::HashSet;
use wsops_adapters::{ApiCall, FakeWorkspaces};
use wsops_core::WorkspaceState;

fn stopped(id: &str) -> WorkspaceRecord {
    WorkspaceRecord {
        id: WorkspaceId::new(id),
        computer_name: None,
        user_name: None,
        state: WorkspaceState::Stopped,
        tags: Default::default(),
    }
}

fn fleet(n: usize) -> Vec<WorkspaceRecord> {
    (0..n).map(|i| stopped(&format!("ws-abc{:08}", i))).collect()
}

#[tokio::test]
async fn batches_are_chunked_at_twenty_five_and_cover_every_id_once() {
    let fake = FakeWorkspaces::new();
    let eligible = fleet(30);

    let out = execute(&fake, &eligible, Action::Start, false).await;

    assert_eq!(fake.op_batch_sizes(), vec![25, 5]);
    assert_eq!(out.outcomes.len(), 30);

    let outcome_ids: HashSet<&str> = out
        .outcomes
        .iter()
        .map(|(r, _)| r.id.as_str())
        .collect();
    assert_eq!(outcome_ids.len(), 30);
    assert!(out
        .outcomes
        .iter()
        .all(|(_, o)| matches!(o, ActionOutcome::Succeeded)));
}

#[tokio::test]
async fn exact_multiple_of_batch_size_has_no_empty_tail_call() {
    let fake = FakeWorkspaces::new();
    let eligible = fleet(50);

    execute(&fake, &eligible, Action::Stop, false).await;

    assert_eq!(fake.op_batch_sizes(), vec![25, 25]);
}

#[tokio::test]
async fn dry_run_reports_success_without_contacting_the_service() {
    let fake = FakeWorkspaces::new();
    let eligible = fleet(30);

    let out = execute(&fake, &eligible, Action::Start, true).await;

    assert!(fake.calls().is_empty());
    assert_eq!(out.outcomes.len(), 30);
    assert!(out
        .outcomes
        .iter()
        .all(|(_, o)| matches!(o, ActionOutcome::Succeeded)));
    assert_eq!(
        out.events
            .iter()
            .filter(|e| matches!(e, RunEvent::DryRun { .. }))
            .count(),
        30
    );
}

#[tokio::test]
async fn per_id_failures_leave_the_rest_of_the_batch_succeeded() {
    let fake = FakeWorkspaces::new();
    let eligible = fleet(3);
    fake.fail_operation(
        &eligible[1].id,
        "OperationInProgress",
        "maintenance window",
    );

    let out = execute(&fake, &eligible, Action::Start, false).await;

    assert!(matches!(out.outcomes[0].1, ActionOutcome::Succeeded));
    match &out.outcomes[1].1 {
        ActionOutcome::Failed { code, message } => {
            assert_eq!(code, "OperationInProgress");
            assert_eq!(message, "maintenance window");
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(matches!(out.outcomes[2].1, ActionOutcome::Succeeded));
}

#[tokio::test]
async fn transport_failure_marks_the_batch_and_execution_continues() {
    let fake = FakeWorkspaces::new();
    let eligible = fleet(30);
    fake.fail_transport_on_op(0);

    let out = execute(&fake, &eligible, Action::Start, false).await;

    // both batches were attempted despite the first one dying
    assert_eq!(fake.op_batch_sizes(), vec![25, 5]);

    let failed: Vec<_> = out
        .outcomes
        .iter()
        .filter(|(_, o)| matches!(o, ActionOutcome::Failed { .. }))
        .collect();
    assert_eq!(failed.len(), 25);
    assert!(failed.iter().all(|(_, o)| matches!(
        o,
        ActionOutcome::Failed { code, .. } if code == TRANSPORT_ERROR
    )));
    assert_eq!(
        out.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, ActionOutcome::Succeeded))
            .count(),
        5
    );
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, RunEvent::BatchFailed { index: 0, .. })));
}

#[tokio::test]
async fn stop_uses_the_stop_operation() {
    let fake = FakeWorkspaces::new();
    let eligible = fleet(1);

    execute(&fake, &eligible, Action::Stop, false).await;

    assert!(matches!(fake.calls()[0], ApiCall::Stop { .. }));
}

#[tokio::test]
async fn non_executing_actions_and_empty_sets_are_no_ops() {
    let fake = FakeWorkspaces::new();

    let out = execute(&fake, &fleet(2), Action::Status, false).await;
    assert!(out.outcomes.is_empty());

    let out = execute(&fake, &[], Action::Start, false).await;
    assert!(out.outcomes.is_empty());

    assert!(fake.calls().is_empty());
}
