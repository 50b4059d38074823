//! Quorum trigger integration tests.
//!
//! Covers the forming-group activation path end to end: threshold
//! detection after joins, the atomic status swap, and the election ballot
//! plus announcement side effects of the winning caller.

mod common;

use group_core::entities::groups::{GroupPhase, GroupStatus, GroupVisibility};
use group_core::repos::{announcements, voting};
use group_core::services::MembershipService;
use group_core::ActivationOutcome;
use sea_orm::TransactionTrait;

#[tokio::test]
async fn activation_fires_exactly_at_the_quorum() {
    let db = common::db().await;
    let group = common::create_group(&db, 1, Some(5), 10).await;
    assert_eq!(group.status, GroupStatus::PendingMembers);
    assert_eq!(group.phase, GroupPhase::PendingMembers);

    for user_id in 2..=4 {
        let outcome = common::join(&db, group.id, user_id).await;
        assert_eq!(outcome.activation, ActivationOutcome::BelowQuorum);
    }

    let outcome = common::join(&db, group.id, 5).await;
    let session_id = match outcome.activation {
        ActivationOutcome::Activated { session_id } => session_id,
        other => panic!("fifth member should trip the quorum, got {other:?}"),
    };

    let group = common::reload(&db, group.id).await;
    assert_eq!(group.status, GroupStatus::Active);
    assert_eq!(group.phase, GroupPhase::Negotiation);
    assert_eq!(group.visibility, GroupVisibility::Public);
    let activated_at = group.activated_at.expect("activation timestamp set");

    // One election ballot, candidates in join order, week-long deadline.
    let session = voting::require_session(&db, session_id)
        .await
        .expect("election session exists");
    assert_eq!(session.group_id, group.id);
    assert_eq!(session.created_by, group.created_by);
    assert_eq!(session.options, vec!["1", "2", "3", "4", "5"]);
    assert_eq!(
        session.deadline,
        Some(activated_at + time::Duration::days(7))
    );

    let total = voting::count_sessions_by_group(&db, group.id)
        .await
        .expect("count sessions");
    assert_eq!(total, 1);

    let log = announcements::find_by_group(&db, group.id)
        .await
        .expect("announcement log");
    assert!(
        log.iter().any(|a| a.body.contains("quorum")),
        "activation should be announced, got {log:?}"
    );
}

#[tokio::test]
async fn quorum_of_one_activates_at_creation() {
    let db = common::db().await;
    let group = common::create_group(&db, 42, Some(1), 3).await;

    assert_eq!(group.status, GroupStatus::Active);
    assert_eq!(group.phase, GroupPhase::Negotiation);

    let total = voting::count_sessions_by_group(&db, group.id)
        .await
        .expect("count sessions");
    assert_eq!(total, 1);
}

#[tokio::test]
async fn default_quorum_applies_when_min_members_unset() {
    let db = common::db().await;
    let group = common::create_group(&db, 1, None, 10).await;

    for user_id in 2..=4 {
        let outcome = common::join(&db, group.id, user_id).await;
        assert_eq!(outcome.activation, ActivationOutcome::BelowQuorum);
    }
    assert_eq!(
        common::reload(&db, group.id).await.status,
        GroupStatus::PendingMembers
    );

    let outcome = common::join(&db, group.id, 5).await;
    assert!(matches!(
        outcome.activation,
        ActivationOutcome::Activated { .. }
    ));
}

#[tokio::test]
async fn concurrent_joins_activate_exactly_once() {
    let db = common::db().await;
    let group = common::create_group(&db, 1, Some(5), 10).await;
    for user_id in 2..=4 {
        common::join(&db, group.id, user_id).await;
    }

    // Three racers, any one of which satisfies the quorum.
    let mut handles = Vec::new();
    for user_id in 5..=7 {
        let db = db.clone();
        let group_id = group.id;
        handles.push(tokio::spawn(async move {
            let txn = db.begin().await.expect("begin");
            let outcome = MembershipService::new()
                .join_group(&txn, group_id, user_id)
                .await
                .expect("join group");
            txn.commit().await.expect("commit");
            outcome.activation
        }));
    }

    let mut activated = 0;
    for handle in handles {
        if let ActivationOutcome::Activated { .. } = handle.await.expect("task") {
            activated += 1;
        }
    }
    assert_eq!(activated, 1, "the swap must be won exactly once");

    let total = voting::count_sessions_by_group(&db, group.id)
        .await
        .expect("count sessions");
    assert_eq!(total, 1, "exactly one election ballot");
    assert_eq!(
        common::reload(&db, group.id).await.status,
        GroupStatus::Active
    );
}

#[tokio::test]
async fn joining_an_active_group_does_not_retrigger() {
    let db = common::db().await;
    let group = common::create_group(&db, 1, Some(2), 10).await;
    let outcome = common::join(&db, group.id, 2).await;
    assert!(matches!(
        outcome.activation,
        ActivationOutcome::Activated { .. }
    ));

    let outcome = common::join(&db, group.id, 3).await;
    assert_eq!(outcome.activation, ActivationOutcome::AlreadyDecided);

    let total = voting::count_sessions_by_group(&db, group.id)
        .await
        .expect("count sessions");
    assert_eq!(total, 1);
}
