//! Negotiation tracker integration tests: seeding a round, stepping
//! through the fixed sequence, and the guards around both.

mod common;

use group_core::entities::negotiation_phases::{NegotiationPhaseId, NegotiationPhaseStatus};
use group_core::errors::domain::{DomainError, ValidationKind};
use group_core::services::NegotiationService;
use sea_orm::{DatabaseConnection, TransactionTrait};

async fn activated_group(db: &DatabaseConnection) -> i64 {
    // Quorum of one: active and in NEGOTIATION straight from creation,
    // tracker not yet seeded.
    common::create_group(db, 1, Some(1), 5).await.id
}

#[tokio::test]
async fn starting_a_round_seeds_the_tracker() {
    let db = common::db().await;
    let group_id = activated_group(&db).await;
    let service = NegotiationService::new();

    assert!(service
        .can_start_negotiations(&db, group_id)
        .await
        .expect("predicate"));

    let txn = db.begin().await.expect("begin");
    let records = service
        .start_negotiations(&txn, group_id)
        .await
        .expect("start");
    txn.commit().await.expect("commit");

    let ids: Vec<NegotiationPhaseId> = records.iter().map(|r| r.phase_id).collect();
    assert_eq!(
        ids,
        vec![
            NegotiationPhaseId::Preparation,
            NegotiationPhaseId::Proposal,
            NegotiationPhaseId::Negotiation,
            NegotiationPhaseId::Voting,
            NegotiationPhaseId::Contracting,
        ]
    );
    assert_eq!(records[0].status, NegotiationPhaseStatus::Active);
    assert!(records[0].started_at.is_some());
    for record in &records[1..] {
        assert_eq!(record.status, NegotiationPhaseStatus::Pending);
        assert!(record.started_at.is_none());
        assert!(!record.requirements.is_empty());
    }

    assert_eq!(common::reload(&db, group_id).await.round_number, 1);

    // Seeded and in negotiation: no second round from here.
    assert!(!service
        .can_start_negotiations(&db, group_id)
        .await
        .expect("predicate"));
    let txn = db.begin().await.expect("begin");
    let err = service
        .start_negotiations(&txn, group_id)
        .await
        .expect_err("double start must be rejected");
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
    txn.rollback().await.expect("rollback");
}

#[tokio::test]
async fn advancing_steps_through_the_sequence_once() {
    let db = common::db().await;
    let group_id = activated_group(&db).await;
    let service = NegotiationService::new();

    let txn = db.begin().await.expect("begin");
    service
        .start_negotiations(&txn, group_id)
        .await
        .expect("start");
    txn.commit().await.expect("commit");

    let steps = [
        (NegotiationPhaseId::Preparation, NegotiationPhaseId::Proposal),
        (NegotiationPhaseId::Proposal, NegotiationPhaseId::Negotiation),
        (NegotiationPhaseId::Negotiation, NegotiationPhaseId::Voting),
        (NegotiationPhaseId::Voting, NegotiationPhaseId::Contracting),
    ];
    for (current, expected_next) in steps {
        let txn = db.begin().await.expect("begin");
        let next = service
            .advance(&txn, group_id, current)
            .await
            .expect("advance")
            .expect("a next step exists");
        txn.commit().await.expect("commit");
        assert_eq!(next.phase_id, expected_next);
        assert_eq!(next.status, NegotiationPhaseStatus::Active);
        assert!(next.started_at.is_some());
    }

    // Advancing past the last step is a quiet no-op.
    let txn = db.begin().await.expect("begin");
    let next = service
        .advance(&txn, group_id, NegotiationPhaseId::Contracting)
        .await
        .expect("advance");
    txn.commit().await.expect("commit");
    assert!(next.is_none());

    let records = service
        .phase_records(&db, group_id)
        .await
        .expect("records");
    let completed = records
        .iter()
        .filter(|r| r.status == NegotiationPhaseStatus::Completed)
        .count();
    assert_eq!(completed, 4);
    let last = records
        .iter()
        .find(|r| r.phase_id == NegotiationPhaseId::Contracting)
        .expect("contracting record");
    assert_eq!(last.status, NegotiationPhaseStatus::Active);
    assert!(last.ended_at.is_none());
}

#[tokio::test]
async fn advance_requires_the_active_step() {
    let db = common::db().await;
    let group_id = activated_group(&db).await;
    let service = NegotiationService::new();

    let txn = db.begin().await.expect("begin");
    service
        .start_negotiations(&txn, group_id)
        .await
        .expect("start");
    txn.commit().await.expect("commit");

    // VOTING is still pending; it cannot be the step being advanced.
    let txn = db.begin().await.expect("begin");
    let err = service
        .advance(&txn, group_id, NegotiationPhaseId::Voting)
        .await
        .expect_err("pending step must not advance");
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
    txn.rollback().await.expect("rollback");
}

#[tokio::test]
async fn tracker_is_gated_on_the_negotiation_phase() {
    let db = common::db().await;
    // Quorum not reached: still PENDING_MEMBERS.
    let group = common::create_group(&db, 1, Some(3), 6).await;
    let service = NegotiationService::new();

    assert!(!service
        .can_start_negotiations(&db, group.id)
        .await
        .expect("predicate"));

    let txn = db.begin().await.expect("begin");
    let err = service
        .start_negotiations(&txn, group.id)
        .await
        .expect_err("forming group cannot negotiate");
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
    let err = service
        .advance(&txn, group.id, NegotiationPhaseId::Preparation)
        .await
        .expect_err("tracker only advances in negotiation");
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PhaseMismatch, _)
    ));
    txn.rollback().await.expect("rollback");
}
