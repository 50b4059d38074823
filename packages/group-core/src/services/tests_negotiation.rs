//! Round-restart coverage that needs the crate-internal phase setter to
//! stage a group holding stale tracker records.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::entities::groups::GroupPhase;
use crate::repos::groups;
use crate::services::groups::{GroupService, GroupSpec};
use crate::services::NegotiationService;

async fn activated_group(db: &DatabaseConnection) -> i64 {
    let txn = db.begin().await.expect("begin");
    let group = GroupService::new()
        .create_group(
            &txn,
            1,
            GroupSpec {
                name: None,
                min_members: Some(1),
                max_members: 5,
            },
        )
        .await
        .expect("create group");
    txn.commit().await.expect("commit");
    group.id
}

#[tokio::test]
async fn restarting_replaces_stale_records_and_bumps_the_round() {
    let db = group_test_support::db::memory_db()
        .await
        .expect("in-memory store");
    let group_id = activated_group(&db).await;
    let service = NegotiationService::new();

    let txn = db.begin().await.expect("begin");
    let first_round = service
        .start_negotiations(&txn, group_id)
        .await
        .expect("start");
    // A group that moved on with its round one records intact.
    groups::set_phase(&txn, group_id, GroupPhase::Active)
        .await
        .expect("set phase");
    txn.commit().await.expect("commit");

    assert!(service
        .can_start_negotiations(&db, group_id)
        .await
        .expect("predicate"));

    let txn = db.begin().await.expect("begin");
    let second_round = service
        .start_negotiations(&txn, group_id)
        .await
        .expect("restart");
    txn.commit().await.expect("commit");

    let group = groups::require_group(&db, group_id).await.expect("group");
    assert_eq!(group.phase, GroupPhase::Negotiation);
    assert_eq!(group.round_number, 2);

    // Fresh records, not round one's.
    let stale: Vec<i64> = first_round.iter().map(|r| r.id).collect();
    for record in &second_round {
        assert!(!stale.contains(&record.id));
    }
    assert_eq!(
        service
            .phase_records(&db, group_id)
            .await
            .expect("records")
            .len(),
        5
    );
}
