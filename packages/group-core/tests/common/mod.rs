//! Shared bootstrap for the integration suites: logging, a migrated
//! in-memory store, and group setup shortcuts.

#![allow(dead_code)]

use group_core::services::groups::GroupSpec;
use group_core::services::membership::JoinOutcome;
use group_core::services::{GroupService, MembershipService};
use group_core::Group;
use sea_orm::{DatabaseConnection, TransactionTrait};

#[ctor::ctor]
fn init_logging() {
    group_test_support::logging::init();
}

pub async fn db() -> DatabaseConnection {
    group_test_support::db::memory_db()
        .await
        .expect("in-memory store should connect and migrate")
}

/// Create a group and commit. Creation also enrolls the creator, so the
/// returned group already has one member.
pub async fn create_group(
    db: &DatabaseConnection,
    created_by: i64,
    min_members: Option<i32>,
    max_members: i32,
) -> Group {
    let txn = db.begin().await.expect("begin");
    let group = GroupService::new()
        .create_group(
            &txn,
            created_by,
            GroupSpec {
                name: Some("integration group".to_string()),
                min_members,
                max_members,
            },
        )
        .await
        .expect("create group");
    txn.commit().await.expect("commit");
    group
}

/// Join a group and commit, returning the membership plus whatever the
/// quorum trigger did.
pub async fn join(db: &DatabaseConnection, group_id: i64, user_id: i64) -> JoinOutcome {
    let txn = db.begin().await.expect("begin");
    let outcome = MembershipService::new()
        .join_group(&txn, group_id, user_id)
        .await
        .expect("join group");
    txn.commit().await.expect("commit");
    outcome
}

pub async fn reload(db: &DatabaseConnection, group_id: i64) -> Group {
    group_core::repos::groups::require_group(db, group_id)
        .await
        .expect("group should exist")
}
