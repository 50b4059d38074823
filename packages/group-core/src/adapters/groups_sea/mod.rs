//! SeaORM adapter for the groups collection.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, Set,
};
use time::OffsetDateTime;

use crate::entities::groups;
use crate::entities::groups::{GroupPhase, GroupStatus, GroupVisibility};

pub mod dto;

pub use dto::GroupCreate;

pub async fn find_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<groups::Model>, sea_orm::DbErr> {
    groups::Entity::find_by_id(id).one(conn).await
}

pub async fn create_group(
    txn: &DatabaseTransaction,
    dto: GroupCreate,
) -> Result<groups::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let group_active = groups::ActiveModel {
        id: NotSet,
        created_by: Set(dto.created_by),
        name: Set(dto.name),
        phase: Set(GroupPhase::Initial),
        status: Set(GroupStatus::PendingMembers),
        visibility: Set(dto.visibility),
        min_members: Set(dto.min_members),
        max_members: Set(dto.max_members),
        round_number: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
        activated_at: Set(None),
    };

    group_active.insert(txn).await
}

pub(crate) async fn set_phase(
    txn: &DatabaseTransaction,
    id: i64,
    phase: GroupPhase,
) -> Result<groups::Model, sea_orm::DbErr> {
    let group = groups::ActiveModel {
        id: Set(id),
        created_by: NotSet,
        name: NotSet,
        phase: Set(phase),
        status: NotSet,
        visibility: NotSet,
        min_members: NotSet,
        max_members: NotSet,
        round_number: NotSet,
        created_at: NotSet,
        updated_at: Set(OffsetDateTime::now_utc()),
        activated_at: NotSet,
    };
    group.update(txn).await
}

pub(crate) async fn set_status(
    txn: &DatabaseTransaction,
    id: i64,
    status: GroupStatus,
) -> Result<groups::Model, sea_orm::DbErr> {
    let group = groups::ActiveModel {
        id: Set(id),
        created_by: NotSet,
        name: NotSet,
        phase: NotSet,
        status: Set(status),
        visibility: NotSet,
        min_members: NotSet,
        max_members: NotSet,
        round_number: NotSet,
        created_at: NotSet,
        updated_at: Set(OffsetDateTime::now_utc()),
        activated_at: NotSet,
    };
    group.update(txn).await
}

pub async fn set_round_number(
    txn: &DatabaseTransaction,
    id: i64,
    round_number: i32,
) -> Result<groups::Model, sea_orm::DbErr> {
    let group = groups::ActiveModel {
        id: Set(id),
        created_by: NotSet,
        name: NotSet,
        phase: NotSet,
        status: NotSet,
        visibility: NotSet,
        min_members: NotSet,
        max_members: NotSet,
        round_number: Set(round_number),
        created_at: NotSet,
        updated_at: Set(OffsetDateTime::now_utc()),
        activated_at: NotSet,
    };
    group.update(txn).await
}

/// Atomic conditional activation, keyed on `status`.
///
/// Issued as a single `UPDATE .. WHERE id = ? AND status = 'PENDING_MEMBERS'`
/// so concurrent quorum observers race on the row update itself, not on a
/// read-then-write pair. Returns the number of rows updated: 1 when this
/// caller won the race, 0 when the group was already activated.
pub async fn activate_pending(
    txn: &DatabaseTransaction,
    group_id: i64,
    now: OffsetDateTime,
) -> Result<u64, sea_orm::DbErr> {
    let result = groups::Entity::update_many()
        .col_expr(groups::Column::Status, Expr::value(GroupStatus::Active))
        .col_expr(groups::Column::Phase, Expr::value(GroupPhase::Negotiation))
        .col_expr(
            groups::Column::Visibility,
            Expr::value(GroupVisibility::Public),
        )
        .col_expr(groups::Column::ActivatedAt, Expr::value(Some(now)))
        .col_expr(groups::Column::UpdatedAt, Expr::value(now))
        .filter(groups::Column::Id.eq(group_id))
        .filter(groups::Column::Status.eq(GroupStatus::PendingMembers))
        .exec(txn)
        .await?;
    Ok(result.rows_affected)
}
