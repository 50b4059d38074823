//! SeaORM adapter for group memberships.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::group_members;
use crate::entities::group_members::MemberRole;

pub mod dto;

pub use dto::MembershipCreate;

pub async fn find_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
    user_id: i64,
) -> Result<Option<group_members::Model>, sea_orm::DbErr> {
    group_members::Entity::find()
        .filter(group_members::Column::GroupId.eq(group_id))
        .filter(group_members::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

pub async fn create_membership(
    txn: &DatabaseTransaction,
    dto: MembershipCreate,
) -> Result<group_members::Model, sea_orm::DbErr> {
    let membership_active = group_members::ActiveModel {
        id: NotSet,
        group_id: Set(dto.group_id),
        user_id: Set(dto.user_id),
        role: Set(dto.role),
        joined_at: Set(OffsetDateTime::now_utc()),
    };

    membership_active.insert(txn).await
}

/// All members of a group in join order.
pub async fn find_all_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<group_members::Model>, sea_orm::DbErr> {
    group_members::Entity::find()
        .filter(group_members::Column::GroupId.eq(group_id))
        .order_by_asc(group_members::Column::JoinedAt)
        .order_by_asc(group_members::Column::Id)
        .all(conn)
        .await
}

/// Live member count; this is the only source of truth for group size.
pub async fn count_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    group_members::Entity::find()
        .filter(group_members::Column::GroupId.eq(group_id))
        .count(conn)
        .await
}

/// User ids of members with an elevated role (creator or admin).
pub async fn find_elevated_user_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    let rows = group_members::Entity::find()
        .filter(group_members::Column::GroupId.eq(group_id))
        .filter(group_members::Column::Role.is_in([MemberRole::Creator, MemberRole::Admin]))
        .order_by_asc(group_members::Column::Id)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|m| m.user_id).collect())
}
