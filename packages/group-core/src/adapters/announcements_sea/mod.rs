//! SeaORM adapter for the system announcement log.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::group_announcements;

pub async fn append(
    txn: &DatabaseTransaction,
    group_id: i64,
    body: String,
) -> Result<group_announcements::Model, sea_orm::DbErr> {
    let announcement_active = group_announcements::ActiveModel {
        id: NotSet,
        group_id: Set(group_id),
        body: Set(body),
        created_at: Set(OffsetDateTime::now_utc()),
    };

    announcement_active.insert(txn).await
}

pub async fn find_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<group_announcements::Model>, sea_orm::DbErr> {
    group_announcements::Entity::find()
        .filter(group_announcements::Column::GroupId.eq(group_id))
        .order_by_asc(group_announcements::Column::Id)
        .all(conn)
        .await
}
