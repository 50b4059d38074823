//! SeaORM adapter for ballot sessions and votes.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::voting_sessions::{SessionOptions, SessionStatus};
use crate::entities::{votes, voting_sessions};

pub mod dto;

pub use dto::SessionCreate;

pub async fn find_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<voting_sessions::Model>, sea_orm::DbErr> {
    voting_sessions::Entity::find_by_id(id).one(conn).await
}

pub async fn create_session(
    txn: &DatabaseTransaction,
    dto: SessionCreate,
) -> Result<voting_sessions::Model, sea_orm::DbErr> {
    let session_active = voting_sessions::ActiveModel {
        id: NotSet,
        group_id: Set(dto.group_id),
        title: Set(dto.title),
        description: Set(dto.description),
        options: Set(SessionOptions(dto.options)),
        deadline: Set(dto.deadline),
        status: Set(SessionStatus::Active),
        created_by: Set(dto.created_by),
        created_at: Set(OffsetDateTime::now_utc()),
    };

    session_active.insert(txn).await
}

/// Sessions of a group, each paired with its votes, newest session first.
pub async fn find_sessions_with_votes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<(voting_sessions::Model, Vec<votes::Model>)>, sea_orm::DbErr> {
    voting_sessions::Entity::find()
        .filter(voting_sessions::Column::GroupId.eq(group_id))
        .order_by_desc(voting_sessions::Column::Id)
        .find_with_related(votes::Entity)
        .all(conn)
        .await
}

pub async fn count_sessions_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    voting_sessions::Entity::find()
        .filter(voting_sessions::Column::GroupId.eq(group_id))
        .count(conn)
        .await
}

pub async fn close_session(
    txn: &DatabaseTransaction,
    id: i64,
) -> Result<voting_sessions::Model, sea_orm::DbErr> {
    let session = voting_sessions::ActiveModel {
        id: Set(id),
        group_id: NotSet,
        title: NotSet,
        description: NotSet,
        options: NotSet,
        deadline: NotSet,
        status: Set(SessionStatus::Closed),
        created_by: NotSet,
        created_at: NotSet,
    };
    session.update(txn).await
}

/// Append-only vote insert. The unique `(session_id, user_id)` index makes
/// a duplicate insert fail at the store; callers map that to the
/// already-voted conflict.
pub async fn insert_vote(
    txn: &DatabaseTransaction,
    session_id: i64,
    user_id: i64,
    option_selected: String,
) -> Result<votes::Model, sea_orm::DbErr> {
    let vote_active = votes::ActiveModel {
        id: NotSet,
        session_id: Set(session_id),
        user_id: Set(user_id),
        option_selected: Set(option_selected),
        created_at: Set(OffsetDateTime::now_utc()),
    };

    vote_active.insert(txn).await
}

pub async fn find_votes_by_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Vec<votes::Model>, sea_orm::DbErr> {
    votes::Entity::find()
        .filter(votes::Column::SessionId.eq(session_id))
        .order_by_asc(votes::Column::Id)
        .all(conn)
        .await
}

pub async fn count_user_votes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    votes::Entity::find()
        .filter(votes::Column::SessionId.eq(session_id))
        .filter(votes::Column::UserId.eq(user_id))
        .count(conn)
        .await
}
