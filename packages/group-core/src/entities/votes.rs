use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Append-only vote rows. The store enforces a unique
/// `(session_id, user_id)` index, so the first vote wins and a concurrent
/// duplicate insert is rejected rather than overwriting.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "votes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "session_id")]
    pub session_id: i64,
    #[sea_orm(column_name = "user_id")]
    pub user_id: i64,
    #[sea_orm(column_name = "option_selected")]
    pub option_selected: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::voting_sessions::Entity",
        from = "Column::SessionId",
        to = "super::voting_sessions::Column::Id"
    )]
    VotingSession,
}

impl Related<super::voting_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VotingSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
