use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Primary lifecycle position of a group.
///
/// This is distinct from the negotiation tracker's phase sequence
/// (see `negotiation_phases`); the two must not be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "group_phase")]
pub enum GroupPhase {
    #[sea_orm(string_value = "INITIAL")]
    Initial,
    #[sea_orm(string_value = "PENDING_MEMBERS")]
    PendingMembers,
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "NEGOTIATION")]
    Negotiation,
    #[sea_orm(string_value = "VOTE_ADMINS")]
    VoteAdmins,
    #[sea_orm(string_value = "CONTRACTING")]
    Contracting,
    #[sea_orm(string_value = "SUPERVISED")]
    Supervised,
    #[sea_orm(string_value = "UNDER_ARBITRATION")]
    UnderArbitration,
    #[sea_orm(string_value = "CLOSED")]
    Closed,
}

/// Coarse lifecycle status, tracked independently of `phase`.
///
/// The quorum trigger's compare-and-swap is keyed on this column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "group_status")]
pub enum GroupStatus {
    #[sea_orm(string_value = "PENDING_MEMBERS")]
    PendingMembers,
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "CLOSED")]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "group_visibility")]
pub enum GroupVisibility {
    #[sea_orm(string_value = "PRIVATE")]
    Private,
    #[sea_orm(string_value = "PUBLIC")]
    Public,
}

/// Note: there is deliberately no `member_count` column. The count is a
/// query-time aggregate over `group_members`; storing it would let it drift.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "created_by")]
    pub created_by: i64,
    pub name: Option<String>,
    pub phase: GroupPhase,
    pub status: GroupStatus,
    pub visibility: GroupVisibility,
    #[sea_orm(column_name = "min_members")]
    pub min_members: Option<i32>,
    #[sea_orm(column_name = "max_members")]
    pub max_members: i32,
    #[sea_orm(column_name = "round_number")]
    pub round_number: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
    #[sea_orm(column_name = "activated_at")]
    pub activated_at: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::group_members::Entity")]
    GroupMembers,
    #[sea_orm(has_many = "super::voting_sessions::Entity")]
    VotingSessions,
}

impl Related<super::group_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupMembers.def()
    }
}

impl Related<super::voting_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VotingSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
