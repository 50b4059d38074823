//! SeaORM adapter for negotiation tracker phase records.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::negotiation_phases;
use crate::entities::negotiation_phases::{
    NegotiationPhaseId, NegotiationPhaseStatus, RequirementList,
};

#[derive(Debug, Clone)]
pub struct PhaseRecordCreate {
    pub group_id: i64,
    pub phase_id: NegotiationPhaseId,
    pub status: NegotiationPhaseStatus,
    pub requirements: Vec<String>,
    pub started_at: Option<OffsetDateTime>,
}

pub async fn create_phase_record(
    txn: &DatabaseTransaction,
    dto: PhaseRecordCreate,
) -> Result<negotiation_phases::Model, sea_orm::DbErr> {
    let record_active = negotiation_phases::ActiveModel {
        id: NotSet,
        group_id: Set(dto.group_id),
        phase_id: Set(dto.phase_id),
        status: Set(dto.status),
        requirements: Set(RequirementList(dto.requirements)),
        started_at: Set(dto.started_at),
        ended_at: Set(None),
    };

    record_active.insert(txn).await
}

/// Records in sequence order (seeding order = insertion order).
pub async fn find_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<negotiation_phases::Model>, sea_orm::DbErr> {
    negotiation_phases::Entity::find()
        .filter(negotiation_phases::Column::GroupId.eq(group_id))
        .order_by_asc(negotiation_phases::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_group_and_phase<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
    phase_id: NegotiationPhaseId,
) -> Result<Option<negotiation_phases::Model>, sea_orm::DbErr> {
    negotiation_phases::Entity::find()
        .filter(negotiation_phases::Column::GroupId.eq(group_id))
        .filter(negotiation_phases::Column::PhaseId.eq(phase_id))
        .one(conn)
        .await
}

pub async fn count_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    negotiation_phases::Entity::find()
        .filter(negotiation_phases::Column::GroupId.eq(group_id))
        .count(conn)
        .await
}

pub async fn mark_completed(
    txn: &DatabaseTransaction,
    id: i64,
    ended_at: OffsetDateTime,
) -> Result<negotiation_phases::Model, sea_orm::DbErr> {
    let record = negotiation_phases::ActiveModel {
        id: Set(id),
        group_id: NotSet,
        phase_id: NotSet,
        status: Set(NegotiationPhaseStatus::Completed),
        requirements: NotSet,
        started_at: NotSet,
        ended_at: Set(Some(ended_at)),
    };
    record.update(txn).await
}

pub async fn mark_active(
    txn: &DatabaseTransaction,
    id: i64,
    started_at: OffsetDateTime,
) -> Result<negotiation_phases::Model, sea_orm::DbErr> {
    let record = negotiation_phases::ActiveModel {
        id: Set(id),
        group_id: NotSet,
        phase_id: NotSet,
        status: Set(NegotiationPhaseStatus::Active),
        requirements: NotSet,
        started_at: Set(Some(started_at)),
        ended_at: NotSet,
    };
    record.update(txn).await
}

pub async fn delete_by_group(
    txn: &DatabaseTransaction,
    group_id: i64,
) -> Result<(), sea_orm::DbErr> {
    negotiation_phases::Entity::delete_many()
        .filter(negotiation_phases::Column::GroupId.eq(group_id))
        .exec(txn)
        .await?;
    Ok(())
}
