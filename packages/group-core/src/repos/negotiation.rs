//! Negotiation tracker record repository functions.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use crate::adapters::negotiation_sea as negotiation_adapter;
use crate::adapters::negotiation_sea::PhaseRecordCreate;
use crate::entities::negotiation_phases::{NegotiationPhaseId, NegotiationPhaseStatus};
use crate::errors::domain::{DomainError, NotFoundKind};

/// One tracker step of a negotiation round.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseRecord {
    pub id: i64,
    pub group_id: i64,
    pub phase_id: NegotiationPhaseId,
    pub status: NegotiationPhaseStatus,
    /// Informational checklist; never enforced.
    pub requirements: Vec<String>,
    pub started_at: Option<OffsetDateTime>,
    pub ended_at: Option<OffsetDateTime>,
}

impl From<crate::entities::negotiation_phases::Model> for PhaseRecord {
    fn from(model: crate::entities::negotiation_phases::Model) -> Self {
        Self {
            id: model.id,
            group_id: model.group_id,
            phase_id: model.phase_id,
            status: model.status,
            requirements: model.requirements.0,
            started_at: model.started_at,
            ended_at: model.ended_at,
        }
    }
}

pub async fn create_record(
    txn: &DatabaseTransaction,
    dto: PhaseRecordCreate,
) -> Result<PhaseRecord, DomainError> {
    let record = negotiation_adapter::create_phase_record(txn, dto).await?;
    Ok(PhaseRecord::from(record))
}

pub async fn find_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<PhaseRecord>, DomainError> {
    let records = negotiation_adapter::find_by_group(conn, group_id).await?;
    Ok(records.into_iter().map(PhaseRecord::from).collect())
}

pub async fn require_record<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
    phase_id: NegotiationPhaseId,
) -> Result<PhaseRecord, DomainError> {
    let record = negotiation_adapter::find_by_group_and_phase(conn, group_id, phase_id).await?;
    record.map(PhaseRecord::from).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::NegotiationPhase,
            format!("group {group_id} has no {phase_id:?} record"),
        )
    })
}

/// Whether the tracker has been seeded for a group.
pub async fn is_seeded<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<bool, DomainError> {
    let count = negotiation_adapter::count_by_group(conn, group_id).await?;
    Ok(count > 0)
}

pub async fn mark_completed(
    txn: &DatabaseTransaction,
    id: i64,
    ended_at: OffsetDateTime,
) -> Result<PhaseRecord, DomainError> {
    let record = negotiation_adapter::mark_completed(txn, id, ended_at).await?;
    Ok(PhaseRecord::from(record))
}

pub async fn mark_active(
    txn: &DatabaseTransaction,
    id: i64,
    started_at: OffsetDateTime,
) -> Result<PhaseRecord, DomainError> {
    let record = negotiation_adapter::mark_active(txn, id, started_at).await?;
    Ok(PhaseRecord::from(record))
}

/// Clear a finished round's records so a new round can be seeded.
pub async fn clear_group(txn: &DatabaseTransaction, group_id: i64) -> Result<(), DomainError> {
    negotiation_adapter::delete_by_group(txn, group_id).await?;
    Ok(())
}
