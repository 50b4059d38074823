//! Group repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use crate::adapters::groups_sea as groups_adapter;
use crate::entities::groups::{GroupPhase, GroupStatus, GroupVisibility};
use crate::errors::domain::{DomainError, NotFoundKind};

pub use crate::adapters::groups_sea::GroupCreate;

/// Group domain model.
///
/// Carries only stored fields; the member count and admin set are
/// query-time aggregates served by `repos::members`.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i64,
    pub created_by: i64,
    pub name: Option<String>,
    pub phase: GroupPhase,
    pub status: GroupStatus,
    pub visibility: GroupVisibility,
    pub min_members: Option<i32>,
    pub max_members: i32,
    pub round_number: i32,
    pub created_at: OffsetDateTime,
    pub activated_at: Option<OffsetDateTime>,
}

impl From<crate::entities::groups::Model> for Group {
    fn from(model: crate::entities::groups::Model) -> Self {
        Self {
            id: model.id,
            created_by: model.created_by,
            name: model.name,
            phase: model.phase,
            status: model.status,
            visibility: model.visibility,
            min_members: model.min_members,
            max_members: model.max_members,
            round_number: model.round_number,
            created_at: model.created_at,
            activated_at: model.activated_at,
        }
    }
}

pub async fn find_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Group>, DomainError> {
    let group = groups_adapter::find_group(conn, id).await?;
    Ok(group.map(Group::from))
}

pub async fn require_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Group, DomainError> {
    find_group(conn, id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Group, format!("group {id}")))
}

pub async fn create_group(
    txn: &DatabaseTransaction,
    dto: GroupCreate,
) -> Result<Group, DomainError> {
    let group = groups_adapter::create_group(txn, dto).await?;
    Ok(Group::from(group))
}

/// Crate-internal: `phase` writes go through `LifecycleService::transition`.
pub(crate) async fn set_phase(
    txn: &DatabaseTransaction,
    id: i64,
    phase: GroupPhase,
) -> Result<Group, DomainError> {
    let group = groups_adapter::set_phase(txn, id, phase).await?;
    Ok(Group::from(group))
}

pub(crate) async fn set_status(
    txn: &DatabaseTransaction,
    id: i64,
    status: GroupStatus,
) -> Result<Group, DomainError> {
    let group = groups_adapter::set_status(txn, id, status).await?;
    Ok(Group::from(group))
}

pub async fn set_round_number(
    txn: &DatabaseTransaction,
    id: i64,
    round_number: i32,
) -> Result<Group, DomainError> {
    let group = groups_adapter::set_round_number(txn, id, round_number).await?;
    Ok(Group::from(group))
}

/// Conditional `PENDING_MEMBERS -> ACTIVE` swap; `true` when this caller
/// won the activation race.
pub async fn activate_pending(
    txn: &DatabaseTransaction,
    group_id: i64,
    now: OffsetDateTime,
) -> Result<bool, DomainError> {
    let rows = groups_adapter::activate_pending(txn, group_id, now).await?;
    Ok(rows == 1)
}
