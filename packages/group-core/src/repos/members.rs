//! Membership repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction, SqlErr};
use time::OffsetDateTime;

use crate::adapters::members_sea as members_adapter;
use crate::adapters::members_sea::MembershipCreate;
use crate::entities::group_members::MemberRole;
use crate::errors::domain::{ConflictKind, DomainError};

/// Group membership domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub id: i64,
    pub group_id: i64,
    pub user_id: i64,
    pub role: MemberRole,
    pub joined_at: OffsetDateTime,
}

impl From<crate::entities::group_members::Model> for Membership {
    fn from(model: crate::entities::group_members::Model) -> Self {
        Self {
            id: model.id,
            group_id: model.group_id,
            user_id: model.user_id,
            role: model.role,
            joined_at: model.joined_at,
        }
    }
}

pub async fn find_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
    user_id: i64,
) -> Result<Option<Membership>, DomainError> {
    let membership = members_adapter::find_membership(conn, group_id, user_id).await?;
    Ok(membership.map(Membership::from))
}

/// Insert a membership row. The unique `(group_id, user_id)` index is the
/// backstop against concurrent duplicate joins; a violation surfaces as an
/// already-member conflict rather than a raw store error.
pub async fn create_membership(
    txn: &DatabaseTransaction,
    group_id: i64,
    user_id: i64,
    role: MemberRole,
) -> Result<Membership, DomainError> {
    let dto = MembershipCreate {
        group_id,
        user_id,
        role,
    };
    match members_adapter::create_membership(txn, dto).await {
        Ok(membership) => Ok(Membership::from(membership)),
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(DomainError::conflict(
                ConflictKind::AlreadyMember,
                format!("user {user_id} is already a member of group {group_id}"),
            )),
            _ => Err(DomainError::from(e)),
        },
    }
}

/// All members in join order.
pub async fn find_all_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<Membership>, DomainError> {
    let memberships = members_adapter::find_all_by_group(conn, group_id).await?;
    Ok(memberships.into_iter().map(Membership::from).collect())
}

/// Live count of member rows; never read from a stored aggregate.
pub async fn member_count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<u64, DomainError> {
    Ok(members_adapter::count_by_group(conn, group_id).await?)
}

/// Derived admin set: user ids of creator/admin members.
pub async fn admin_user_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(members_adapter::find_elevated_user_ids(conn, group_id).await?)
}
