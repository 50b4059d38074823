//! Membership domain service.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::entities::group_members::MemberRole;
use crate::entities::groups::GroupStatus;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::members::Membership;
use crate::repos::{groups, members};
use crate::services::lifecycle::{ActivationOutcome, LifecycleService};

/// Result of a join: the new row plus whatever the quorum trigger did.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinOutcome {
    pub membership: Membership,
    pub activation: ActivationOutcome,
}

pub struct MembershipService;

impl MembershipService {
    pub fn new() -> Self {
        Self
    }

    /// Add a user to a group and run the quorum trigger.
    ///
    /// Validation happens before the insert; the unique
    /// `(group_id, user_id)` index backstops the membership pre-check
    /// under concurrent duplicate joins.
    pub async fn join_group(
        &self,
        txn: &DatabaseTransaction,
        group_id: i64,
        user_id: i64,
    ) -> Result<JoinOutcome, DomainError> {
        let group = groups::require_group(txn, group_id).await?;

        if group.status == GroupStatus::Closed {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "group is closed to new members",
            ));
        }

        if members::find_membership(txn, group_id, user_id)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyMember,
                format!("user {user_id} is already a member of group {group_id}"),
            ));
        }

        let member_count = members::member_count(txn, group_id).await?;
        if member_count as i64 >= i64::from(group.max_members) {
            return Err(DomainError::validation(
                ValidationKind::GroupFull,
                format!("group {group_id} is at capacity ({})", group.max_members),
            ));
        }

        let membership =
            members::create_membership(txn, group_id, user_id, MemberRole::Member).await?;
        info!(group_id, user_id, "member joined");

        let activation = LifecycleService::new().try_activate(txn, group_id).await?;

        Ok(JoinOutcome {
            membership,
            activation,
        })
    }

    /// Find a user's membership in a specific group.
    pub async fn find_membership<C: sea_orm::ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        group_id: i64,
        user_id: i64,
    ) -> Result<Option<Membership>, DomainError> {
        members::find_membership(conn, group_id, user_id).await
    }
}

impl Default for MembershipService {
    fn default() -> Self {
        Self::new()
    }
}
