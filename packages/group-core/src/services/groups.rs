//! Group creation service.

use sea_orm::DatabaseTransaction;
use tracing::info;

use crate::domain::quorum;
use crate::entities::group_members::MemberRole;
use crate::entities::groups::{GroupPhase, GroupVisibility};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::groups::{Group, GroupCreate};
use crate::repos::{groups, members};
use crate::services::lifecycle::LifecycleService;

/// Caller-supplied settings for a new group.
#[derive(Debug, Clone)]
pub struct GroupSpec {
    pub name: Option<String>,
    pub min_members: Option<i32>,
    pub max_members: i32,
}

pub struct GroupService;

impl GroupService {
    pub fn new() -> Self {
        Self
    }

    /// Create a group in its forming state.
    ///
    /// The group starts private and pending; the creator becomes the first
    /// member with the creator role. The phase is walked
    /// `INITIAL -> PENDING_MEMBERS` through the single-writer transition
    /// path, and the quorum trigger runs once (a quorum of one activates
    /// immediately).
    pub async fn create_group(
        &self,
        txn: &DatabaseTransaction,
        created_by: i64,
        spec: GroupSpec,
    ) -> Result<Group, DomainError> {
        if spec.max_members < 1 {
            return Err(DomainError::validation(
                ValidationKind::InvalidMemberBounds,
                "max_members must be at least 1",
            ));
        }
        let min = quorum::effective_quorum(spec.min_members);
        if min < 1 || min > spec.max_members {
            return Err(DomainError::validation(
                ValidationKind::InvalidMemberBounds,
                format!("min_members {min} must be within 1..={}", spec.max_members),
            ));
        }

        let group = groups::create_group(
            txn,
            GroupCreate {
                created_by,
                name: spec.name,
                visibility: GroupVisibility::Private,
                min_members: spec.min_members,
                max_members: spec.max_members,
            },
        )
        .await?;

        members::create_membership(txn, group.id, created_by, MemberRole::Creator).await?;

        let lifecycle = LifecycleService::new();
        let group = lifecycle
            .transition(txn, group.id, GroupPhase::PendingMembers)
            .await?;
        lifecycle.try_activate(txn, group.id).await?;

        info!(group_id = group.id, created_by, "group created");
        groups::require_group(txn, group.id).await
    }
}

impl Default for GroupService {
    fn default() -> Self {
        Self::new()
    }
}
