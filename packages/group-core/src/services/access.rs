//! Access evaluation service.
//!
//! Thin I/O shell around the pure capability evaluator: loads the group,
//! the caller's membership, and the live member count, then delegates to
//! `domain::capabilities`.

use sea_orm::ConnectionTrait;

use crate::domain::capabilities::AccessContext;
use crate::errors::domain::DomainError;
use crate::repos::{groups, members};

/// Snapshot of what a given user may see on a given group.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessEvaluation {
    /// Live member count at query time.
    pub member_count: u64,
    /// Derived admin set: user ids of creator/admin members, in join
    /// order. Recomputed from member rows on every evaluation.
    pub admins: Vec<i64>,
    pub capabilities: Vec<(&'static str, bool)>,
    pub can_edit: bool,
    pub can_view: bool,
}

pub struct AccessService;

impl AccessService {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the evaluation context from live store state.
    ///
    /// `user_id` is `None` for anonymous callers. The member count is
    /// always recomputed from member rows.
    pub async fn context<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        group_id: i64,
        user_id: Option<i64>,
    ) -> Result<AccessContext, DomainError> {
        let group = groups::require_group(conn, group_id).await?;
        let membership = match user_id {
            Some(uid) => members::find_membership(conn, group_id, uid)
                .await?
                .map(|m| m.role),
            None => None,
        };
        let member_count = members::member_count(conn, group_id).await?;

        Ok(AccessContext {
            phase: group.phase,
            status: group.status,
            visibility: group.visibility,
            membership,
            member_count,
            max_members: group.max_members,
        })
    }

    /// Full capability map plus edit/view rights for one user.
    pub async fn evaluate<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        group_id: i64,
        user_id: Option<i64>,
    ) -> Result<AccessEvaluation, DomainError> {
        let ctx = self.context(conn, group_id, user_id).await?;
        let admins = members::admin_user_ids(conn, group_id).await?;
        Ok(AccessEvaluation {
            member_count: ctx.member_count,
            admins,
            capabilities: ctx.capability_map(),
            can_edit: ctx.can_edit(),
            can_view: ctx.can_view(),
        })
    }

    /// Single string-keyed capability query; unknown keys are `false`.
    pub async fn allows<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        group_id: i64,
        user_id: Option<i64>,
        capability_key: &str,
    ) -> Result<bool, DomainError> {
        let ctx = self.context(conn, group_id, user_id).await?;
        Ok(ctx.allows_key(capability_key))
    }
}

impl Default for AccessService {
    fn default() -> Self {
        Self::new()
    }
}
