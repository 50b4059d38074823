//! Group lifecycle orchestration: phase transitions and the quorum trigger.

use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::domain::{phase, quorum};
use crate::entities::groups::{GroupPhase, GroupStatus};
use crate::errors::domain::DomainError;
use crate::repos::voting::SessionCreate;
use crate::repos::{announcements, groups, members, voting};

/// Result of a quorum trigger run.
///
/// Losing the activation race is deliberately not an error: another caller
/// already performed the side effects and this run is a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// This caller won the swap; one election session was created.
    Activated { session_id: i64 },
    /// Membership has not reached the quorum yet.
    BelowQuorum,
    /// The group is no longer pending (already activated, or closed).
    AlreadyDecided,
}

/// Lifecycle domain service. The single writer of `Group.phase`.
pub struct LifecycleService;

impl LifecycleService {
    pub fn new() -> Self {
        Self
    }

    /// Move a group along a declared lifecycle edge.
    ///
    /// Fails closed with `InvalidTransition` before any mutation when the
    /// edge is not part of the graph. Closing a group also closes its
    /// coarse status.
    pub async fn transition(
        &self,
        txn: &DatabaseTransaction,
        group_id: i64,
        target: GroupPhase,
    ) -> Result<groups::Group, DomainError> {
        let group = groups::require_group(txn, group_id).await?;
        phase::check_transition(group.phase, target)?;

        let updated = groups::set_phase(txn, group_id, target).await?;
        let updated = if target == GroupPhase::Closed {
            groups::set_status(txn, group_id, GroupStatus::Closed).await?
        } else {
            updated
        };

        debug!(group_id, from = ?group.phase, to = ?target, "group phase transition");
        Ok(updated)
    }

    /// Quorum trigger: promote a forming group once enough members joined.
    ///
    /// Runs after every membership mutation. The activation itself is an
    /// atomic conditional update keyed on `status`, so two concurrent joins
    /// that both observe the quorum cannot double-activate: the loser's
    /// swap touches zero rows and the trigger backs off without side
    /// effects. The winner, inside the same transaction, creates the
    /// admin-election ballot (one option per candidate, 7-day deadline)
    /// and logs a system announcement.
    ///
    /// The ballot is inserted at the repo layer: its options are the
    /// eligible candidates, so a group with a single member gets a
    /// one-option ballot. The two-distinct-options minimum applies only
    /// to caller-created sessions.
    pub async fn try_activate(
        &self,
        txn: &DatabaseTransaction,
        group_id: i64,
    ) -> Result<ActivationOutcome, DomainError> {
        let group = groups::require_group(txn, group_id).await?;
        if group.status != GroupStatus::PendingMembers {
            return Ok(ActivationOutcome::AlreadyDecided);
        }

        let member_count = members::member_count(txn, group_id).await?;
        if !quorum::quorum_met(member_count, group.min_members) {
            return Ok(ActivationOutcome::BelowQuorum);
        }

        let now = OffsetDateTime::now_utc();
        if !groups::activate_pending(txn, group_id, now).await? {
            debug!(group_id, "activation race lost; another caller won the swap");
            return Ok(ActivationOutcome::AlreadyDecided);
        }

        // Eligible candidates are all current members, in join order.
        let candidates = members::find_all_by_group(txn, group_id).await?;
        let options: Vec<String> = candidates
            .iter()
            .map(|m| m.user_id.to_string())
            .collect();
        let deadline = now + quorum::ELECTION_BALLOT_DURATION;

        let session = voting::create_session(
            txn,
            SessionCreate {
                group_id,
                title: "Admin election".to_string(),
                description: Some(
                    "Elect the administrators who will run the negotiation phase".to_string(),
                ),
                options,
                deadline: Some(deadline),
                created_by: group.created_by,
            },
        )
        .await?;

        // Fire-and-forget notification to the discussion log.
        if let Err(e) = announcements::append(
            txn,
            group_id,
            format!(
                "The group reached its quorum of {} members and is now active. \
                 Admin election is open until {deadline}.",
                quorum::effective_quorum(group.min_members)
            ),
        )
        .await
        {
            warn!(group_id, error = %e, "failed to append activation announcement");
        }

        info!(
            group_id,
            session_id = session.id,
            member_count,
            "group activated by quorum; admin election opened"
        );
        Ok(ActivationOutcome::Activated {
            session_id: session.id,
        })
    }
}

impl Default for LifecycleService {
    fn default() -> Self {
        Self::new()
    }
}
