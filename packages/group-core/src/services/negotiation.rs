//! Negotiation round tracker service.
//!
//! A finer-grained workflow driven by group administrators, layered on top
//! of the lifecycle machine and only meaningful while the group's phase is
//! `NEGOTIATION`.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::adapters::negotiation_sea::PhaseRecordCreate;
use crate::domain::negotiation as rounds;
use crate::entities::groups::GroupPhase;
use crate::entities::negotiation_phases::{NegotiationPhaseId, NegotiationPhaseStatus};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::negotiation::PhaseRecord;
use crate::repos::{announcements, groups, members, negotiation};
use crate::services::lifecycle::LifecycleService;

pub struct NegotiationService;

impl NegotiationService {
    pub fn new() -> Self {
        Self
    }

    /// Whether a round of negotiations can be started right now.
    pub async fn can_start_negotiations<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        group_id: i64,
    ) -> Result<bool, DomainError> {
        let group = groups::require_group(conn, group_id).await?;
        let member_count = members::member_count(conn, group_id).await?;
        let seeded = negotiation::is_seeded(conn, group_id).await?;
        Ok(rounds::can_start_negotiations(
            group.phase,
            member_count,
            group.min_members,
            seeded,
        ))
    }

    /// Start a negotiation round: seed the five tracker records (first one
    /// active), bump the group's round number, and announce it.
    ///
    /// When the group is not yet in the negotiation phase this walks the
    /// lifecycle edge into it; when it is (auto-activation path) the group
    /// phase is left untouched and only the tracker is seeded.
    pub async fn start_negotiations(
        &self,
        txn: &DatabaseTransaction,
        group_id: i64,
    ) -> Result<Vec<PhaseRecord>, DomainError> {
        let group = groups::require_group(txn, group_id).await?;
        let member_count = members::member_count(txn, group_id).await?;
        let seeded = negotiation::is_seeded(txn, group_id).await?;

        if !rounds::can_start_negotiations(group.phase, member_count, group.min_members, seeded) {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "negotiations cannot be started for this group",
            ));
        }

        if group.phase != GroupPhase::Negotiation {
            LifecycleService::new()
                .transition(txn, group_id, GroupPhase::Negotiation)
                .await?;
        }
        if seeded {
            // Stale records from an earlier round; replace them.
            negotiation::clear_group(txn, group_id).await?;
        }

        let now = OffsetDateTime::now_utc();
        let mut records = Vec::with_capacity(rounds::SEQUENCE.len());
        for (index, phase_id) in rounds::SEQUENCE.into_iter().enumerate() {
            let first = index == 0;
            let record = negotiation::create_record(
                txn,
                PhaseRecordCreate {
                    group_id,
                    phase_id,
                    status: if first {
                        NegotiationPhaseStatus::Active
                    } else {
                        NegotiationPhaseStatus::Pending
                    },
                    requirements: rounds::default_requirements(phase_id),
                    started_at: first.then_some(now),
                },
            )
            .await?;
            records.push(record);
        }

        let round_number = group.round_number + 1;
        groups::set_round_number(txn, group_id, round_number).await?;

        if let Err(e) = announcements::append(
            txn,
            group_id,
            format!("Negotiation round {round_number} has started."),
        )
        .await
        {
            warn!(group_id, error = %e, "failed to append negotiation announcement");
        }

        info!(group_id, round_number, "negotiations started");
        Ok(records)
    }

    /// Move the tracker to the next step in the fixed sequence.
    ///
    /// The previous record is marked completed and the next one active.
    /// Advancing past the last step is a no-op and returns `None`.
    pub async fn advance(
        &self,
        txn: &DatabaseTransaction,
        group_id: i64,
        current: NegotiationPhaseId,
    ) -> Result<Option<PhaseRecord>, DomainError> {
        let group = groups::require_group(txn, group_id).await?;
        if group.phase != GroupPhase::Negotiation {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "tracker records only advance while the group is in negotiation",
            ));
        }

        let record = negotiation::require_record(txn, group_id, current).await?;
        if record.status != NegotiationPhaseStatus::Active {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("{current:?} is not the active tracker step"),
            ));
        }

        let Some(next) = rounds::next_phase(current) else {
            return Ok(None);
        };

        let now = OffsetDateTime::now_utc();
        negotiation::mark_completed(txn, record.id, now).await?;
        let next_record = negotiation::require_record(txn, group_id, next).await?;
        let next_record = negotiation::mark_active(txn, next_record.id, now).await?;

        info!(group_id, from = ?current, to = ?next, "negotiation tracker advanced");
        Ok(Some(next_record))
    }

    /// Tracker records for a group, in sequence order.
    pub async fn phase_records<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        group_id: i64,
    ) -> Result<Vec<PhaseRecord>, DomainError> {
        negotiation::find_by_group(conn, group_id).await
    }
}

impl Default for NegotiationService {
    fn default() -> Self {
        Self::new()
    }
}
