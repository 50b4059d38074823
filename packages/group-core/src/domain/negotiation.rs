//! Negotiation round tracker sequence.
//!
//! A secondary, finer-grained workflow layered on top of the group
//! lifecycle, active only while the group's phase is `NEGOTIATION`. Its
//! identifiers are a separate enum from `GroupPhase` and must not be
//! conflated with it.

use crate::entities::groups::GroupPhase;
use crate::entities::negotiation_phases::NegotiationPhaseId;
use crate::domain::quorum;

/// Fixed progression; `advance` walks this left to right.
pub const SEQUENCE: [NegotiationPhaseId; 5] = [
    NegotiationPhaseId::Preparation,
    NegotiationPhaseId::Proposal,
    NegotiationPhaseId::Negotiation,
    NegotiationPhaseId::Voting,
    NegotiationPhaseId::Contracting,
];

/// Next step in the sequence, or `None` at the last entry (advance is a
/// no-op there).
pub fn next_phase(current: NegotiationPhaseId) -> Option<NegotiationPhaseId> {
    let pos = SEQUENCE.iter().position(|p| *p == current)?;
    SEQUENCE.get(pos + 1).copied()
}

/// Whether a round of negotiations may be started for a group.
///
/// Requires quorum and that no round is currently live (the group is not
/// already sitting in the negotiation phase with a seeded tracker).
pub fn can_start_negotiations(
    phase: GroupPhase,
    member_count: u64,
    min_members: Option<i32>,
    tracker_seeded: bool,
) -> bool {
    quorum::quorum_met(member_count, min_members)
        && (phase != GroupPhase::Negotiation || !tracker_seeded)
}

/// Informational checklist items shown alongside each tracker step.
/// Never enforced by the state machine.
pub fn default_requirements(phase: NegotiationPhaseId) -> Vec<String> {
    let items: &[&str] = match phase {
        NegotiationPhaseId::Preparation => &[
            "Confirm participating members",
            "Collect demand volumes from each member",
        ],
        NegotiationPhaseId::Proposal => &[
            "Gather supplier proposals",
            "Publish proposals to the group",
        ],
        NegotiationPhaseId::Negotiation => &[
            "Discuss terms in the group panel",
            "Record counter-offers",
        ],
        NegotiationPhaseId::Voting => &["Open a ballot on the final shortlist"],
        NegotiationPhaseId::Contracting => &[
            "Circulate the contract draft",
            "Collect member signatures",
        ],
    };
    items.iter().map(|s| (*s).to_string()).collect()
}
