//! Lifecycle phase graph for groups.
//!
//! The graph is forward-only:
//! `initial → pending_members → active → negotiation → vote_admins →
//! contracting → supervised → {under_arbitration | closed}`, with
//! `under_arbitration → {contracting, closed}` permitted so dispute
//! resolution can send a group back to contracting. `closed` is terminal.

use crate::entities::groups::GroupPhase;
use crate::errors::domain::{DomainError, ValidationKind};

/// Whether `from → to` is a declared edge of the lifecycle graph.
pub fn can_transition(from: GroupPhase, to: GroupPhase) -> bool {
    use GroupPhase::{
        Active, Closed, Contracting, Initial, Negotiation, PendingMembers, Supervised,
        UnderArbitration, VoteAdmins,
    };
    matches!(
        (from, to),
        (Initial, PendingMembers)
            | (PendingMembers, Active)
            | (Active, Negotiation)
            | (Negotiation, VoteAdmins)
            | (VoteAdmins, Contracting)
            | (Contracting, Supervised)
            | (Supervised, UnderArbitration)
            | (Supervised, Closed)
            | (UnderArbitration, Contracting)
            | (UnderArbitration, Closed)
    )
}

/// Terminal phases have no outgoing edges.
pub fn is_terminal(phase: GroupPhase) -> bool {
    matches!(phase, GroupPhase::Closed)
}

/// Validate an edge, failing closed before any mutation is issued.
pub fn check_transition(from: GroupPhase, to: GroupPhase) -> Result<(), DomainError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidTransition,
            format!("no edge {from:?} -> {to:?}"),
        ))
    }
}
