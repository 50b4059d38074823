use crate::domain::negotiation::{
    can_start_negotiations, default_requirements, next_phase, SEQUENCE,
};
use crate::entities::groups::GroupPhase;
use crate::entities::negotiation_phases::NegotiationPhaseId;

#[test]
fn sequence_walks_preparation_to_contracting() {
    assert_eq!(
        next_phase(NegotiationPhaseId::Preparation),
        Some(NegotiationPhaseId::Proposal)
    );
    assert_eq!(
        next_phase(NegotiationPhaseId::Proposal),
        Some(NegotiationPhaseId::Negotiation)
    );
    assert_eq!(
        next_phase(NegotiationPhaseId::Negotiation),
        Some(NegotiationPhaseId::Voting)
    );
    assert_eq!(
        next_phase(NegotiationPhaseId::Voting),
        Some(NegotiationPhaseId::Contracting)
    );
}

#[test]
fn last_step_has_no_successor() {
    assert_eq!(next_phase(NegotiationPhaseId::Contracting), None);
}

#[test]
fn walking_the_whole_sequence_visits_every_step_once() {
    let mut current = SEQUENCE[0];
    let mut visited = vec![current];
    while let Some(next) = next_phase(current) {
        visited.push(next);
        current = next;
    }
    assert_eq!(visited, SEQUENCE);
}

#[test]
fn start_requires_quorum() {
    assert!(can_start_negotiations(GroupPhase::Active, 5, None, false));
    assert!(!can_start_negotiations(GroupPhase::Active, 4, None, false));
    // Custom quorum applies.
    assert!(can_start_negotiations(GroupPhase::Active, 3, Some(3), false));
}

#[test]
fn start_rejected_while_a_round_is_live() {
    assert!(!can_start_negotiations(
        GroupPhase::Negotiation,
        5,
        None,
        true
    ));
    // A group already in the negotiation phase whose tracker was never
    // seeded (auto-activation path) may still start.
    assert!(can_start_negotiations(
        GroupPhase::Negotiation,
        5,
        None,
        false
    ));
}

#[test]
fn every_step_carries_checklist_items() {
    for phase in SEQUENCE {
        assert!(!default_requirements(phase).is_empty());
    }
}
