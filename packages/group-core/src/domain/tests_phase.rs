use crate::domain::phase::{can_transition, check_transition, is_terminal};
use crate::entities::groups::GroupPhase;
use crate::errors::domain::{DomainError, ValidationKind};

const ALL_PHASES: [GroupPhase; 9] = [
    GroupPhase::Initial,
    GroupPhase::PendingMembers,
    GroupPhase::Active,
    GroupPhase::Negotiation,
    GroupPhase::VoteAdmins,
    GroupPhase::Contracting,
    GroupPhase::Supervised,
    GroupPhase::UnderArbitration,
    GroupPhase::Closed,
];

#[test]
fn forward_chain_edges_are_allowed() {
    let chain = [
        (GroupPhase::Initial, GroupPhase::PendingMembers),
        (GroupPhase::PendingMembers, GroupPhase::Active),
        (GroupPhase::Active, GroupPhase::Negotiation),
        (GroupPhase::Negotiation, GroupPhase::VoteAdmins),
        (GroupPhase::VoteAdmins, GroupPhase::Contracting),
        (GroupPhase::Contracting, GroupPhase::Supervised),
        (GroupPhase::Supervised, GroupPhase::UnderArbitration),
        (GroupPhase::Supervised, GroupPhase::Closed),
    ];
    for (from, to) in chain {
        assert!(can_transition(from, to), "expected edge {from:?} -> {to:?}");
    }
}

#[test]
fn arbitration_can_return_to_contracting_or_close() {
    assert!(can_transition(
        GroupPhase::UnderArbitration,
        GroupPhase::Contracting
    ));
    assert!(can_transition(GroupPhase::UnderArbitration, GroupPhase::Closed));
}

#[test]
fn closed_is_terminal_with_no_outgoing_edges() {
    assert!(is_terminal(GroupPhase::Closed));
    for to in ALL_PHASES {
        assert!(!can_transition(GroupPhase::Closed, to));
    }
}

#[test]
fn backward_and_skipping_edges_are_rejected() {
    // Backward
    assert!(!can_transition(GroupPhase::Active, GroupPhase::PendingMembers));
    assert!(!can_transition(GroupPhase::Negotiation, GroupPhase::Active));
    // Skipping
    assert!(!can_transition(GroupPhase::Initial, GroupPhase::Active));
    assert!(!can_transition(GroupPhase::Active, GroupPhase::Contracting));
    // Self-loop
    assert!(!can_transition(GroupPhase::Negotiation, GroupPhase::Negotiation));
}

#[test]
fn declared_edge_count_is_exact() {
    let mut edges = 0;
    for from in ALL_PHASES {
        for to in ALL_PHASES {
            if can_transition(from, to) {
                edges += 1;
            }
        }
    }
    // 8 forward edges plus the two arbitration returns.
    assert_eq!(edges, 10);
}

#[test]
fn check_transition_reports_invalid_transition() {
    let err = check_transition(GroupPhase::Closed, GroupPhase::Active).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidTransition, _)
    ));
    assert!(check_transition(GroupPhase::Initial, GroupPhase::PendingMembers).is_ok());
}
