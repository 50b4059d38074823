use crate::domain::capabilities::{AccessContext, Capability};
use crate::entities::group_members::MemberRole;
use crate::entities::groups::{GroupPhase, GroupStatus, GroupVisibility};

fn ctx(phase: GroupPhase, membership: Option<MemberRole>) -> AccessContext {
    AccessContext {
        phase,
        status: GroupStatus::Active,
        visibility: GroupVisibility::Public,
        membership,
        member_count: 5,
        max_members: 10,
    }
}

#[test]
fn negotiation_panels_require_membership() {
    let member = ctx(GroupPhase::Negotiation, Some(MemberRole::Member));
    assert!(member.allows(Capability::DiscussionPanel));
    assert!(member.allows(Capability::SubmitProposalButton));
    assert!(member.allows(Capability::JoinVotePanel));

    let outsider = ctx(GroupPhase::Negotiation, None);
    assert!(!outsider.allows(Capability::DiscussionPanel));
    assert!(!outsider.allows(Capability::SubmitProposalButton));
    assert!(!outsider.allows(Capability::JoinVotePanel));
}

#[test]
fn join_vote_panel_spans_vote_admins_and_negotiation() {
    assert!(ctx(GroupPhase::VoteAdmins, Some(MemberRole::Member)).allows(Capability::JoinVotePanel));
    assert!(!ctx(GroupPhase::Contracting, Some(MemberRole::Member)).allows(Capability::JoinVotePanel));
}

#[test]
fn invite_button_hidden_in_arbitration_and_closed() {
    for phase in [
        GroupPhase::PendingMembers,
        GroupPhase::Active,
        GroupPhase::Negotiation,
        GroupPhase::Contracting,
        GroupPhase::Supervised,
    ] {
        assert!(ctx(phase, Some(MemberRole::Member)).allows(Capability::InviteButton));
    }
    assert!(!ctx(GroupPhase::UnderArbitration, Some(MemberRole::Member)).allows(Capability::InviteButton));
    assert!(!ctx(GroupPhase::Closed, Some(MemberRole::Member)).allows(Capability::InviteButton));
}

#[test]
fn contract_is_viewable_by_anyone_but_signable_by_members() {
    let outsider = ctx(GroupPhase::Contracting, None);
    assert!(outsider.allows(Capability::ViewContract));
    assert!(!outsider.allows(Capability::SignButton));

    let member = ctx(GroupPhase::Contracting, Some(MemberRole::Member));
    assert!(member.allows(Capability::ViewContract));
    assert!(member.allows(Capability::SignButton));
}

#[test]
fn arbitration_status_is_phase_gated_only() {
    assert!(ctx(GroupPhase::UnderArbitration, None).allows(Capability::ArbitrationStatus));
    assert!(!ctx(GroupPhase::Supervised, None).allows(Capability::ArbitrationStatus));
}

#[test]
fn join_request_requires_non_member_active_group_with_capacity() {
    let outsider = ctx(GroupPhase::Negotiation, None);
    assert!(outsider.allows(Capability::JoinRequestButton));

    // Members never see the join request button.
    assert!(!ctx(GroupPhase::Negotiation, Some(MemberRole::Member)).allows(Capability::JoinRequestButton));

    // A full group (member_count == max_members) hides it.
    let full = AccessContext {
        member_count: 10,
        max_members: 10,
        ..ctx(GroupPhase::Negotiation, None)
    };
    assert!(!full.allows(Capability::JoinRequestButton));

    // Non-active status hides it.
    let pending = AccessContext {
        status: GroupStatus::PendingMembers,
        ..ctx(GroupPhase::PendingMembers, None)
    };
    assert!(!pending.allows(Capability::JoinRequestButton));
}

#[test]
fn unknown_capability_keys_resolve_to_false() {
    let member = ctx(GroupPhase::Negotiation, Some(MemberRole::Member));
    assert!(member.allows_key("discussion_panel"));
    assert!(!member.allows_key("no_such_capability"));
    assert!(!member.allows_key(""));
    assert_eq!(Capability::parse("launch_missiles"), None);
}

#[test]
fn edit_rights_require_elevated_role() {
    assert!(ctx(GroupPhase::Active, Some(MemberRole::Creator)).can_edit());
    assert!(ctx(GroupPhase::Active, Some(MemberRole::Admin)).can_edit());
    assert!(!ctx(GroupPhase::Active, Some(MemberRole::Member)).can_edit());
    assert!(!ctx(GroupPhase::Active, None).can_edit());
}

#[test]
fn view_rights_cover_members_and_public_active_groups() {
    assert!(ctx(GroupPhase::Active, Some(MemberRole::Member)).can_view());
    assert!(ctx(GroupPhase::Active, None).can_view());

    let private_outsider = AccessContext {
        visibility: GroupVisibility::Private,
        ..ctx(GroupPhase::Active, None)
    };
    assert!(!private_outsider.can_view());

    let private_member = AccessContext {
        visibility: GroupVisibility::Private,
        ..ctx(GroupPhase::Active, Some(MemberRole::Member))
    };
    assert!(private_member.can_view());
}

#[test]
fn capability_map_covers_every_key_once() {
    let map = ctx(GroupPhase::Negotiation, Some(MemberRole::Member)).capability_map();
    assert_eq!(map.len(), Capability::ALL.len());
    for cap in Capability::ALL {
        assert_eq!(map.iter().filter(|(k, _)| *k == cap.as_key()).count(), 1);
    }
}
