//! Access control evaluation.
//!
//! A pure function of group/membership/phase state to a capability map.
//! Capabilities are an enum-keyed table rather than a switch over string
//! literals, so new capabilities are additive and unknown keys are
//! safe-by-default (`false`).

use crate::entities::group_members::MemberRole;
use crate::entities::groups::{GroupPhase, GroupStatus, GroupVisibility};

/// Named UI affordances the presentation layer may query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    DiscussionPanel,
    SubmitProposalButton,
    JoinVotePanel,
    InviteButton,
    ViewContract,
    SignButton,
    ArbitrationStatus,
    JoinRequestButton,
}

impl Capability {
    pub const ALL: [Capability; 8] = [
        Capability::DiscussionPanel,
        Capability::SubmitProposalButton,
        Capability::JoinVotePanel,
        Capability::InviteButton,
        Capability::ViewContract,
        Capability::SignButton,
        Capability::ArbitrationStatus,
        Capability::JoinRequestButton,
    ];

    pub fn as_key(self) -> &'static str {
        match self {
            Capability::DiscussionPanel => "discussion_panel",
            Capability::SubmitProposalButton => "submit_proposal_button",
            Capability::JoinVotePanel => "join_vote_panel",
            Capability::InviteButton => "invite_button",
            Capability::ViewContract => "view_contract",
            Capability::SignButton => "sign_button",
            Capability::ArbitrationStatus => "arbitration_status",
            Capability::JoinRequestButton => "join_request_button",
        }
    }

    /// Unknown keys parse to `None`; callers treat that as `false` so the
    /// UI can query speculatively.
    pub fn parse(key: &str) -> Option<Capability> {
        Capability::ALL.into_iter().find(|c| c.as_key() == key)
    }
}

/// Everything the evaluator needs, threaded explicitly by the caller.
///
/// `member_count` must be the live count of member rows at query time,
/// never a stored aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessContext {
    pub phase: GroupPhase,
    pub status: GroupStatus,
    pub visibility: GroupVisibility,
    /// The querying user's role, when they are a member.
    pub membership: Option<MemberRole>,
    pub member_count: u64,
    pub max_members: i32,
}

impl AccessContext {
    pub fn is_member(&self) -> bool {
        self.membership.is_some()
    }

    fn has_capacity(&self) -> bool {
        (self.member_count as i64) < i64::from(self.max_members)
    }

    /// Capability table; one row per named affordance.
    pub fn allows(&self, capability: Capability) -> bool {
        use GroupPhase::{Closed, Contracting, Negotiation, UnderArbitration, VoteAdmins};
        match capability {
            Capability::DiscussionPanel => self.is_member() && self.phase == Negotiation,
            Capability::SubmitProposalButton => self.is_member() && self.phase == Negotiation,
            Capability::JoinVotePanel => {
                self.is_member() && matches!(self.phase, VoteAdmins | Negotiation)
            }
            Capability::InviteButton => {
                self.is_member() && !matches!(self.phase, UnderArbitration | Closed)
            }
            Capability::ViewContract => self.phase == Contracting,
            Capability::SignButton => self.is_member() && self.phase == Contracting,
            Capability::ArbitrationStatus => self.phase == UnderArbitration,
            Capability::JoinRequestButton => {
                !self.is_member() && self.status == GroupStatus::Active && self.has_capacity()
            }
        }
    }

    /// String-keyed lookup; unknown keys resolve to `false` rather than error.
    pub fn allows_key(&self, key: &str) -> bool {
        Capability::parse(key).is_some_and(|c| self.allows(c))
    }

    /// Edit rights: member with elevated role.
    pub fn can_edit(&self) -> bool {
        matches!(self.membership, Some(MemberRole::Creator | MemberRole::Admin))
    }

    /// View rights: members always; non-members only for public active groups.
    pub fn can_view(&self) -> bool {
        self.is_member()
            || (self.visibility == GroupVisibility::Public && self.status == GroupStatus::Active)
    }

    /// Full capability map in declaration order.
    pub fn capability_map(&self) -> Vec<(&'static str, bool)> {
        Capability::ALL
            .into_iter()
            .map(|c| (c.as_key(), self.allows(c)))
            .collect()
    }
}
