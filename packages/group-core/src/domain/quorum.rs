//! Quorum predicate for auto-activation of forming groups.

use time::Duration;

/// Default quorum when a group leaves `min_members` unset.
pub const DEFAULT_MIN_MEMBERS: i32 = 5;

/// Admin-election ballots run for a week from activation.
pub const ELECTION_BALLOT_DURATION: Duration = Duration::days(7);

/// Quorum threshold for a group, applying the default when unset.
pub fn effective_quorum(min_members: Option<i32>) -> i32 {
    min_members.unwrap_or(DEFAULT_MIN_MEMBERS)
}

/// Whether the live member count satisfies the group's quorum.
pub fn quorum_met(member_count: u64, min_members: Option<i32>) -> bool {
    member_count >= effective_quorum(min_members).max(0) as u64
}
