use crate::entities::group_members::MemberRole;

/// Insert payload for a membership row.
#[derive(Debug, Clone)]
pub struct MembershipCreate {
    pub group_id: i64,
    pub user_id: i64,
    pub role: MemberRole,
}
