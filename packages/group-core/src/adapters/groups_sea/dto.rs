use crate::entities::groups::GroupVisibility;

/// Insert payload for a new group.
#[derive(Debug, Clone)]
pub struct GroupCreate {
    pub created_by: i64,
    pub name: Option<String>,
    pub visibility: GroupVisibility,
    pub min_members: Option<i32>,
    pub max_members: i32,
}
