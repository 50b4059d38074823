use time::OffsetDateTime;

/// Insert payload for a ballot session. `options` must already be
/// validated (≥2 distinct entries) by the caller.
#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub group_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub options: Vec<String>,
    pub deadline: Option<OffsetDateTime>,
    pub created_by: i64,
}
