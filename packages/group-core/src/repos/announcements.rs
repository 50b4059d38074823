//! System announcement log repository functions.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;

use crate::adapters::announcements_sea as announcements_adapter;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i64,
    pub group_id: i64,
    pub body: String,
    pub created_at: OffsetDateTime,
}

impl From<crate::entities::group_announcements::Model> for Announcement {
    fn from(model: crate::entities::group_announcements::Model) -> Self {
        Self {
            id: model.id,
            group_id: model.group_id,
            body: model.body,
            created_at: model.created_at,
        }
    }
}

pub async fn append(
    txn: &DatabaseTransaction,
    group_id: i64,
    body: impl Into<String>,
) -> Result<Announcement, DomainError> {
    let announcement = announcements_adapter::append(txn, group_id, body.into()).await?;
    Ok(Announcement::from(announcement))
}

pub async fn find_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<Announcement>, DomainError> {
    let announcements = announcements_adapter::find_by_group(conn, group_id).await?;
    Ok(announcements.into_iter().map(Announcement::from).collect())
}
