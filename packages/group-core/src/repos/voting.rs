//! Ballot session and vote repository functions.

use sea_orm::{ConnectionTrait, DatabaseTransaction, SqlErr};
use time::OffsetDateTime;

use crate::adapters::voting_sea as voting_adapter;
use crate::entities::voting_sessions::SessionStatus;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

pub use crate::adapters::voting_sea::SessionCreate;

/// Ballot session domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct VotingSession {
    pub id: i64,
    pub group_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Ballot order; unique within the session.
    pub options: Vec<String>,
    pub deadline: Option<OffsetDateTime>,
    pub status: SessionStatus,
    pub created_by: i64,
    pub created_at: OffsetDateTime,
}

impl VotingSession {
    /// Deadline is evaluated lazily: a session with a lapsed deadline reads
    /// as closed even while the stored status still says active.
    pub fn is_closed_at(&self, now: OffsetDateTime) -> bool {
        self.status == SessionStatus::Closed
            || self.deadline.is_some_and(|deadline| now > deadline)
    }
}

impl From<crate::entities::voting_sessions::Model> for VotingSession {
    fn from(model: crate::entities::voting_sessions::Model) -> Self {
        Self {
            id: model.id,
            group_id: model.group_id,
            title: model.title,
            description: model.description,
            options: model.options.0,
            deadline: model.deadline,
            status: model.status,
            created_by: model.created_by,
            created_at: model.created_at,
        }
    }
}

/// Vote domain model; append-only, at most one per `(session, user)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vote {
    pub id: i64,
    pub session_id: i64,
    pub user_id: i64,
    pub option_selected: String,
    pub created_at: OffsetDateTime,
}

impl From<crate::entities::votes::Model> for Vote {
    fn from(model: crate::entities::votes::Model) -> Self {
        Self {
            id: model.id,
            session_id: model.session_id,
            user_id: model.user_id,
            option_selected: model.option_selected,
            created_at: model.created_at,
        }
    }
}

pub async fn find_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<VotingSession>, DomainError> {
    let session = voting_adapter::find_session(conn, id).await?;
    Ok(session.map(VotingSession::from))
}

pub async fn require_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<VotingSession, DomainError> {
    find_session(conn, id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::VotingSession, format!("session {id}")))
}

pub async fn create_session(
    txn: &DatabaseTransaction,
    dto: SessionCreate,
) -> Result<VotingSession, DomainError> {
    let session = voting_adapter::create_session(txn, dto).await?;
    Ok(VotingSession::from(session))
}

pub async fn find_sessions_with_votes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<Vec<(VotingSession, Vec<Vote>)>, DomainError> {
    let rows = voting_adapter::find_sessions_with_votes(conn, group_id).await?;
    Ok(rows
        .into_iter()
        .map(|(session, votes)| {
            (
                VotingSession::from(session),
                votes.into_iter().map(Vote::from).collect(),
            )
        })
        .collect())
}

pub async fn count_sessions_by_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    group_id: i64,
) -> Result<u64, DomainError> {
    Ok(voting_adapter::count_sessions_by_group(conn, group_id).await?)
}

pub async fn close_session(
    txn: &DatabaseTransaction,
    id: i64,
) -> Result<VotingSession, DomainError> {
    let session = voting_adapter::close_session(txn, id).await?;
    Ok(VotingSession::from(session))
}

/// Append-only insert; a duplicate `(session_id, user_id)` is rejected by
/// the store's unique index and surfaces as `AlreadyVoted`. The first vote
/// wins and the tally never changes on a rejected insert.
pub async fn insert_vote(
    txn: &DatabaseTransaction,
    session_id: i64,
    user_id: i64,
    option_selected: String,
) -> Result<Vote, DomainError> {
    match voting_adapter::insert_vote(txn, session_id, user_id, option_selected).await {
        Ok(vote) => Ok(Vote::from(vote)),
        Err(e) => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(DomainError::conflict(
                ConflictKind::AlreadyVoted,
                format!("user {user_id} already voted in session {session_id}"),
            )),
            _ => Err(DomainError::from(e)),
        },
    }
}

pub async fn find_votes_by_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Vec<Vote>, DomainError> {
    let votes = voting_adapter::find_votes_by_session(conn, session_id).await?;
    Ok(votes.into_iter().map(Vote::from).collect())
}

pub async fn has_voted<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    user_id: i64,
) -> Result<bool, DomainError> {
    let count = voting_adapter::count_user_votes(conn, session_id, user_id).await?;
    Ok(count > 0)
}
