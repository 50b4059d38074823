//! Generic ballot service: sessions, votes, live tallies.

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::tally::{tally_votes, OptionTally};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::voting::{SessionCreate, Vote, VotingSession};
use crate::repos::{groups, voting};

pub struct VotingService;

impl VotingService {
    pub fn new() -> Self {
        Self
    }

    /// Open a multi-option ballot for a group.
    ///
    /// At least two distinct options are required; insertion order is
    /// preserved as ballot order.
    pub async fn create_session(
        &self,
        txn: &DatabaseTransaction,
        group_id: i64,
        created_by: i64,
        title: impl Into<String>,
        description: Option<String>,
        options: Vec<String>,
        deadline: Option<OffsetDateTime>,
    ) -> Result<VotingSession, DomainError> {
        groups::require_group(txn, group_id).await?;

        let distinct: HashSet<&String> = options.iter().collect();
        if distinct.len() < 2 {
            return Err(DomainError::validation(
                ValidationKind::InvalidOptions,
                format!(
                    "a ballot needs at least two distinct options, got {}",
                    distinct.len()
                ),
            ));
        }
        if distinct.len() != options.len() {
            return Err(DomainError::validation(
                ValidationKind::InvalidOptions,
                "ballot options must be unique within a session",
            ));
        }

        let session = voting::create_session(
            txn,
            SessionCreate {
                group_id,
                title: title.into(),
                description,
                options,
                deadline,
                created_by,
            },
        )
        .await?;

        info!(group_id, session_id = session.id, "voting session opened");
        Ok(session)
    }

    /// Record a user's vote.
    ///
    /// All checks run before the insert (fail closed): closed or
    /// deadline-lapsed sessions reject with `SessionClosed`, options
    /// outside the ballot with `InvalidOption`, and an existing vote with
    /// `AlreadyVoted`. The store's unique `(session_id, user_id)` index
    /// covers the duplicate-submit race the pre-check cannot.
    pub async fn cast_vote(
        &self,
        txn: &DatabaseTransaction,
        session_id: i64,
        user_id: i64,
        option: impl Into<String>,
    ) -> Result<Vote, DomainError> {
        let option = option.into();
        let session = voting::require_session(txn, session_id).await?;

        if session.is_closed_at(OffsetDateTime::now_utc()) {
            return Err(DomainError::conflict(
                ConflictKind::SessionClosed,
                format!("session {session_id} is closed"),
            ));
        }
        if !session.options.iter().any(|o| *o == option) {
            return Err(DomainError::validation(
                ValidationKind::InvalidOption,
                format!("option {option:?} is not on the ballot"),
            ));
        }
        if voting::has_voted(txn, session_id, user_id).await? {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyVoted,
                format!("user {user_id} already voted in session {session_id}"),
            ));
        }

        let vote = voting::insert_vote(txn, session_id, user_id, option).await?;
        debug!(session_id, user_id, "vote recorded");
        Ok(vote)
    }

    /// Raw distribution for a session, in ballot order.
    ///
    /// Historical tallies stay queryable after a session closes.
    pub async fn tally<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        session_id: i64,
    ) -> Result<Vec<OptionTally>, DomainError> {
        let session = voting::require_session(conn, session_id).await?;
        let votes = voting::find_votes_by_session(conn, session_id).await?;
        let selections: Vec<String> = votes.into_iter().map(|v| v.option_selected).collect();
        Ok(tally_votes(&session.options, &selections))
    }

    /// Whether the ballot UI should show a "you already voted" state.
    pub async fn has_voted<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        session_id: i64,
        user_id: i64,
    ) -> Result<bool, DomainError> {
        voting::has_voted(conn, session_id, user_id).await
    }

    /// Manually close a session. Terminal: no further votes are accepted.
    pub async fn close_session(
        &self,
        txn: &DatabaseTransaction,
        session_id: i64,
    ) -> Result<VotingSession, DomainError> {
        voting::require_session(txn, session_id).await?;
        let session = voting::close_session(txn, session_id).await?;
        info!(session_id, "voting session closed");
        Ok(session)
    }

    /// All of a group's sessions with their votes, newest first.
    pub async fn sessions_with_votes<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        group_id: i64,
    ) -> Result<Vec<(VotingSession, Vec<Vote>)>, DomainError> {
        voting::find_sessions_with_votes(conn, group_id).await
    }
}

impl Default for VotingService {
    fn default() -> Self {
        Self::new()
    }
}
