//! Domain-level error type used across services, repos and adapters.
//!
//! This error type is store-agnostic. Adapters return `sea_orm::DbErr`;
//! the repos layer converts via the provided `From<DbErr>` implementation
//! (or maps specific constraint violations to richer conflict kinds).

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation / business-rule violation kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Requested phase edge is not part of the lifecycle graph.
    InvalidTransition,
    /// Fewer than two distinct ballot options supplied.
    InvalidOptions,
    /// Cast option is not one of the session's options.
    InvalidOption,
    /// Operation requires a different group phase.
    PhaseMismatch,
    /// Group already has `max_members` members.
    GroupFull,
    /// `min_members`/`max_members` bounds are inconsistent.
    InvalidMemberBounds,
    Other(String),
}

/// Semantic conflict kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// `(session_id, user_id)` already holds a vote; first vote wins.
    AlreadyVoted,
    /// Session is closed (explicitly or by a lapsed deadline).
    SessionClosed,
    /// `(group_id, user_id)` membership already exists.
    AlreadyMember,
    OptimisticLock,
    Other(String),
}

/// Missing resources in domain terms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Group,
    Member,
    VotingSession,
    NegotiationPhase,
    Other(String),
}

/// Infra error kinds to distinguish operational failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Central domain error type.
///
/// Note that losing the activation race is *not* represented here: the
/// quorum trigger reports it as a successful no-op outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match &e {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                DomainError::infra(InfraErrorKind::DbUnavailable, format!("db error: {e}"))
            }
            _ => DomainError::infra(InfraErrorKind::Other("DB_ERROR".into()), format!("db error: {e}")),
        }
    }
}
