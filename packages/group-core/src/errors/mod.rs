//! Error handling for the group lifecycle core.

pub mod domain;

pub use domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
