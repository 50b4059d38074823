//! Repository layer: domain models over the store collections.
//!
//! Free functions, generic over `ConnectionTrait` for reads and taking a
//! `DatabaseTransaction` for writes. Adapter `DbErr`s are mapped to
//! `DomainError` here.

pub mod announcements;
pub mod groups;
pub mod members;
pub mod negotiation;
pub mod voting;
