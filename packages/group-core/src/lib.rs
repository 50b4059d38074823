//! Group lifecycle orchestrator.
//!
//! Library core behind a business-collaboration front end: the phase
//! state machine for collaborative groups, the quorum-gated activation of
//! forming groups, the role/phase-derived access evaluator, the generic
//! ballot subsystem, and the negotiation round tracker. Consumed by a
//! presentation layer; exposes no HTTP or CLI surface of its own.

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod domain;
pub mod entities;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;

// Re-exports for public API
pub use domain::capabilities::{AccessContext, Capability};
pub use errors::domain::DomainError;
pub use infra::db::connect_db;
pub use repos::groups::Group;
pub use repos::members::Membership;
pub use repos::voting::{Vote, VotingSession};
pub use services::{
    AccessService, ActivationOutcome, GroupService, LifecycleService, MembershipService,
    NegotiationService, VotingService,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    group_test_support::logging::init();
}
