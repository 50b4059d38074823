//! Service layer: orchestration over the store, one transaction per call.
//!
//! Services are the trust boundary: they load their own validation data
//! rather than accepting caller-provided state, and the current user is
//! always threaded in explicitly as a parameter.

pub mod access;
pub mod groups;
pub mod lifecycle;
pub mod membership;
pub mod negotiation;
pub mod voting;

#[cfg(test)]
mod tests_negotiation;

pub use access::AccessService;
pub use groups::GroupService;
pub use lifecycle::{ActivationOutcome, LifecycleService};
pub use membership::MembershipService;
pub use negotiation::NegotiationService;
pub use voting::VotingService;
