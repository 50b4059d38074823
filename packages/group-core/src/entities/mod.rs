//! SeaORM entity models for the collaboration store.

pub mod group_announcements;
pub mod group_members;
pub mod groups;
pub mod negotiation_phases;
pub mod votes;
pub mod voting_sessions;
