//! SeaORM adapters. Functions here return `sea_orm::DbErr`; the repos
//! layer maps to `DomainError`.

pub mod announcements_sea;
pub mod groups_sea;
pub mod members_sea;
pub mod negotiation_sea;
pub mod voting_sea;
