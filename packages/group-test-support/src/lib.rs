//! Shared plumbing for the test suites: logging init and a migrated
//! in-memory store.

pub mod db;
pub mod logging;
