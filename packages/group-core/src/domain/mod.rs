//! Domain layer: pure lifecycle logic, no I/O.

pub mod capabilities;
pub mod negotiation;
pub mod phase;
pub mod quorum;
pub mod tally;

#[cfg(test)]
mod tests_capabilities;
#[cfg(test)]
mod tests_negotiation;
#[cfg(test)]
mod tests_phase;
#[cfg(test)]
mod tests_props_tally;
#[cfg(test)]
mod tests_tally;

// Re-exports for ergonomics
pub use capabilities::{AccessContext, Capability};
pub use quorum::{effective_quorum, quorum_met, DEFAULT_MIN_MEMBERS};
pub use tally::{tally_votes, OptionTally};
