//! Contest lifecycle: single active contest, participant registration, winner
//! selection, stats.

mod service;

#[cfg(test)]
mod service_test;

pub use service::{pick_winner, ContestService, ContestStats, StopOutcome};
