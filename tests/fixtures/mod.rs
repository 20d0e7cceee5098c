//! Test fixtures for trawl-planner.
//!
//! Provides realistic test data: real Peruvian coast ports and plausible
//! offshore fishing grounds along the Humboldt current.

pub mod peru_coast;

pub use peru_coast::*;
