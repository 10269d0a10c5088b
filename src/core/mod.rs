//! Core domain types for sed-word discovery
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is a pure function of its arguments.

mod candidate;
mod hit_key;

pub use candidate::{Candidate, MIN_CANDIDATE_LEN, Rejection};
pub use hit_key::{mask_first, unmask};

/// Leading letter that names the substitution command
pub const MARKER: char = 's';

/// Placeholder standing in for a matched fragment inside a hit key
pub const SENTINEL: char = '!';

/// Exact number of contributing lines a hit key needs to form a pair
pub const PAIR_COUNT: u32 = 2;
