//! Wordle solving engine
//!
//! Leaves first: the candidate [`pool`], the [`scoring`] engine, the
//! [`ranking`] engine, and the stateful [`Session`] tying them together.

pub mod pool;
pub mod ranking;
pub mod scoring;
mod session;

pub use pool::{CandidatePool, filter};
pub use ranking::{DEFAULT_TOP_N, Recommendation, compare_scores, rank};
pub use scoring::{GuessScore, ScoringPolicy, TieBreakPolicy};
pub use session::{
    Observation, Session, SessionConfig, SessionMode, SessionState, SolutionSpace, ValidationError,
};
