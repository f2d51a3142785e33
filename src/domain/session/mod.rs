//! Brainstorm session domain module.
//!
//! Sessions are the top-level containers; each holds the ideas captured
//! while it ran.

mod aggregate;
mod idea;

pub use aggregate::BrainstormSession;
pub use idea::Idea;
