//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, errors)
//! - `session` - Brainstorm sessions and their ideas

pub mod foundation;
pub mod session;
