//! thrive-core
//!
//! Shared domain records handed to collaborators outside the scoring engine.

pub mod error;
pub mod models;
