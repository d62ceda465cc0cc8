//! # Strategies
//!
//! Decisions that can be made in different ways during the pivot loop.
pub mod pivot_rule;
