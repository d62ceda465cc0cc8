//! # Representing linear programs
//!
//! A linear program is described by a `Problem`: an objective function, a direction of
//! optimization and a list of constraints, each of which is either an equality or an inequality.
//! Solving it successfully produces a `Solution`.
pub mod elements;
pub mod problem;
pub mod solution;
