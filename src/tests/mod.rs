//! # Tests on complete problems that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn problem()`
//! * `fn initial_tableau()`
//! * `fn solution()`
pub mod problem_3;
pub mod problem_6;
