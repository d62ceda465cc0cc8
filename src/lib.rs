//! # A step by step linear program solver
//!
//! Linear programs are solved using the tableau Simplex method, either with the Big-M method or
//! with the two phase method. Every action on the tableau is recorded, so that the solve can be
//! replayed step by step afterwards.
//!
//! ```
//! use simplex_steps::{solve, Method, Problem, SolverConfig};
//!
//! let problem = Problem::from_symbols(
//!     vec![3_f64, 5_f64],
//!     vec![vec![1_f64, 0_f64], vec![0_f64, 2_f64], vec![3_f64, 2_f64]],
//!     vec![4_f64, 12_f64, 18_f64],
//!     &["<=", "<=", "<="],
//!     true,
//! )?;
//! let result = solve(&problem, Method::TwoPhase, &SolverConfig::default())?;
//!
//! let solution = result.solution().expect("the problem has a finite optimum");
//! assert_eq!(solution.get("z"), Some(36_f64));
//! assert_eq!(solution.get("x1"), Some(2_f64));
//! assert_eq!(solution.get("x2"), Some(6_f64));
//! # Ok::<(), simplex_steps::Error>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod config;
pub mod data;
pub mod error;

pub use algorithm::{solve, Method, SolveResult, Solver, Status};
pub use config::SolverConfig;
pub use data::linear_program::elements::{ConstraintType, Objective};
pub use data::linear_program::problem::Problem;
pub use data::linear_program::solution::Solution;
pub use error::Error;

#[cfg(test)]
mod tests;
