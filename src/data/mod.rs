//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to describe a linear program and its solution.
//! The tableau and its variables live with the algorithms, in `algorithm::tableau`.

pub mod linear_program;
pub mod number_types;
