//! # Number types
//!
//! The tableau holds `f64` values. This module defines how those values are kept clean of the
//! floating point noise that repeated pivoting produces.
pub mod float;
