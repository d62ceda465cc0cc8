//! # Floating point numbers
//!
//! Faster than exact arithmetic, but every operation can introduce a rounding error. The tableau
//! limits the accumulation of those errors by rounding every value it stores, see
//! `numerical_precision`.
pub mod numerical_precision;
