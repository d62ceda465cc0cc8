//! # Error reporting
//!
//! A collection of enums describing the problems that can be encountered before or during a solve.
//!
//! Only malformed input, invalid configuration and broken tableau invariants are errors. A problem
//! that turns out to be infeasible or unbounded is a regular outcome of a solve, see
//! [`Status`](crate::algorithm::Status).
use std::error;
use std::fmt;

/// An `Error` is the highest error in the hierarchy, returned by the public entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The solve request is malformed.
    Problem(ProblemError),
    /// The solver configuration is invalid.
    Config(ConfigError),
    /// An engine invariant was violated while reading or writing the tableau.
    ///
    /// This is always fatal to the current solve.
    Tableau(TableauError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Problem(error) => error.fmt(f),
            Error::Config(error) => error.fmt(f),
            Error::Tableau(error) => error.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Problem(error) => Some(error),
            Error::Config(error) => Some(error),
            Error::Tableau(error) => Some(error),
        }
    }
}

impl From<ProblemError> for Error {
    fn from(error: ProblemError) -> Self {
        Error::Problem(error)
    }
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Error::Config(error)
    }
}

impl From<TableauError> for Error {
    fn from(error: TableauError) -> Self {
        Error::Tableau(error)
    }
}

/// A `ProblemError` is created when a solve request can't be turned into a tableau.
///
/// It is reported when the problem is constructed, before any pivoting happens.
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemError {
    /// The objective function has no coefficients.
    NoVariables,
    /// Two parts of the request disagree on the number of constraints.
    DimensionMismatch {
        /// Name of the part with the wrong length.
        part: &'static str,
        /// Number of constraints according to the constraint matrix.
        expected: usize,
        /// Length of the offending part.
        found: usize,
    },
    /// A constraint row doesn't have one coefficient per decision variable.
    ConstraintRowLength {
        /// Index of the constraint, starting at 0.
        row: usize,
        /// Number of decision variables.
        expected: usize,
        /// Number of coefficients in the row.
        found: usize,
    },
    /// An operator symbol is not one of `≤`, `≥` or `=` (or their ASCII spellings).
    ///
    /// The contained `String` is the symbol as it was received.
    UnknownOperator(String),
    /// A coefficient is `NaN` or infinite.
    NonFinite {
        /// Name of the part containing the value.
        part: &'static str,
        /// Position of the value within that part.
        index: usize,
    },
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProblemError::NoVariables => write!(f, "the objective function has no variables"),
            ProblemError::DimensionMismatch { part, expected, found } => write!(
                f, "the {} has length {}, but there are {} constraints", part, found, expected,
            ),
            ProblemError::ConstraintRowLength { row, expected, found } => write!(
                f, "constraint {} has {} coefficients, expected {}", row + 1, found, expected,
            ),
            ProblemError::UnknownOperator(symbol) => write!(
                f, "unknown constraint operator \"{}\", expected one of ≤, ≥, =", symbol,
            ),
            ProblemError::NonFinite { part, index } => write!(
                f, "value {} of the {} is not a finite number", index + 1, part,
            ),
        }
    }
}

impl error::Error for ProblemError {}

/// Invalid values in a [`SolverConfig`](crate::config::SolverConfig).
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The number of decimal places is outside of `0..=15`.
    Decimals(i32),
    /// The zero tolerance is not a positive finite number.
    Epsilon(f64),
    /// The Big-M penalty is not a positive finite number.
    BigM(f64),
    /// An iteration limit of zero would not allow a single pivot.
    IterationLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Decimals(decimals) => write!(
                f, "number of decimals must be in 0..=15, got {}", decimals,
            ),
            ConfigError::Epsilon(epsilon) => write!(
                f, "epsilon must be a positive finite number, got {}", epsilon,
            ),
            ConfigError::BigM(value) => write!(
                f, "the Big-M penalty must be a positive finite number, got {}", value,
            ),
            ConfigError::IterationLimit => write!(f, "the iteration limit must be at least 1"),
        }
    }
}

impl error::Error for ConfigError {}

/// Out-of-range access of the tableau.
///
/// This indicates a programming error inside the engine rather than a property of the problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableauError {
    /// The `(row, column)` pair falls outside of the tableau.
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Number of rows in the tableau.
        nr_rows: usize,
        /// Number of columns in the tableau.
        nr_columns: usize,
    },
    /// A complete row was written with the wrong number of values.
    RowLength {
        /// Number of columns in the tableau.
        expected: usize,
        /// Number of values provided.
        found: usize,
    },
}

impl fmt::Display for TableauError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableauError::OutOfRange { row, column, nr_rows, nr_columns } => write!(
                f,
                "tableau index ({}, {}) out of range (valid rows 0..{}, valid columns 0..{})",
                row, column, nr_rows, nr_columns,
            ),
            TableauError::RowLength { expected, found } => write!(
                f, "row has {} values, the tableau has {} columns", found, expected,
            ),
        }
    }
}

impl error::Error for TableauError {}

#[cfg(test)]
mod test {
    use std::error::Error as _;

    use crate::error::{Error, ProblemError, TableauError};

    #[test]
    fn display() {
        let error = ProblemError::UnknownOperator("<>".to_string());
        assert_eq!(error.to_string(), "unknown constraint operator \"<>\", expected one of ≤, ≥, =");

        let error = TableauError::OutOfRange { row: 4, column: 1, nr_rows: 3, nr_columns: 6 };
        assert_eq!(
            error.to_string(),
            "tableau index (4, 1) out of range (valid rows 0..3, valid columns 0..6)",
        );
    }

    #[test]
    fn source_chain() {
        let error: Error = ProblemError::NoVariables.into();
        assert!(error.source().is_some());
        assert_eq!(error.to_string(), "the objective function has no variables");
    }
}
