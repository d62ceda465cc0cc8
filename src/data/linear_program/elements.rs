//! # Building blocks to describe linear programs.
use std::fmt;
use std::str::FromStr;

use crate::error::ProblemError;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// The relation that results from multiplying both sides of the constraint by `-1`.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            ConstraintType::Equal => ConstraintType::Equal,
            ConstraintType::Greater => ConstraintType::Less,
            ConstraintType::Less => ConstraintType::Greater,
        }
    }

    /// Mathematical symbol of the relation.
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => "≥",
            ConstraintType::Less => "≤",
        }
    }
}

impl FromStr for ConstraintType {
    type Err = ProblemError;

    /// Parse both the mathematical symbols and their ASCII spellings.
    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol.trim() {
            "=" | "==" => Ok(ConstraintType::Equal),
            "≥" | ">=" => Ok(ConstraintType::Greater),
            "≤" | "<=" => Ok(ConstraintType::Less),
            _ => Err(ProblemError::UnknownOperator(symbol.to_string())),
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Objective {
    /// Factor that turns the objective into one that is maximized.
    ///
    /// Minimizing `c·x` is the same as maximizing `-c·x`.
    pub fn sign(self) -> f64 {
        match self {
            Objective::Maximize => 1_f64,
            Objective::Minimize => -1_f64,
        }
    }
}

impl Default for Objective {
    fn default() -> Self {
        Objective::Minimize
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Objective::Maximize => "maximize",
            Objective::Minimize => "minimize",
        })
    }
}
