//! # A linear program as it is received from the caller
//!
//! All decision variables are implicitly non-negative. The problem is validated once, when it is
//! constructed, so that the solvers never have to deal with inconsistent dimensions.
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::error::ProblemError;

/// A validated solve request.
///
/// Represents `maximize` or `minimize` `c·x` subject to `A_i·x (≤|≥|=) b_i` for every constraint
/// `i`, and `x >= 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    /// Objective coefficients `c`, one per decision variable.
    objective: Vec<f64>,
    /// Constraint matrix `A`, one row per constraint.
    constraints: Vec<Vec<f64>>,
    /// Right-hand side `b`, one value per constraint.
    rhs: Vec<f64>,
    /// Relation of each constraint.
    constraint_types: Vec<ConstraintType>,
    direction: Objective,
}

impl Problem {
    /// Create a new problem, checking all dimensions.
    ///
    /// # Arguments
    ///
    /// * `objective`: Objective coefficients, one per decision variable.
    /// * `constraints`: Constraint matrix with one row per constraint and one column per decision
    /// variable.
    /// * `rhs`: Right-hand side values, one per constraint.
    /// * `constraint_types`: Relation of each constraint.
    /// * `direction`: Whether to maximize or minimize.
    ///
    /// # Return value
    ///
    /// The problem, or a `ProblemError` describing the first inconsistency found.
    pub fn new(
        objective: Vec<f64>,
        constraints: Vec<Vec<f64>>,
        rhs: Vec<f64>,
        constraint_types: Vec<ConstraintType>,
        direction: Objective,
    ) -> Result<Self, ProblemError> {
        if objective.is_empty() {
            return Err(ProblemError::NoVariables);
        }
        if rhs.len() != constraints.len() {
            return Err(ProblemError::DimensionMismatch {
                part: "right-hand side",
                expected: constraints.len(),
                found: rhs.len(),
            });
        }
        if constraint_types.len() != constraints.len() {
            return Err(ProblemError::DimensionMismatch {
                part: "operator list",
                expected: constraints.len(),
                found: constraint_types.len(),
            });
        }
        for (row, coefficients) in constraints.iter().enumerate() {
            if coefficients.len() != objective.len() {
                return Err(ProblemError::ConstraintRowLength {
                    row,
                    expected: objective.len(),
                    found: coefficients.len(),
                });
            }
            check_finite("constraint matrix", coefficients, row * objective.len())?;
        }
        check_finite("objective", &objective, 0)?;
        check_finite("right-hand side", &rhs, 0)?;

        Ok(Self { objective, constraints, rhs, constraint_types, direction })
    }

    /// Create a new problem from operator symbols such as `"≤"` or `">="`.
    ///
    /// See `ConstraintType::from_str` for the accepted symbols.
    pub fn from_symbols<S: AsRef<str>>(
        objective: Vec<f64>,
        constraints: Vec<Vec<f64>>,
        rhs: Vec<f64>,
        operators: &[S],
        maximize: bool,
    ) -> Result<Self, ProblemError> {
        let constraint_types = operators.iter()
            .map(|symbol| symbol.as_ref().parse())
            .collect::<Result<Vec<ConstraintType>, _>>()?;
        let direction = if maximize { Objective::Maximize } else { Objective::Minimize };

        Self::new(objective, constraints, rhs, constraint_types, direction)
    }

    /// Equivalent problem in which every right-hand side is non-negative.
    ///
    /// Constraints with a negative right-hand side are multiplied by `-1`, which flips `≤` and `≥`.
    /// This makes the initial basis of slack and artificial variables feasible.
    pub fn with_non_negative_rhs(&self) -> Self {
        let mut problem = self.clone();
        for row in 0..problem.nr_constraints() {
            if problem.rhs[row] < 0_f64 {
                problem.rhs[row] = -problem.rhs[row];
                for coefficient in &mut problem.constraints[row] {
                    *coefficient = -*coefficient;
                }
                problem.constraint_types[row] = problem.constraint_types[row].flipped();
            }
        }

        problem
    }

    /// Objective coefficients.
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    /// Constraint matrix, one row per constraint.
    pub fn constraints(&self) -> &[Vec<f64>] {
        &self.constraints
    }

    /// Right-hand side values.
    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    /// Relation of each constraint.
    pub fn constraint_types(&self) -> &[ConstraintType] {
        &self.constraint_types
    }

    /// Direction of optimization.
    pub fn direction(&self) -> Objective {
        self.direction
    }

    /// Number of decision variables.
    pub fn nr_variables(&self) -> usize {
        self.objective.len()
    }

    /// Number of constraints, not counting the non-negativity of the variables.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }
}

fn check_finite(part: &'static str, values: &[f64], offset: usize) -> Result<(), ProblemError> {
    match values.iter().position(|value| !value.is_finite()) {
        Some(index) => Err(ProblemError::NonFinite { part, index: offset + index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{ConstraintType, Objective};
    use crate::data::linear_program::problem::Problem;
    use crate::error::ProblemError;

    #[test]
    fn dimensions() {
        let problem = Problem::new(
            vec![3_f64, 5_f64],
            vec![vec![1_f64, 0_f64], vec![0_f64, 2_f64]],
            vec![4_f64, 12_f64],
            vec![ConstraintType::Less; 2],
            Objective::Maximize,
        ).unwrap();
        assert_eq!(problem.nr_variables(), 2);
        assert_eq!(problem.nr_constraints(), 2);

        let result = Problem::new(
            vec![3_f64, 5_f64],
            vec![vec![1_f64, 0_f64]],
            vec![4_f64, 12_f64],
            vec![ConstraintType::Less],
            Objective::Maximize,
        );
        assert_eq!(result, Err(ProblemError::DimensionMismatch {
            part: "right-hand side",
            expected: 1,
            found: 2,
        }));

        let result = Problem::new(
            vec![3_f64, 5_f64],
            vec![vec![1_f64, 0_f64]],
            vec![4_f64],
            vec![],
            Objective::Maximize,
        );
        assert!(matches!(result, Err(ProblemError::DimensionMismatch { part: "operator list", .. })));

        let result = Problem::new(
            vec![3_f64, 5_f64],
            vec![vec![1_f64]],
            vec![4_f64],
            vec![ConstraintType::Less],
            Objective::Maximize,
        );
        assert_eq!(result, Err(ProblemError::ConstraintRowLength { row: 0, expected: 2, found: 1 }));

        let result = Problem::new(vec![], vec![], vec![], vec![], Objective::Minimize);
        assert_eq!(result, Err(ProblemError::NoVariables));
    }

    #[test]
    fn non_finite() {
        let result = Problem::new(
            vec![1_f64, 1_f64],
            vec![vec![1_f64, 1_f64], vec![1_f64, f64::NAN]],
            vec![1_f64, 1_f64],
            vec![ConstraintType::Less; 2],
            Objective::Minimize,
        );
        assert_eq!(result, Err(ProblemError::NonFinite { part: "constraint matrix", index: 3 }));

        let result = Problem::new(
            vec![1_f64],
            vec![vec![1_f64]],
            vec![f64::INFINITY],
            vec![ConstraintType::Less],
            Objective::Minimize,
        );
        assert_eq!(result, Err(ProblemError::NonFinite { part: "right-hand side", index: 0 }));
    }

    #[test]
    fn symbols() {
        let problem = Problem::from_symbols(
            vec![1_f64, 1_f64],
            vec![vec![1_f64, 1_f64], vec![1_f64, 1_f64], vec![1_f64, 0_f64]],
            vec![2_f64, 5_f64, 1_f64],
            &["≤", ">=", "="],
            false,
        ).unwrap();
        assert_eq!(
            problem.constraint_types(),
            &[ConstraintType::Less, ConstraintType::Greater, ConstraintType::Equal],
        );
        assert_eq!(problem.direction(), Objective::Minimize);

        let result = Problem::from_symbols(
            vec![1_f64],
            vec![vec![1_f64]],
            vec![2_f64],
            &["=<"],
            true,
        );
        assert_eq!(result, Err(ProblemError::UnknownOperator("=<".to_string())));
    }

    #[test]
    fn negative_rhs() {
        let problem = Problem::new(
            vec![1_f64, 1_f64],
            vec![vec![1_f64, -2_f64], vec![1_f64, 1_f64], vec![-1_f64, 3_f64]],
            vec![-4_f64, 5_f64, -1_f64],
            vec![ConstraintType::Less, ConstraintType::Greater, ConstraintType::Equal],
            Objective::Minimize,
        ).unwrap();

        let normalized = problem.with_non_negative_rhs();
        assert_eq!(normalized.rhs(), &[4_f64, 5_f64, 1_f64]);
        assert_eq!(normalized.constraints()[0], vec![-1_f64, 2_f64]);
        assert_eq!(normalized.constraints()[2], vec![1_f64, -3_f64]);
        assert_eq!(
            normalized.constraint_types(),
            &[ConstraintType::Greater, ConstraintType::Greater, ConstraintType::Equal],
        );
        // The original is left untouched
        assert_eq!(problem.rhs(), &[-4_f64, 5_f64, -1_f64]);
    }
}
