//! # Small problems with a known outcome
//!
//! Each problem is solved with both methods through the public entry point.
use simplex_steps::{solve, Method, Problem, SolveResult, SolverConfig};

/// # Problems and their expected outcomes
#[allow(missing_docs)]
mod test;
/// # Both methods on many generated problems
mod sweep;

const METHODS: [Method; 2] = [Method::BigM, Method::TwoPhase];

/// Solve a problem given with operator symbols using the default configuration.
///
/// # Arguments
///
/// * `objective`: Objective coefficients.
/// * `constraints`: Constraint matrix, one row per constraint.
/// * `rhs`: Right-hand side values.
/// * `operators`: One of `"≤"`, `"≥"` or `"="` (or their ASCII spellings) per constraint.
/// * `maximize`: Direction of optimization.
/// * `method`: Method to solve with.
fn solve_symbols(
    objective: &[f64],
    constraints: &[&[f64]],
    rhs: &[f64],
    operators: &[&str],
    maximize: bool,
    method: Method,
) -> SolveResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let problem = Problem::from_symbols(
        objective.to_vec(),
        constraints.iter().map(|row| row.to_vec()).collect(),
        rhs.to_vec(),
        operators,
        maximize,
    ).unwrap();

    solve(&problem, method, &SolverConfig::default()).unwrap()
}
