//! # Algorithms
//!
//! Two methods to solve a linear program with the tableau Simplex method: the Big-M method and the
//! two phase method. Both are driven by the same pivot loop and leave a trail of steps behind.
use std::fmt;

use crate::algorithm::pivot::{PivotEngine, Termination};
use crate::algorithm::steps::StepRecorder;
use crate::algorithm::tableau::catalog::Variable;
use crate::algorithm::tableau::Tableau;
use crate::algorithm::big_m::BigM;
use crate::algorithm::two_phase::TwoPhase;
use crate::config::SolverConfig;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;
use crate::error::{Error, TableauError};

pub mod big_m;
pub mod pivot;
pub mod steps;
pub mod strategy;
pub mod tableau;
pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm. The last two variants mean that the algorithm
/// gave up before it could tell.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    /// A finite optimum was found.
    Optimal,
    /// No solution satisfies all constraints.
    Infeasible,
    /// The objective can be improved without limit.
    Unbounded,
    /// A pivot could not identify its entering or leaving variable.
    MalformedPivot,
    /// The configured maximum number of pivots was reached.
    IterationLimit,
}

impl Status {
    /// Whether a solution is available.
    pub fn is_feasible(self) -> bool {
        self == Status::Optimal
    }
}

impl From<Termination> for Status {
    fn from(termination: Termination) -> Self {
        match termination {
            Termination::Optimal => Status::Optimal,
            Termination::Unbounded => Status::Unbounded,
            Termination::MalformedPivot => Status::MalformedPivot,
            Termination::IterationLimit => Status::IterationLimit,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "optimal",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
            Status::MalformedPivot => "malformed pivot",
            Status::IterationLimit => "iteration limit reached",
        })
    }
}

/// Method used to find an initial feasible basis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Method {
    /// Penalize artificial variables in the objective with a large constant.
    BigM,
    /// First minimize the sum of the artificial variables, then optimize the objective.
    TwoPhase,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Method::BigM => "Big-M",
            Method::TwoPhase => "two phase",
        })
    }
}

/// A solver for a single problem.
///
/// The solver is created with its initial tableau. Solving happens in `resolve`, after which the
/// outcome can be read any number of times.
pub trait Solver {
    /// Pivot until a terminal outcome is reached.
    ///
    /// Calling this again after it returned doesn't pivot again; the same status is returned.
    fn resolve(&mut self) -> Result<Status, TableauError>;

    /// Outcome of the solve, `None` before `resolve` was called.
    fn status(&self) -> Option<Status>;

    /// The optimal solution, only present when the status is `Status::Optimal`.
    fn solution(&self) -> Option<&Solution>;

    /// The pivot loop owning the tableau, the variables and the step trail.
    fn engine(&self) -> &PivotEngine;

    /// The method this solver implements.
    fn method(&self) -> Method;

    /// Give up the solution and the engine.
    fn into_parts(self) -> (Option<Solution>, PivotEngine);

    /// All steps recorded so far.
    fn steps(&self) -> &StepRecorder {
        self.engine().steps()
    }

    /// Number of steps recorded so far.
    fn step_count(&self) -> usize {
        self.steps().len()
    }

    /// Metadata of all variables, in column order.
    fn variables(&self) -> &[Variable] {
        self.engine().catalog().as_slice()
    }

    /// Current tableau.
    fn tableau(&self) -> &Tableau {
        self.engine().tableau()
    }

    /// Header labels of the tableau columns: `z`, the variable names and `rhs`.
    fn column_labels(&self) -> Vec<String> {
        self.engine().catalog().column_labels()
    }

    /// Whether the solve ended with an optimal solution.
    fn is_feasible(&self) -> bool {
        self.status().is_some_and(Status::is_feasible)
    }

    /// Solve, if that didn't happen yet, and collect the outcome.
    fn into_result(mut self) -> Result<SolveResult, TableauError>
    where
        Self: Sized,
    {
        let status = self.resolve()?;
        let method = self.method();
        let (solution, engine) = self.into_parts();
        let (tableau, catalog, steps) = engine.into_parts();

        Ok(SolveResult {
            method,
            status,
            solution,
            variables: catalog.as_slice().to_vec(),
            column_labels: catalog.column_labels(),
            tableau,
            steps,
        })
    }
}

/// Everything a finished solve produced.
#[derive(Clone, Debug)]
pub struct SolveResult {
    method: Method,
    status: Status,
    solution: Option<Solution>,
    variables: Vec<Variable>,
    column_labels: Vec<String>,
    tableau: Tableau,
    steps: StepRecorder,
}

impl SolveResult {
    /// Method that was used.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Outcome of the solve.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether an optimal solution was found.
    pub fn is_feasible(&self) -> bool {
        self.status.is_feasible()
    }

    /// The optimal solution, only present when the status is `Status::Optimal`.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Metadata of all variables in their final state, in column order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Header labels of the tableau columns, to display the tableaus with `Tableau::labeled`.
    ///
    /// Columns removed in phase two keep their label, the display skips them.
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Final tableau.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// The full step trail.
    pub fn steps(&self) -> &StepRecorder {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// Solve a linear program.
///
/// # Arguments
///
/// * `problem`: The linear program.
/// * `method`: How to find an initial feasible basis.
/// * `config`: Numerical settings.
///
/// # Return value
///
/// The outcome of the solve. An infeasible or unbounded problem is not an error, check
/// `SolveResult::status`.
///
/// # Errors
///
/// When the configuration is invalid, or when the tableau was accessed out of range.
pub fn solve(problem: &Problem, method: Method, config: &SolverConfig) -> Result<SolveResult, Error> {
    log::info!(
        "Solving with the {} method: {} of {} variables subject to {} constraints",
        method, problem.direction(), problem.nr_variables(), problem.nr_constraints(),
    );

    let result = match method {
        Method::BigM => BigM::new(problem, config)?.into_result()?,
        Method::TwoPhase => TwoPhase::new(problem, config)?.into_result()?,
    };

    log::info!("Solve finished after {} steps: {}", result.step_count(), result.status());
    Ok(result)
}
