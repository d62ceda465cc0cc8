//! # The two phase method
//!
//! Phase one finds a basic feasible solution by minimizing the sum of the artificial variables.
//! Phase two starts from that basis and optimizes the caller's objective.
use std::fmt;

use crate::algorithm::{Method, Solver, Status};
use crate::algorithm::pivot::{PivotEngine, Termination};
use crate::algorithm::two_phase::phase_one::FeasibilityResult;
use crate::config::SolverConfig;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;
use crate::error::{Error, TableauError};

mod phase_one;
mod phase_two;

/// The phase a `TwoPhase` solver is in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Searching for a feasible basis.
    One,
    /// Optimizing the original objective.
    Two,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Phase::One => "phase one",
            Phase::Two => "phase two",
        })
    }
}

/// Solver using the two phase method.
#[derive(Clone, Debug)]
pub struct TwoPhase {
    /// The caller's objective coefficients, restored in phase two.
    objective: Vec<f64>,
    direction: Objective,
    iteration_limit: Option<usize>,
    engine: PivotEngine,
    phase: Phase,
    status: Option<Status>,
    solution: Option<Solution>,
}

impl TwoPhase {
    /// Build the initial tableau with the phase one objective.
    pub fn new(problem: &Problem, config: &SolverConfig) -> Result<Self, Error> {
        config.validate()?;

        let problem = problem.with_non_negative_rhs();
        let mut engine = PivotEngine::for_problem(&problem, config.precision)?;
        engine.record("", "", "Initial tableau");
        phase_one::set_up(&mut engine)?;

        Ok(Self {
            objective: problem.objective().to_vec(),
            direction: problem.direction(),
            iteration_limit: config.iteration_limit,
            engine,
            phase: Phase::One,
            status: None,
            solution: None,
        })
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn optimize(&mut self) -> Result<Status, TableauError> {
        self.phase = Phase::Two;
        phase_two::set_up(&mut self.engine, &self.objective, self.direction)?;

        let status = match phase_two::optimize(&mut self.engine, self.iteration_limit)? {
            Termination::Optimal => {
                self.solution = Some(self.engine.conclude_optimal(&self.objective));
                Status::Optimal
            },
            termination => termination.into(),
        };

        Ok(status)
    }
}

impl Solver for TwoPhase {
    fn resolve(&mut self) -> Result<Status, TableauError> {
        if let Some(status) = self.status {
            return Ok(status);
        }

        let status = match phase_one::compute_feasible_basis(&mut self.engine, self.iteration_limit)? {
            FeasibilityResult::Feasible => {
                log::debug!("Feasible basis found after {} pivots", self.engine.nr_pivots());
                self.optimize()?
            },
            FeasibilityResult::Infeasible => Status::Infeasible,
            FeasibilityResult::Stopped(termination) => termination.into(),
        };
        log::debug!("Two phase method ended in {}: {}", self.phase, status);

        self.status = Some(status);
        Ok(status)
    }

    fn status(&self) -> Option<Status> {
        self.status
    }

    fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    fn engine(&self) -> &PivotEngine {
        &self.engine
    }

    fn method(&self) -> Method {
        Method::TwoPhase
    }

    fn into_parts(self) -> (Option<Solution>, PivotEngine) {
        (self.solution, self.engine)
    }
}
