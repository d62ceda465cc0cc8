//! # The Big-M method
//!
//! A single phase method. Artificial variables get a large penalty `M` in the objective, so that
//! the optimization drives them out of the basis whenever the problem is feasible.
use crate::algorithm::{Method, Solver, Status};
use crate::algorithm::pivot::{PivotEngine, Termination};
use crate::algorithm::strategy::pivot_rule::MostNegative;
use crate::algorithm::tableau::catalog::VariableKind;
use crate::config::SolverConfig;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;
use crate::error::{Error, TableauError};

/// Solver using the Big-M method.
#[derive(Clone, Debug)]
pub struct BigM {
    /// The caller's objective coefficients.
    objective: Vec<f64>,
    iteration_limit: Option<usize>,
    /// (column, row) of every artificial variable in the initial basis.
    artificial_basis: Vec<(usize, usize)>,
    engine: PivotEngine,
    status: Option<Status>,
    solution: Option<Solution>,
}

impl BigM {
    /// Build the initial tableau.
    ///
    /// The objective row penalizes every artificial variable with `config.big_m`, after which the
    /// artificial rows are eliminated from it so that it is canonical with respect to the initial
    /// basis. Both tableaus are recorded.
    ///
    /// The multiples of `M` are kept apart from the costs, see `Tableau::penalize_objective`.
    pub fn new(problem: &Problem, config: &SolverConfig) -> Result<Self, Error> {
        config.validate()?;

        let problem = problem.with_non_negative_rhs();
        let mut engine = PivotEngine::for_problem(&problem, config.precision)?;
        let artificial_basis = engine.catalog().of_kind(VariableKind::Artificial)
            .filter_map(|variable| variable.basis_row().map(|row| (variable.column(), row)))
            .collect::<Vec<_>>();

        let artificial_columns = artificial_basis.iter().map(|&(column, _)| column).collect::<Vec<_>>();
        let tableau = engine.tableau_mut();
        tableau.set_objective_row(problem.objective(), problem.direction())?;
        if !artificial_columns.is_empty() {
            tableau.penalize_objective(&artificial_columns, config.big_m)?;
        }
        engine.record("", "", format!("Initial tableau, artificial variables penalized with M = {}", config.big_m));

        engine.make_objective_canonical()?;
        if !artificial_basis.is_empty() {
            engine.record("", "", "Eliminate the artificial variables from the objective row");
        }

        Ok(Self {
            objective: problem.objective().to_vec(),
            iteration_limit: config.iteration_limit,
            artificial_basis,
            engine,
            status: None,
            solution: None,
        })
    }

    /// (column, row) of every artificial variable in the initial basis.
    pub fn artificial_basis(&self) -> &[(usize, usize)] {
        &self.artificial_basis
    }
}

impl Solver for BigM {
    fn resolve(&mut self) -> Result<Status, TableauError> {
        if let Some(status) = self.status {
            return Ok(status);
        }

        let termination = self.engine.run(&mut MostNegative, self.iteration_limit)?;
        let status = match termination {
            // An unbounded ray found while an artificial variable is still positive says nothing
            // about the problem itself
            Termination::Optimal | Termination::Unbounded => {
                let remaining = self.engine.artificial_at_nonzero_level()
                    .map(|variable| (variable.name().to_string(), variable.value()));
                match (remaining, termination) {
                    (Some((name, value)), _) => {
                        log::debug!("Artificial variable {} is basic at value {}", name, value);
                        self.engine.record("", "", format!(
                            "Infeasible: artificial variable {} remains in the basis at value {}",
                            name, value,
                        ));
                        Status::Infeasible
                    },
                    (None, Termination::Optimal) => {
                        self.solution = Some(self.engine.conclude_optimal(&self.objective));
                        Status::Optimal
                    },
                    (None, termination) => termination.into(),
                }
            },
            termination => termination.into(),
        };

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
        Method::BigM
    }

    fn into_parts(self) -> (Option<Solution>, PivotEngine) {
        (self.solution, self.engine)
    }
}
