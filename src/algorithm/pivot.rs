//! # The shared pivot loop
//!
//! Both solution methods move from basis to basis in the same way: a pivot rule selects the
//! entering column, the ratio test selects the leaving row, and the pivot row is normalized and
//! eliminated from all other rows. The methods only differ in how they set up the objective row and
//! how they interpret the outcome.
use crate::algorithm::steps::StepRecorder;
use crate::algorithm::strategy::pivot_rule::PivotRule;
use crate::algorithm::tableau::catalog::{Variable, VariableCatalog, VariableKind};
use crate::algorithm::tableau::{ObjectiveRow, Tableau};
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::float::numerical_precision::Precision;
use crate::error::TableauError;

/// Result of a single iteration of the pivot loop.
#[derive(Clone, Debug, PartialEq)]
pub enum Iteration {
    /// A basis change happened.
    Pivoted {
        /// Name of the variable that entered the basis.
        entering: String,
        /// Name of the variable that left the basis.
        leaving: String,
    },
    /// The pivot rule found no column to enter.
    Optimal,
    /// The entering column has no positive entry in any constraint row.
    Unbounded {
        /// The column that was selected to enter.
        column: usize,
    },
    /// The entering or leaving variable could not be identified.
    MalformedPivot,
}

/// How the pivot loop ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Termination {
    /// No candidate column improves the objective row.
    Optimal,
    /// The objective row can be improved indefinitely.
    Unbounded,
    /// The entering or leaving variable could not be identified.
    MalformedPivot,
    /// The maximum number of pivots was reached.
    IterationLimit,
}

/// Owner of the tableau, its variables and the step trail during a solve.
#[derive(Clone, Debug)]
pub struct PivotEngine {
    tableau: Tableau,
    catalog: VariableCatalog,
    steps: StepRecorder,
    /// Indexed by tableau column. Excluded columns never enter the basis.
    excluded: Vec<bool>,
    nr_pivots: usize,
    /// The objective row before it was made canonical, priced out again after every pivot.
    objective: ObjectiveRow,
}

impl PivotEngine {
    /// Start pivoting from a tableau whose basis is described by `catalog`.
    pub fn new(tableau: Tableau, catalog: VariableCatalog) -> Self {
        debug_assert_eq!(tableau.nr_columns(), catalog.len() + 2);
        debug_assert_eq!(tableau.nr_rows(), catalog.nr_constraints() + 1);

        let excluded = vec![false; tableau.nr_columns()];
        let objective = tableau.objective();
        Self {
            tableau,
            catalog,
            steps: StepRecorder::new(),
            excluded,
            nr_pivots: 0,
            objective,
        }
    }

    /// Build the variables and the constraint rows of a problem.
    ///
    /// The objective row is left for the solution method to fill in.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem with non-negative right-hand sides.
    /// * `precision`: Rounding rule of the tableau.
    pub fn for_problem(problem: &Problem, precision: Precision) -> Result<Self, TableauError> {
        let catalog = VariableCatalog::new(problem.nr_variables(), problem.constraint_types());
        let tableau = Tableau::with_constraints(problem, &catalog, precision)?;

        let mut engine = Self::new(tableau, catalog);
        engine.catalog.refresh_values(&engine.tableau)?;
        Ok(engine)
    }

    /// Current tableau.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    pub(crate) fn tableau_mut(&mut self) -> &mut Tableau {
        &mut self.tableau
    }

    /// Variables of the tableau, with their current basis state.
    pub fn catalog(&self) -> &VariableCatalog {
        &self.catalog
    }

    /// Steps recorded so far.
    pub fn steps(&self) -> &StepRecorder {
        &self.steps
    }

    /// Number of basis changes so far.
    pub fn nr_pivots(&self) -> usize {
        self.nr_pivots
    }

    /// Give up ownership of the tableau, the variables and the trail.
    pub fn into_parts(self) -> (Tableau, VariableCatalog, StepRecorder) {
        (self.tableau, self.catalog, self.steps)
    }

    /// Record the current tableau.
    pub(crate) fn record(&mut self, entering: &str, leaving: &str, description: impl Into<String>) {
        self.steps.record(&self.tableau, entering, leaving, description);
    }

    /// Never select a column to enter the basis again.
    pub(crate) fn exclude_column(&mut self, column: usize) {
        if let Some(excluded) = self.excluded.get_mut(column) {
            *excluded = true;
        }
    }

    /// Whether a column was excluded from entering the basis.
    pub fn is_excluded(&self, column: usize) -> bool {
        self.excluded.get(column).copied().unwrap_or(true)
    }

    /// Leave a row without basic variable.
    pub(crate) fn clear_basis_row(&mut self, row: usize) {
        self.catalog.clear_basis_row(row);
    }

    /// Variable columns that may enter the basis, in increasing order.
    ///
    /// These are the non-basic variables whose column was not excluded.
    pub fn candidate_columns(&self) -> Vec<usize> {
        self.catalog.iter()
            .filter(|variable| !variable.is_basic())
            .map(Variable::column)
            .filter(|&column| !self.is_excluded(column))
            .collect()
    }

    /// Ratio test.
    ///
    /// Among the constraint rows with a strictly positive entry in the entering column, find the one
    /// with the smallest ratio of right-hand side to that entry. Ties are broken by the lowest row.
    ///
    /// # Return value
    ///
    /// The leaving row, or `None` if no row has a positive entry.
    pub fn select_leaving_row(&self, column: usize) -> Result<Option<usize>, TableauError> {
        let precision = self.tableau.precision();

        let mut best: Option<(usize, f64)> = None;
        for row in 1..self.tableau.nr_rows() {
            let entry = self.tableau.get(row, column)?;
            if !precision.is_positive(entry) {
                continue;
            }

            let ratio = self.tableau.rhs(row)? / entry;
            match best {
                Some((_, best_ratio)) if ratio >= best_ratio => {},
                _ => best = Some((row, ratio)),
            }
        }

        Ok(best.map(|(row, _)| row))
    }

    /// Perform one iteration of the primal Simplex method.
    pub fn iterate(&mut self, rule: &mut impl PivotRule) -> Result<Iteration, TableauError> {
        let candidates = self.candidate_columns();
        let Some(column) = rule.select_entering_column(&self.tableau, &candidates)? else {
            return Ok(Iteration::Optimal);
        };

        match self.select_leaving_row(column)? {
            Some(row) => self.bring_into_basis(row, column),
            None => Ok(Iteration::Unbounded { column }),
        }
    }

    /// Iterate until the pivot rule considers the tableau optimal, or until the problem is found to
    /// be unbounded.
    ///
    /// # Arguments
    ///
    /// * `rule`: Entering column selection.
    /// * `iteration_limit`: Maximum total number of pivots of this engine, if any.
    pub fn run(
        &mut self,
        rule: &mut impl PivotRule,
        iteration_limit: Option<usize>,
    ) -> Result<Termination, TableauError> {
        log::debug!("Pivoting with the {} rule", rule.name());

        loop {
            if iteration_limit.is_some_and(|limit| self.nr_pivots >= limit) {
                log::debug!("Iteration limit reached after {} pivots", self.nr_pivots);
                self.record("", "", format!("Iteration limit of {} pivots reached", self.nr_pivots));
                break Ok(Termination::IterationLimit);
            }

            match self.iterate(rule)? {
                Iteration::Pivoted { .. } => {},
                Iteration::Optimal => break Ok(Termination::Optimal),
                Iteration::Unbounded { column } => {
                    let name = self.catalog.name(column).unwrap_or_default().to_string();
                    log::debug!("Unbounded: {} can increase without limit", name);
                    self.record(&name, "", format!(
                        "Unbounded: column of {} has no positive entry, the objective improves without limit",
                        name,
                    ));
                    break Ok(Termination::Unbounded);
                },
                Iteration::MalformedPivot => break Ok(Termination::MalformedPivot),
            }
        }
    }

    /// Pivot on an element: the variable of `column` enters the basis in `row`.
    ///
    /// The pivot row is normalized if needed, the column is eliminated from the other constraint
    /// rows and the basis is updated. Each of these is recorded.
    ///
    /// The objective row is not updated by a row operation. It is priced out again from the
    /// objective of `make_objective_canonical`, so that rounding errors don't build up in it.
    pub(crate) fn bring_into_basis(&mut self, row: usize, column: usize) -> Result<Iteration, TableauError> {
        let entering = self.catalog.name(column).map(str::to_string);
        let leaving = self.catalog.in_basis_at(row).map(|variable| variable.name().to_string());
        let (Some(entering), Some(leaving)) = (entering, leaving) else {
            log::debug!("No variable to pivot on in row {}, column {}", row, column);
            self.record("", "", format!("Malformed pivot in row {}, column {}", row, column));
            return Ok(Iteration::MalformedPivot);
        };

        let pivot_value = self.tableau.get(row, column)?;
        debug_assert!(!self.tableau.precision().is_zero(pivot_value));
        if !self.tableau.precision().is_close(pivot_value, 1_f64) {
            self.tableau.divide_row(row, pivot_value)?;
            self.tableau.set(row, column, 1_f64)?;
            self.record(&entering, &leaving, format!("Divide row {} by pivot element {}", row, pivot_value));
        }

        for other in (1..self.tableau.nr_rows()).filter(|&other| other != row) {
            let factor = self.tableau.get(other, column)?;
            if factor != 0_f64 {
                self.tableau.add_multiple_of_row(other, row, -factor)?;
                self.tableau.set(other, column, 0_f64)?;
            }
        }
        self.catalog.swap_basis(row, column);
        self.reprice()?;
        self.record(&entering, &leaving, format!("Eliminate {} from all rows but row {}", entering, row));
        log::trace!("\n{}", self.tableau.labeled(&self.catalog.column_labels()));

        self.catalog.refresh_values(&self.tableau)?;
        self.nr_pivots += 1;
        self.record(&entering, &leaving, format!("{} enters the basis in row {}, {} leaves", entering, row, leaving));
        log::debug!(
            "Pivot {}: {} enters, {} leaves, pivot element {}",
            self.nr_pivots, entering, leaving, pivot_value,
        );

        Ok(Iteration::Pivoted { entering, leaving })
    }

    /// Eliminate the columns of the basic variables from the objective row.
    ///
    /// Afterwards, the objective row has a zero in every basic column and its right-hand side is
    /// the objective value of the current basic solution. The row as it was before is kept, later
    /// pivots price it out against their basis.
    pub(crate) fn make_objective_canonical(&mut self) -> Result<(), TableauError> {
        self.objective = self.tableau.objective();
        self.price()
    }

    fn reprice(&mut self) -> Result<(), TableauError> {
        self.tableau.restore_objective(&self.objective);
        self.price()
    }

    fn price(&mut self) -> Result<(), TableauError> {
        let basis = self.catalog.iter()
            .filter_map(|variable| variable.basis_row().map(|row| (row, variable.column())))
            .collect::<Vec<_>>();

        self.tableau.canonicalize_objective(&basis)
    }

    /// Basic artificial variable with a nonzero value, if there is one.
    pub fn artificial_at_nonzero_level(&self) -> Option<&Variable> {
        let precision = self.tableau.precision();
        self.catalog.of_kind(VariableKind::Artificial)
            .find(|variable| variable.is_basic() && !precision.is_zero(variable.value()))
    }

    /// Read the solution of the current basis.
    ///
    /// The objective value is evaluated from the values of the decision variables. The right-hand
    /// side of the objective row carries the rounding error of every pivot, which is amplified by
    /// large penalty coefficients.
    ///
    /// # Arguments
    ///
    /// * `objective`: The caller's objective coefficients, one per decision variable.
    pub fn solution(&self, objective: &[f64]) -> Solution {
        let values = self.catalog.of_kind(VariableKind::Original)
            .map(|variable| (variable.name().to_string(), variable.value()))
            .collect::<Vec<_>>();
        let objective_value = objective.iter()
            .zip(&values)
            .map(|(coefficient, (_, value))| coefficient * value)
            .sum::<f64>();

        Solution::new(self.tableau.round(objective_value), values)
    }

    /// Read the solution of the current basis and record it as the final step.
    pub(crate) fn conclude_optimal(&mut self, objective: &[f64]) -> Solution {
        let solution = self.solution(objective);
        log::debug!("Optimal solution found, z = {}", solution.objective_value());
        self.record("", "", format!("Optimal solution found: z = {}", solution.objective_value()));

        solution
    }
}
