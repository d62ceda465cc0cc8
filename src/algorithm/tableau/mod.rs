//! # Data structures for Simplex
//!
//! Contains the simplex tableau and the elementary row operations which can be performed upon it.
//! The variables that label its columns are kept in the `catalog` module.
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::tableau::catalog::VariableCatalog;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::problem::Problem;
use crate::data::number_types::float::numerical_precision::Precision;
use crate::error::TableauError;

pub mod catalog;

/// The augmented matrix of a linear program with respect to some basis.
///
/// Row 0 is the objective row, rows `1..=m` hold the constraints. Column 0 is the identity column
/// of the objective row (1 in row 0, 0 elsewhere), columns `1..=n` belong to the variables and the
/// last column is the right-hand side.
///
/// Every value is rounded by `precision` as it is written.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    nr_rows: usize,
    nr_columns: usize,
    /// Row major, of size `nr_rows * nr_columns`.
    values: Vec<f64>,
    precision: Precision,
    /// When present, row 0 is the combination of these two parts.
    penalized: Option<PenalizedObjective>,
    /// Logically removed columns, indexed by column.
    hidden: Vec<bool>,
}

/// Objective row of the Big-M method, kept as a multiple of `M` and a constant part.
///
/// Rounding an `M`-sized value to a fixed number of decimals loses the costs that are added to
/// it, so the two parts are stored and updated separately.
#[derive(Clone, Debug, PartialEq)]
struct PenalizedObjective {
    big_m: f64,
    /// Coefficients of `M`, one per column.
    penalty: Vec<f64>,
    /// Constant parts, one per column.
    cost: Vec<f64>,
}

/// The objective row, as it can be saved and restored.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectiveRow {
    values: Vec<f64>,
    penalized: Option<PenalizedObjective>,
}

/// Entry of the objective row, written as `penalty * M + cost`.
///
/// Only the Big-M method has a penalty part, it is zero everywhere else. Entries are ordered as if
/// `M` were larger than any cost; differences within the tolerance of the tableau don't count.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReducedCost {
    /// Multiple of the penalty `M`.
    pub penalty: f64,
    /// Constant part.
    pub cost: f64,
}

impl ReducedCost {
    /// Whether moving this variable into the basis decreases the objective row.
    pub fn is_negative(&self, precision: &Precision) -> bool {
        precision.is_negative(self.penalty)
            || (precision.is_zero(self.penalty) && precision.is_negative(self.cost))
    }

    /// Whether moving this variable into the basis increases the objective row.
    pub fn is_positive(&self, precision: &Precision) -> bool {
        precision.is_positive(self.penalty)
            || (precision.is_zero(self.penalty) && precision.is_positive(self.cost))
    }

    /// Compare the penalty parts first, and the costs only when those are equal.
    pub fn compare(&self, other: &Self, precision: &Precision) -> Ordering {
        let penalty = self.penalty - other.penalty;
        let difference = if precision.is_zero(penalty) { self.cost - other.cost } else { penalty };

        if precision.is_negative(difference) {
            Ordering::Less
        } else if precision.is_positive(difference) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl Tableau {
    /// Create a tableau of zeros, apart from the identity entry of the objective row.
    ///
    /// # Arguments
    ///
    /// * `nr_constraints`: Number of constraint rows. The objective row comes on top.
    /// * `nr_variables`: Number of variable columns, of all kinds together.
    /// * `precision`: Rounding rule for all values written.
    pub fn new(nr_constraints: usize, nr_variables: usize, precision: Precision) -> Self {
        let nr_rows = nr_constraints + 1;
        let nr_columns = 1 + nr_variables + 1;

        let mut values = vec![0_f64; nr_rows * nr_columns];
        values[0] = 1_f64;

        Self {
            nr_rows,
            nr_columns,
            values,
            precision,
            penalized: None,
            hidden: vec![false; nr_columns],
        }
    }

    /// Create a tableau with the constraint rows of a problem filled in.
    ///
    /// The objective row is left empty apart from its identity entry; each method fills it in its
    /// own way.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem with non-negative right-hand sides.
    /// * `catalog`: Variables created for the constraint types of `problem`.
    pub fn with_constraints(
        problem: &Problem,
        catalog: &VariableCatalog,
        precision: Precision,
    ) -> Result<Self, TableauError> {
        debug_assert_eq!(catalog.nr_constraints(), problem.nr_constraints());
        debug_assert!(problem.rhs().iter().all(|&b| b >= 0_f64));

        let mut tableau = Self::new(problem.nr_constraints(), catalog.len(), precision);
        let rhs_column = tableau.rhs_column();

        for (index, (coefficients, &b)) in problem.constraints().iter().zip(problem.rhs()).enumerate() {
            let row = index + 1;
            for (j, &coefficient) in coefficients.iter().enumerate() {
                tableau.set(row, j + 1, coefficient)?;
            }
            for variable in catalog.introduced_by(row) {
                tableau.set(row, variable.column(), variable.kind().constraint_coefficient())?;
            }
            tableau.set(row, rhs_column, b)?;
        }

        Ok(tableau)
    }

    /// Overwrite the objective row with the negated, sign adjusted objective coefficients.
    ///
    /// The row reads `z - c'x = 0`, where `c' = c` when maximizing and `c' = -c` when minimizing.
    /// Columns of the auxiliary variables and the right-hand side become zero.
    ///
    /// # Arguments
    ///
    /// * `objective`: Coefficients of the decision variables, which occupy the first columns.
    /// * `direction`: Direction of the caller's objective.
    pub fn set_objective_row(&mut self, objective: &[f64], direction: Objective) -> Result<(), TableauError> {
        let mut row = vec![0_f64; self.nr_columns];
        row[0] = 1_f64;
        for (j, &coefficient) in objective.iter().enumerate() {
            let column = j + 1;
            if column >= self.rhs_column() {
                return Err(TableauError::RowLength { expected: self.nr_columns - 2, found: objective.len() });
            }
            row[column] = -direction.sign() * coefficient;
        }

        self.set_row(0, &row)
    }

    /// Add `big_m` times a penalty to the objective row, for each of the given columns.
    ///
    /// From here on, row 0 is kept as two parts: the multiples of `big_m` and the current row as
    /// the constant part. Writing to row 0 directly, with `set` or `set_row`, drops the split.
    pub fn penalize_objective(&mut self, columns: &[usize], big_m: f64) -> Result<(), TableauError> {
        let mut penalty = vec![0_f64; self.nr_columns];
        for &column in columns {
            let index = self.index(0, column)?;
            penalty[index] = 1_f64;
        }

        self.penalized = Some(PenalizedObjective {
            big_m,
            penalty,
            cost: self.values[..self.nr_columns].to_vec(),
        });
        self.write_penalized_row();

        Ok(())
    }

    /// Whether the objective row is split in a penalty and a constant part.
    pub fn is_penalized(&self) -> bool {
        self.penalized.is_some()
    }

    /// Entry of the objective row in a column.
    pub fn reduced_cost(&self, column: usize) -> Result<ReducedCost, TableauError> {
        let index = self.index(0, column)?;

        Ok(match &self.penalized {
            Some(penalized) => ReducedCost { penalty: penalized.penalty[index], cost: penalized.cost[index] },
            None => ReducedCost { penalty: 0_f64, cost: self.values[index] },
        })
    }

    pub(crate) fn objective(&self) -> ObjectiveRow {
        ObjectiveRow {
            values: self.values[..self.nr_columns].to_vec(),
            penalized: self.penalized.clone(),
        }
    }

    pub(crate) fn restore_objective(&mut self, objective: &ObjectiveRow) {
        debug_assert_eq!(objective.values.len(), self.nr_columns);

        self.values[..self.nr_columns].copy_from_slice(&objective.values);
        self.penalized = objective.penalized.clone();
    }

    /// Eliminate the basic columns from the objective row.
    ///
    /// # Arguments
    ///
    /// * `basis`: Pairs of (row, column), the variable of the column being basic in the row.
    pub fn canonicalize_objective(&mut self, basis: &[(usize, usize)]) -> Result<(), TableauError> {
        for &(row, column) in basis {
            let start = self.index(row, 0)?;
            self.index(0, column)?;
            debug_assert_ne!(row, 0);

            if let Some(penalized) = self.penalized.as_mut() {
                let source = &self.values[start..start + self.nr_columns];
                eliminate(&mut penalized.penalty, source, column, &self.precision);
                eliminate(&mut penalized.cost, source, column, &self.precision);
            } else {
                let factor = self.values[column];
                if factor != 0_f64 {
                    self.add_multiple_of_row(0, row, -factor)?;
                    self.values[column] = 0_f64;
                }
            }
        }
        self.write_penalized_row();

        Ok(())
    }

    /// Show the combination of the two parts of a penalized objective in row 0.
    fn write_penalized_row(&mut self) {
        if let Some(penalized) = &self.penalized {
            for (column, (penalty, cost)) in penalized.penalty.iter().zip(&penalized.cost).enumerate() {
                self.values[column] = self.precision.round(cost + penalized.big_m * penalty);
            }
        }
    }

    /// Number of rows, including the objective row.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns, including the identity and right-hand side columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Index of the right-hand side column.
    pub fn rhs_column(&self) -> usize {
        self.nr_columns - 1
    }

    /// Rounding rule of this tableau.
    pub fn precision(&self) -> &Precision {
        &self.precision
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, TableauError> {
        if row < self.nr_rows && column < self.nr_columns {
            Ok(row * self.nr_columns + column)
        } else {
            Err(TableauError::OutOfRange {
                row,
                column,
                nr_rows: self.nr_rows,
                nr_columns: self.nr_columns,
            })
        }
    }

    /// Read a single value.
    pub fn get(&self, row: usize, column: usize) -> Result<f64, TableauError> {
        self.index(row, column).map(|index| self.values[index])
    }

    /// Write a single value, after rounding it.
    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<(), TableauError> {
        let index = self.index(row, column)?;
        if row == 0 {
            self.penalized = None;
        }
        self.values[index] = self.precision.round(value);

        Ok(())
    }

    /// Apply the rounding rule of this tableau to a value.
    pub fn round(&self, value: f64) -> f64 {
        self.precision.round(value)
    }

    /// Right-hand side value of a row.
    pub fn rhs(&self, row: usize) -> Result<f64, TableauError> {
        self.get(row, self.rhs_column())
    }

    /// Right-hand side of the objective row.
    ///
    /// This is the value of the objective function that the objective row currently represents.
    pub fn objective_value(&self) -> f64 {
        self.values[self.nr_columns - 1]
    }

    /// All values of a single row.
    pub fn row(&self, row: usize) -> Result<&[f64], TableauError> {
        let start = self.index(row, 0)?;
        Ok(&self.values[start..start + self.nr_columns])
    }

    /// Iterate over the rows, starting with the objective row.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.nr_columns)
    }

    /// Copy of all values as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Overwrite a complete row.
    pub fn set_row(&mut self, row: usize, values: &[f64]) -> Result<(), TableauError> {
        if values.len() != self.nr_columns {
            return Err(TableauError::RowLength { expected: self.nr_columns, found: values.len() });
        }
        for (column, &value) in values.iter().enumerate() {
            self.set(row, column, value)?;
        }

        Ok(())
    }

    /// Divide all values of a row by the same number.
    pub fn divide_row(&mut self, row: usize, divisor: f64) -> Result<(), TableauError> {
        debug_assert!(!self.precision.is_zero(divisor));

        for column in 0..self.nr_columns {
            let value = self.get(row, column)?;
            self.set(row, column, value / divisor)?;
        }

        Ok(())
    }

    /// Add a multiple of one row to another: `target += factor * source`.
    pub fn add_multiple_of_row(
        &mut self,
        target: usize,
        source: usize,
        factor: f64,
    ) -> Result<(), TableauError> {
        debug_assert_ne!(target, source);

        for column in 0..self.nr_columns {
            let value = self.get(target, column)? + factor * self.get(source, column)?;
            self.set(target, column, value)?;
        }

        Ok(())
    }

    /// Set a column to zero in every row.
    pub fn clear_column(&mut self, column: usize) -> Result<(), TableauError> {
        self.index(0, column)?;

        for row in 0..self.nr_rows {
            self.values[row * self.nr_columns + column] = 0_f64;
        }
        if let Some(penalized) = self.penalized.as_mut() {
            penalized.penalty[column] = 0_f64;
            penalized.cost[column] = 0_f64;
        }

        Ok(())
    }

    /// Clear a column and leave it out of the display from now on.
    ///
    /// The column stays allocated, so that the indices of the other columns don't change.
    pub fn remove_column(&mut self, column: usize) -> Result<(), TableauError> {
        self.clear_column(column)?;
        self.hidden[column] = true;

        Ok(())
    }

    /// Whether a column was removed.
    pub fn is_removed(&self, column: usize) -> bool {
        self.hidden.get(column).copied().unwrap_or(false)
    }

    /// Display the tableau with a header of column labels.
    ///
    /// # Arguments
    ///
    /// * `labels`: One label per column, e.g. from `VariableCatalog::column_labels`.
    pub fn labeled<'a>(&'a self, labels: &'a [String]) -> Labeled<'a> {
        debug_assert_eq!(labels.len(), self.nr_columns);

        Labeled { tableau: self, labels }
    }

    /// Removed columns are skipped.
    fn write_grid(&self, f: &mut Formatter, labels: &[String]) -> FormatResult {
        let column_width = 12;
        let counter_width = 6;
        let shown = |column: &usize| !self.hidden[*column];
        let nr_shown = (0..self.nr_columns).filter(shown).count();

        write!(f, "{0:>width$}|", "", width = counter_width)?;
        writeln!(f, "{}", (0..self.nr_columns).filter(shown)
            .map(|column| format!("{0:>width$}", labels[column], width = column_width))
            .join(""))?;
        writeln!(f, "{}", "-".repeat(counter_width + 1 + nr_shown * column_width))?;

        for (index, row) in self.rows().enumerate() {
            write!(f, "{0:>width$}|", index, width = counter_width)?;
            writeln!(f, "{}", (0..self.nr_columns).filter(shown)
                .map(|column| format!("{0:>width$}", row[column], width = column_width))
                .join(""))?;
        }

        Ok(())
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let mut labels = vec!["z".to_string()];
        labels.extend((1..self.nr_columns - 1).map(|column| column.to_string()));
        labels.push("b".to_string());

        self.write_grid(f, &labels)
    }
}

/// Subtract the multiple of `source` that makes `target[column]` zero.
fn eliminate(target: &mut [f64], source: &[f64], column: usize, precision: &Precision) {
    let factor = target[column];
    if factor == 0_f64 {
        return;
    }

    for (value, &source_value) in target.iter_mut().zip(source) {
        *value = precision.round(*value - factor * source_value);
    }
    target[column] = 0_f64;
}

/// A tableau displayed with variable names as column headers.
///
/// Like the plain display, columns removed with `Tableau::remove_column` are not shown.
#[derive(Debug)]
pub struct Labeled<'a> {
    tableau: &'a Tableau,
    labels: &'a [String],
}

impl Display for Labeled<'_> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        self.tableau.write_grid(f, self.labels)
    }
}
