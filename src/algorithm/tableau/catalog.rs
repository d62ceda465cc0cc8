//! # Variables of a tableau
//!
//! Every variable column of the tableau is described by a `Variable`: its kind, its name, the
//! constraint that introduced it and the row in which it is basic, if any.
use std::fmt;

use enum_map::{Enum, EnumMap};

use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::elements::ConstraintType;
use crate::error::TableauError;

/// Role of a variable in the tableau.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VariableKind {
    /// Decision variable of the problem.
    Original,
    /// Added to a `≤` constraint, basic in the initial basis.
    Slack,
    /// Subtracted from a `≥` constraint.
    Surplus,
    /// Added to `≥` and `=` constraints to have an initial basis.
    Artificial,
}

impl VariableKind {
    /// Letter with which variables of this kind are named.
    pub fn prefix(self) -> &'static str {
        match self {
            VariableKind::Original => "x",
            VariableKind::Slack => "s",
            VariableKind::Surplus => "e",
            VariableKind::Artificial => "a",
        }
    }

    /// Coefficient of an introduced variable in the row of the constraint that introduced it.
    pub fn constraint_coefficient(self) -> f64 {
        match self {
            VariableKind::Surplus => -1_f64,
            _ => 1_f64,
        }
    }

    /// Auxiliary variables that a constraint of the given type introduces, in column order.
    pub fn introduced_by(constraint_type: ConstraintType) -> &'static [VariableKind] {
        match constraint_type {
            ConstraintType::Less => &[VariableKind::Slack],
            ConstraintType::Greater => &[VariableKind::Surplus, VariableKind::Artificial],
            ConstraintType::Equal => &[VariableKind::Artificial],
        }
    }
}

/// A single column of the tableau.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    column: usize,
    kind: VariableKind,
    name: String,
    /// Constraint row that introduced this variable, `None` for decision variables.
    origin_row: Option<usize>,
    basis_row: Option<usize>,
    value: f64,
}

impl Variable {
    /// Column index in the tableau.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Kind of variable.
    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    /// Name like `"x1"`, `"s2"`, `"e1"` or `"a3"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Constraint row that introduced this variable.
    pub fn origin_row(&self) -> Option<usize> {
        self.origin_row
    }

    /// Row in which this variable is basic.
    pub fn basis_row(&self) -> Option<usize> {
        self.basis_row
    }

    /// Whether the variable is in the basis.
    pub fn is_basic(&self) -> bool {
        self.basis_row.is_some()
    }

    /// Value in the current basic solution. Zero for non-basic variables.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub(crate) fn enter_basis(&mut self, row: usize) {
        self.basis_row = Some(row);
    }

    pub(crate) fn leave_basis(&mut self) {
        self.basis_row = None;
        self.value = 0_f64;
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.basis_row {
            Some(row) => write!(f, "{} = {} (basic in row {})", self.name, self.value, row),
            None => write!(f, "{} = {}", self.name, self.value),
        }
    }
}

/// All variables of a tableau, ordered by column.
///
/// Decision variables come first. After those, the auxiliary variables of each constraint follow in
/// constraint order.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableCatalog {
    variables: Vec<Variable>,
    nr_constraints: usize,
}

impl VariableCatalog {
    /// Create the variables for a problem.
    ///
    /// Slack and artificial variables start out basic in the row of their constraint, so that the
    /// initial basis is an identity matrix.
    ///
    /// # Arguments
    ///
    /// * `nr_original`: Number of decision variables.
    /// * `constraint_types`: Relation of each constraint, after right-hand sides were made
    /// non-negative.
    pub fn new(nr_original: usize, constraint_types: &[ConstraintType]) -> Self {
        let mut counters = EnumMap::<VariableKind, usize>::default();
        let mut variables = Vec::with_capacity(nr_original + 2 * constraint_types.len());

        let mut push = |kind: VariableKind, origin_row: Option<usize>, variables: &mut Vec<Variable>| {
            counters[kind] += 1;
            let basis_row = match kind {
                VariableKind::Slack | VariableKind::Artificial => origin_row,
                VariableKind::Original | VariableKind::Surplus => None,
            };
            variables.push(Variable {
                column: variables.len() + 1,
                kind,
                name: format!("{}{}", kind.prefix(), counters[kind]),
                origin_row,
                basis_row,
                value: 0_f64,
            });
        };

        for _ in 0..nr_original {
            push(VariableKind::Original, None, &mut variables);
        }
        for (index, &constraint_type) in constraint_types.iter().enumerate() {
            for &kind in VariableKind::introduced_by(constraint_type) {
                push(kind, Some(index + 1), &mut variables);
            }
        }

        Self { variables, nr_constraints: constraint_types.len() }
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether there are no variables at all.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Number of constraint rows these variables were created for.
    pub fn nr_constraints(&self) -> usize {
        self.nr_constraints
    }

    /// Iterate over all variables in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    /// All variables in column order.
    pub fn as_slice(&self) -> &[Variable] {
        &self.variables
    }

    /// Variable of a tableau column.
    ///
    /// Column 0 and the right-hand side column don't belong to a variable.
    pub fn by_column(&self, column: usize) -> Option<&Variable> {
        column.checked_sub(1).and_then(|index| self.variables.get(index))
    }

    fn by_column_mut(&mut self, column: usize) -> Option<&mut Variable> {
        match column.checked_sub(1) {
            Some(index) => self.variables.get_mut(index),
            None => None,
        }
    }

    /// Look up a variable by name.
    pub fn by_name(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|variable| variable.name == name)
    }

    /// Name of the variable of a column, if there is one.
    pub fn name(&self, column: usize) -> Option<&str> {
        self.by_column(column).map(Variable::name)
    }

    /// The variable that is basic in a row.
    pub fn in_basis_at(&self, row: usize) -> Option<&Variable> {
        self.variables.iter().find(|variable| variable.basis_row == Some(row))
    }

    /// Auxiliary variables introduced by a constraint row.
    pub fn introduced_by(&self, row: usize) -> impl Iterator<Item = &Variable> {
        self.variables.iter().filter(move |variable| variable.origin_row == Some(row))
    }

    /// All variables of a kind, in column order.
    pub fn of_kind(&self, kind: VariableKind) -> impl Iterator<Item = &Variable> {
        self.variables.iter().filter(move |variable| variable.kind == kind)
    }

    /// How many variables there are of each kind.
    pub fn count_by_kind(&self) -> EnumMap<VariableKind, usize> {
        let mut counts = EnumMap::default();
        for variable in &self.variables {
            counts[variable.kind] += 1;
        }

        counts
    }

    /// Columns of the artificial variables.
    pub fn artificial_columns(&self) -> Vec<usize> {
        self.of_kind(VariableKind::Artificial).map(Variable::column).collect()
    }

    /// Whether a column belongs to an artificial variable.
    pub fn is_artificial(&self, column: usize) -> bool {
        self.by_column(column).is_some_and(|variable| variable.kind == VariableKind::Artificial)
    }

    /// Header labels for every tableau column, including the objective and right-hand side columns.
    pub fn column_labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.variables.len() + 2);
        labels.push("z".to_string());
        labels.extend(self.variables.iter().map(|variable| variable.name.clone()));
        labels.push("rhs".to_string());

        labels
    }

    /// Replace the variable that is basic in `row` by the variable of `column`.
    ///
    /// # Return value
    ///
    /// Column of the variable that left the basis, if there was one.
    pub(crate) fn swap_basis(&mut self, row: usize, column: usize) -> Option<usize> {
        let leaving = self.in_basis_at(row).map(Variable::column);
        if let Some(leaving_column) = leaving {
            if let Some(variable) = self.by_column_mut(leaving_column) {
                variable.leave_basis();
            }
        }
        if let Some(variable) = self.by_column_mut(column) {
            variable.enter_basis(row);
        }

        leaving
    }

    /// Take a variable out of the basis without a replacement.
    ///
    /// Used when the row it was basic in is removed.
    pub(crate) fn clear_basis_row(&mut self, row: usize) {
        if let Some(variable) = self.variables.iter_mut().find(|variable| variable.basis_row == Some(row)) {
            variable.leave_basis();
        }
    }

    /// Read the value of every basic variable from the right-hand side column.
    pub fn refresh_values(&mut self, tableau: &Tableau) -> Result<(), TableauError> {
        for variable in &mut self.variables {
            variable.value = match variable.basis_row {
                Some(row) => tableau.rhs(row)?,
                None => 0_f64,
            };
        }

        Ok(())
    }
}
