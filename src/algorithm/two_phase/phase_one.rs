//! # Phase one: finding a basic feasible solution
//!
//! The sum of the artificial variables is minimized. If that sum can't be brought down to zero,
//! the problem is infeasible. Otherwise, artificial variables that remain basic at zero level are
//! driven out of the basis.
use crate::algorithm::pivot::{Iteration, PivotEngine, Termination};
use crate::algorithm::strategy::pivot_rule::MostPositive;
use crate::algorithm::tableau::catalog::VariableKind;
use crate::error::TableauError;

/// Outcome of phase one.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FeasibilityResult {
    /// The basis contains no artificial variables at a nonzero level.
    Feasible,
    /// The minimal sum of the artificial variables is positive.
    Infeasible,
    /// Pivoting stopped before the minimum was found.
    Stopped(Termination),
}

/// Replace the objective row by the sum of the artificial variables, to be minimized.
///
/// The row `w - Σa = 0` is made canonical by adding every row in which an artificial variable is
/// basic.
pub(super) fn set_up(engine: &mut PivotEngine) -> Result<(), TableauError> {
    let artificial_columns = engine.catalog().artificial_columns();
    if artificial_columns.is_empty() {
        engine.record("", "", "Phase one: the initial basis contains no artificial variables, phase one is skipped");
        return Ok(());
    }

    let nr_columns = engine.tableau().nr_columns();
    let mut row = vec![0_f64; nr_columns];
    row[0] = 1_f64;
    for &column in &artificial_columns {
        row[column] = -1_f64;
    }
    engine.tableau_mut().set_row(0, &row)?;
    engine.record("", "", "Phase one: minimize the sum of the artificial variables");

    engine.make_objective_canonical()?;
    engine.record("", "", "Phase one: add the artificial rows to the objective row");

    Ok(())
}

/// Minimize the sum of the artificial variables.
///
/// # Arguments
///
/// * `engine`: Engine with the objective row built by `set_up`.
/// * `iteration_limit`: Maximum total number of pivots.
pub(super) fn compute_feasible_basis(
    engine: &mut PivotEngine,
    iteration_limit: Option<usize>,
) -> Result<FeasibilityResult, TableauError> {
    if engine.catalog().artificial_columns().is_empty() {
        return Ok(FeasibilityResult::Feasible);
    }

    match engine.run(&mut MostPositive, iteration_limit)? {
        Termination::Optimal => {},
        termination => return Ok(FeasibilityResult::Stopped(termination)),
    }

    let artificial_sum = engine.tableau().objective_value();
    let remaining = engine.artificial_at_nonzero_level()
        .map(|variable| (variable.name().to_string(), variable.value()));
    if engine.tableau().precision().is_positive(artificial_sum) || remaining.is_some() {
        log::debug!("Phase one minimum {} is positive", artificial_sum);
        let description = match remaining {
            Some((name, value)) => format!(
                "Infeasible: the sum of the artificial variables is {}, {} remains at value {}",
                artificial_sum, name, value,
            ),
            None => format!("Infeasible: the sum of the artificial variables is {}", artificial_sum),
        };
        engine.record("", "", description);
        return Ok(FeasibilityResult::Infeasible);
    }

    match remove_artificial_basis_variables(engine)? {
        Some(termination) => Ok(FeasibilityResult::Stopped(termination)),
        None => Ok(FeasibilityResult::Feasible),
    }
}

/// Pivot artificial variables that are basic at zero level out of the basis.
///
/// Each one is replaced by the first non-basic, non-artificial variable with a nonzero entry in its
/// row. When there is no such variable, the row is a linear combination of the other rows and it
/// is left without a basic variable.
///
/// # Return value
///
/// A termination if a pivot failed, `None` otherwise.
fn remove_artificial_basis_variables(engine: &mut PivotEngine) -> Result<Option<Termination>, TableauError> {
    let artificial_basis = engine.catalog().of_kind(VariableKind::Artificial)
        .filter_map(|variable| variable.basis_row().map(|row| (variable.name().to_string(), row)))
        .collect::<Vec<_>>();

    for (name, row) in artificial_basis {
        let mut replacement = None;
        for column in engine.candidate_columns() {
            if engine.catalog().is_artificial(column) {
                continue;
            }
            if !engine.tableau().precision().is_zero(engine.tableau().get(row, column)?) {
                replacement = Some(column);
                break;
            }
        }

        match replacement {
            Some(column) => {
                log::debug!("Driving {} out of the basis at zero level", name);
                if engine.bring_into_basis(row, column)? == Iteration::MalformedPivot {
                    return Ok(Some(Termination::MalformedPivot));
                }
            },
            None => {
                log::debug!("Row {} is redundant", row);
                engine.clear_basis_row(row);
                engine.record("", &name, format!("Row {} is redundant, {} is removed without replacement", row, name));
            },
        }
    }

    Ok(None)
}
