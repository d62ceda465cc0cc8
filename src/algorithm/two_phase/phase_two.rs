//! # Phase two: optimizing from a feasible basis
//!
//! The artificial columns are removed and the caller's objective is restored.
use crate::algorithm::pivot::{PivotEngine, Termination};
use crate::algorithm::strategy::pivot_rule::MostNegative;
use crate::data::linear_program::elements::Objective;
use crate::error::TableauError;

/// Prepare the tableau that phase one left behind for the original objective.
///
/// Artificial columns are set to zero in every row, excluded from entering the basis and no longer
/// displayed. They stay allocated, so that the column indices of the other variables don't change.
///
/// # Arguments
///
/// * `engine`: Engine with a feasible basis without artificial variables.
/// * `objective`: The caller's objective coefficients.
/// * `direction`: Direction of the caller's objective.
pub(super) fn set_up(
    engine: &mut PivotEngine,
    objective: &[f64],
    direction: Objective,
) -> Result<(), TableauError> {
    let artificial_columns = engine.catalog().artificial_columns();
    if !artificial_columns.is_empty() {
        for &column in &artificial_columns {
            engine.tableau_mut().remove_column(column)?;
            engine.exclude_column(column);
        }
        engine.record("", "", "Phase two: remove the artificial columns");
    }

    engine.tableau_mut().set_objective_row(objective, direction)?;
    engine.record("", "", "Phase two: restore the original objective");

    engine.make_objective_canonical()?;
    engine.record("", "", "Phase two: eliminate the basic variables from the objective row");

    Ok(())
}

/// Optimize the original objective.
pub(super) fn optimize(
    engine: &mut PivotEngine,
    iteration_limit: Option<usize>,
) -> Result<Termination, TableauError> {
    engine.run(&mut MostNegative, iteration_limit)
}
