//! # Pivot rules
//!
//! Strategies for selecting the column that enters the basis.
use std::cmp::Ordering;

use crate::algorithm::tableau::{ReducedCost, Tableau};
use crate::error::TableauError;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior by selecting an entering column from the
/// objective row.
///
/// The rule doubles as the optimality test: when it doesn't select any column, the current basis
/// is optimal for the objective row.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the rule, by the ratio test.
pub trait PivotRule {
    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau with a canonical objective row.
    /// * `candidates`: Columns that may enter, in increasing order.
    ///
    /// # Return value
    ///
    /// The column to enter, or `None` if the objective row can't be improved.
    fn select_entering_column(
        &mut self,
        tableau: &Tableau,
        candidates: &[usize],
    ) -> Result<Option<usize>, TableauError>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Simply pivot on the column, which has the most negative objective row coefficient.
///
/// Used when the objective row represents a maximization. Penalty parts of the Big-M method are
/// compared before the costs. Ties are broken by the lowest column.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MostNegative;
impl PivotRule for MostNegative {
    fn select_entering_column(
        &mut self,
        tableau: &Tableau,
        candidates: &[usize],
    ) -> Result<Option<usize>, TableauError> {
        let precision = tableau.precision();

        let mut smallest: Option<(usize, ReducedCost)> = None;
        for &column in candidates {
            let cost = tableau.reduced_cost(column)?;
            if !cost.is_negative(precision) {
                continue;
            }
            if let Some((existing_column, existing_cost)) = smallest.as_mut() {
                if cost.compare(existing_cost, precision) == Ordering::Less {
                    *existing_column = column;
                    *existing_cost = cost;
                }
            } else { smallest = Some((column, cost)) }
        }

        Ok(smallest.map(|(column, _)| column))
    }

    fn name(&self) -> &'static str {
        "most negative"
    }
}

/// Pivot on the column, which has the most positive objective row coefficient.
///
/// Used when the objective row represents a minimization. Ties are broken by the lowest column.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MostPositive;
impl PivotRule for MostPositive {
    fn select_entering_column(
        &mut self,
        tableau: &Tableau,
        candidates: &[usize],
    ) -> Result<Option<usize>, TableauError> {
        let precision = tableau.precision();

        let mut largest: Option<(usize, ReducedCost)> = None;
        for &column in candidates {
            let cost = tableau.reduced_cost(column)?;
            if !cost.is_positive(precision) {
                continue;
            }
            match largest {
                Some((_, existing_cost)) if cost.compare(&existing_cost, precision) != Ordering::Greater => {},
                _ => largest = Some((column, cost)),
            }
        }

        Ok(largest.map(|(column, _)| column))
    }

    fn name(&self) -> &'static str {
        "most positive"
    }
}
