//! # Representation of optimal solutions
//!
//! Once a linear program is solved to optimality, a solution is derived. It contains a value for
//! every decision variable, including those that are not in the final basis, and the value of the
//! objective function.
use std::collections::HashMap;
use std::fmt;

/// Name under which the objective function value is reported.
pub const OBJECTIVE_KEY: &str = "z";

/// Represents the solution to a linear program.
///
/// Only constructed for problems that were solved to optimality. This struct would probably be used
/// to print the optimal solution for the user.
#[derive(Clone, PartialEq, Debug)]
pub struct Solution {
    /// Value of the objective function for this solution, in the direction the caller asked for.
    objective_value: f64,
    /// (variable name, solution value) tuples for all decision variables, in column order.
    solution_values: Vec<(String, f64)>,
}

impl Solution {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: f64, solution_values: Vec<(String, f64)>) -> Self {
        debug_assert!(solution_values.iter().all(|(name, _)| name != OBJECTIVE_KEY));

        Self {
            objective_value,
            solution_values,
        }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Look up a value by name.
    ///
    /// # Arguments
    ///
    /// * `name`: Either a decision variable name like `"x1"`, or `OBJECTIVE_KEY`.
    ///
    /// # Return value
    ///
    /// The value, if there is a variable with that name.
    pub fn get(&self, name: &str) -> Option<f64> {
        if name == OBJECTIVE_KEY {
            Some(self.objective_value)
        } else {
            self.solution_values.iter()
                .find(|(variable, _)| variable == name)
                .map(|&(_, value)| value)
        }
    }

    /// Decision variable values, in column order. Doesn't include the objective value.
    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.solution_values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of entries in the solution map, including the objective value.
    pub fn len(&self) -> usize {
        self.solution_values.len() + 1
    }

    /// Always `false`: the objective value is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All values keyed by name, including the objective value under `OBJECTIVE_KEY`.
    pub fn to_map(&self) -> HashMap<String, f64> {
        self.solution_values.iter()
            .cloned()
            .chain(std::iter::once((OBJECTIVE_KEY.to_string(), self.objective_value)))
            .collect()
    }

    /// Whether two solutions agree on every value within a tolerance.
    ///
    /// Used to compare solutions computed with different methods.
    pub fn is_close_to(&self, other: &Self, tolerance: f64) -> bool {
        if (self.objective_value - other.objective_value).abs() > tolerance {
            return false;
        }

        self.solution_values.len() == other.solution_values.len()
            && self.variables().all(|(name, value)| {
                other.get(name).is_some_and(|other_value| (value - other_value).abs() <= tolerance)
            })
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} = {}", OBJECTIVE_KEY, self.objective_value)?;
        for (name, value) in self.variables() {
            writeln!(f, "{} = {}", name, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::solution::{OBJECTIVE_KEY, Solution};

    fn solution() -> Solution {
        Solution::new(36_f64, vec![("x1".to_string(), 2_f64), ("x2".to_string(), 6_f64)])
    }

    #[test]
    fn lookup() {
        let solution = solution();
        assert_eq!(solution.get("x1"), Some(2_f64));
        assert_eq!(solution.get(OBJECTIVE_KEY), Some(36_f64));
        assert_eq!(solution.get("x3"), None);
        assert_eq!(solution.len(), 3);

        let map = solution.to_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["z"], 36_f64);
        assert_eq!(map["x2"], 6_f64);
    }

    #[test]
    fn closeness() {
        let other = Solution::new(
            36.000_000_1,
            vec![("x1".to_string(), 2_f64), ("x2".to_string(), 5.999_999_9)],
        );
        assert!(solution().is_close_to(&other, 1e-6));
        assert!(!solution().is_close_to(&other, 1e-9));

        let fewer = Solution::new(36_f64, vec![("x1".to_string(), 2_f64)]);
        assert!(!solution().is_close_to(&fewer, 1e-6));
    }

    #[test]
    fn display() {
        assert_eq!(solution().to_string(), "z = 36\nx1 = 2\nx2 = 6\n");
    }
}
