//! Infeasible problem.
//!
//! The constraints `x1 + x2 <= 2` and `x1 + x2 >= 5` contradict each other.
use crate::algorithm::big_m::BigM;
use crate::algorithm::two_phase::TwoPhase;
use crate::algorithm::{Solver, Status};
use crate::config::SolverConfig;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::problem::Problem;

fn problem(direction: Objective) -> Problem {
    Problem::new(
        vec![1_f64, 1_f64],
        vec![vec![1_f64, 1_f64], vec![1_f64, 1_f64]],
        vec![2_f64, 5_f64],
        vec![ConstraintType::Less, ConstraintType::Greater],
        direction,
    ).unwrap()
}

#[test]
fn big_m() {
    for direction in [Objective::Maximize, Objective::Minimize] {
        let mut solver = BigM::new(&problem(direction), &SolverConfig::default()).unwrap();
        assert_eq!(solver.resolve(), Ok(Status::Infeasible));
        assert!(!solver.is_feasible());
        assert!(solver.solution().is_none());

        let last = solver.steps().last().unwrap();
        assert_eq!(last.description(), "Infeasible: artificial variable a1 remains in the basis at value 3");
    }
}

#[test]
fn two_phase() {
    for direction in [Objective::Maximize, Objective::Minimize] {
        let mut solver = TwoPhase::new(&problem(direction), &SolverConfig::default()).unwrap();
        assert_eq!(solver.resolve(), Ok(Status::Infeasible));
        assert!(solver.solution().is_none());
        assert_eq!(solver.tableau().objective_value(), 3_f64);
        assert!(solver.steps().last().unwrap().description().starts_with("Infeasible"));
    }
}
