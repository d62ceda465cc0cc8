//! Minimization where the optimum leaves the `≤` constraint slack.
//!
//! Minimize `7x1 + 3x2` subject to `3x1 <= 7` and `6x1 + 5x2 >= 12`. The optimum is at `x1 = 0`,
//! `x2 = 2.4` with value `7.2`.
use crate::algorithm::big_m::BigM;
use crate::algorithm::two_phase::TwoPhase;
use crate::algorithm::{Solver, Status};
use crate::config::SolverConfig;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;

fn problem() -> Problem {
    Problem::from_symbols(
        vec![7_f64, 3_f64],
        vec![vec![3_f64, 0_f64], vec![6_f64, 5_f64]],
        vec![7_f64, 12_f64],
        &["≤", "≥"],
        false,
    ).unwrap()
}

fn solution() -> Solution {
    Solution::new(7.2, vec![("x1".to_string(), 0_f64), ("x2".to_string(), 2.4)])
}

#[test]
fn big_m() {
    let mut solver = BigM::new(&problem(), &SolverConfig::default()).unwrap();
    assert_eq!(solver.resolve(), Ok(Status::Optimal));
    assert!(solver.solution().unwrap().is_close_to(&solution(), 1e-5), "{}", solver.solution().unwrap());
    assert!(solver.engine().artificial_at_nonzero_level().is_none());
}

#[test]
fn two_phase() {
    let mut solver = TwoPhase::new(&problem(), &SolverConfig::default()).unwrap();
    assert_eq!(solver.resolve(), Ok(Status::Optimal));
    assert!(solver.solution().unwrap().is_close_to(&solution(), 1e-5), "{}", solver.solution().unwrap());
}
