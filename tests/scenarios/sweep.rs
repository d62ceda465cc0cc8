//! Small integer problems drawn from a seeded generator.
//!
//! The exact optimum isn't known, but both methods have to agree on it, and every reported solution
//! has to satisfy the constraints up to the rounding of the tableau.
use rand::prelude::*;
use rand_pcg::Pcg64;

use simplex_steps::{solve, ConstraintType, Method, Objective, Problem, SolveResult, SolverConfig, Status};

/// (variables, constraints)
const SIZES: [(usize, usize); 7] = [(2, 2), (2, 3), (3, 2), (3, 3), (4, 3), (3, 4), (4, 4)];
const NR_PROBLEMS: usize = 350;
/// Relative to the magnitude of the solution and of the coefficients involved.
const TOLERANCE: f64 = 1e-3;

fn generate(rng: &mut impl Rng, nr_variables: usize, nr_constraints: usize) -> Problem {
    let objective = (0..nr_variables).map(|_| rng.gen_range(-5..=5) as f64).collect();
    let constraints = (0..nr_constraints)
        .map(|_| (0..nr_variables).map(|_| rng.gen_range(-5..=9) as f64).collect())
        .collect();
    let rhs = (0..nr_constraints).map(|_| rng.gen_range(-5..=20) as f64).collect();
    let constraint_types = (0..nr_constraints)
        .map(|_| [ConstraintType::Less, ConstraintType::Greater, ConstraintType::Equal][rng.gen_range(0..3)])
        .collect();
    let direction = if rng.gen_bool(0.5) { Objective::Maximize } else { Objective::Minimize };

    Problem::new(objective, constraints, rhs, constraint_types, direction).unwrap()
}

fn values(problem: &Problem, result: &SolveResult) -> Vec<f64> {
    let solution = result.solution().unwrap();
    (1..=problem.nr_variables())
        .map(|index| solution.get(&format!("x{}", index)).unwrap())
        .collect()
}

fn assert_feasible(problem: &Problem, x: &[f64]) {
    let scale = x.iter().fold(1_f64, |largest, value| largest.max(value.abs()));
    assert!(x.iter().all(|&value| value >= -TOLERANCE * scale), "{:?}", x);

    for ((row, &rhs), constraint_type) in problem.constraints().iter()
        .zip(problem.rhs())
        .zip(problem.constraint_types()) {
        let lhs = row.iter().zip(x).map(|(coefficient, value)| coefficient * value).sum::<f64>();
        let tolerance = TOLERANCE * scale * (1_f64 + row.iter().map(|coefficient| coefficient.abs()).sum::<f64>());
        let satisfied = match constraint_type {
            ConstraintType::Less => lhs <= rhs + tolerance,
            ConstraintType::Greater => lhs >= rhs - tolerance,
            ConstraintType::Equal => (lhs - rhs).abs() <= tolerance,
        };
        assert!(satisfied, "{:?} {} {} violated by {:?}", row, constraint_type, rhs, x);
    }
}

#[test]
fn methods_agree() {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = SolverConfig::default().with_iteration_limit(100);
    let mut rng = Pcg64::seed_from_u64(12345);
    let mut nr_optimal = 0;

    for index in 0..NR_PROBLEMS {
        let (nr_variables, nr_constraints) = SIZES[index % SIZES.len()];
        let problem = generate(&mut rng, nr_variables, nr_constraints);

        let big_m = solve(&problem, Method::BigM, &config).unwrap();
        let two_phase = solve(&problem, Method::TwoPhase, &config).unwrap();
        assert_eq!(big_m.status(), two_phase.status(), "problem {}: {:?}", index, problem);
        assert!(
            matches!(big_m.status(), Status::Optimal | Status::Infeasible | Status::Unbounded),
            "problem {}: {}", index, big_m.status(),
        );
        if big_m.status() != Status::Optimal {
            continue;
        }
        nr_optimal += 1;

        let x_big_m = values(&problem, &big_m);
        let x_two_phase = values(&problem, &two_phase);
        assert_feasible(&problem, &x_big_m);
        assert_feasible(&problem, &x_two_phase);

        let scale = x_big_m.iter().chain(&x_two_phase).fold(1_f64, |largest, value| largest.max(value.abs()))
            * (1_f64 + problem.objective().iter().map(|coefficient| coefficient.abs()).sum::<f64>());
        let z_big_m = big_m.solution().unwrap().objective_value();
        let z_two_phase = two_phase.solution().unwrap().objective_value();
        assert!(
            (z_big_m - z_two_phase).abs() <= TOLERANCE * scale,
            "problem {}: {} and {} differ, {:?}", index, z_big_m, z_two_phase, problem,
        );
    }

    // The generator should produce a fair share of problems with an optimum
    assert!(nr_optimal >= NR_PROBLEMS / 10, "{}", nr_optimal);
}
