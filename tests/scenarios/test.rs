use approx::assert_abs_diff_eq;

use simplex_steps::algorithm::tableau::catalog::VariableKind;
use simplex_steps::data::number_types::float::numerical_precision::Precision;
use simplex_steps::error::{ConfigError, ProblemError};
use simplex_steps::{solve, Error, Method, Problem, SolverConfig, Status};

use super::{solve_symbols, METHODS};

#[test]
fn bounded() {
    for method in METHODS {
        let result = solve_symbols(
            &[3_f64, 5_f64],
            &[&[1_f64, 0_f64], &[0_f64, 2_f64], &[3_f64, 2_f64]],
            &[4_f64, 12_f64, 18_f64],
            &["≤", "≤", "≤"],
            true,
            method,
        );

        assert_eq!(result.method(), method);
        assert_eq!(result.status(), Status::Optimal);
        let solution = result.solution().unwrap();
        assert_abs_diff_eq!(solution.get("x1").unwrap(), 2_f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.get("x2").unwrap(), 6_f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.get("z").unwrap(), 36_f64, epsilon = 1e-6);

        let mut keys = solution.to_map().into_keys().collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, vec!["x1", "x2", "z"]);
    }
}

#[test]
fn equality_and_greater() {
    let results = METHODS.map(|method| solve_symbols(
        &[4_f64, 1_f64],
        &[&[3_f64, 1_f64], &[4_f64, 3_f64], &[1_f64, 2_f64]],
        &[3_f64, 6_f64, 4_f64],
        &["=", ">=", "<="],
        false,
        method,
    ));

    for result in &results {
        assert!(result.is_feasible());
        let solution = result.solution().unwrap();
        assert_abs_diff_eq!(solution.objective_value(), 3.4, epsilon = 1e-5);
        assert_abs_diff_eq!(solution.get("x1").unwrap(), 0.4, epsilon = 1e-5);
        assert_abs_diff_eq!(solution.get("x2").unwrap(), 1.8, epsilon = 1e-5);
    }

    let [big_m, two_phase] = results;
    assert!(big_m.solution().unwrap().is_close_to(two_phase.solution().unwrap(), 1e-5));
}

#[test]
fn infeasible() {
    for maximize in [true, false] {
        for method in METHODS {
            let result = solve_symbols(
                &[1_f64, 2_f64],
                &[&[1_f64, 1_f64], &[1_f64, 1_f64]],
                &[2_f64, 5_f64],
                &["<=", ">="],
                maximize,
                method,
            );

            assert_eq!(result.status(), Status::Infeasible);
            assert!(!result.is_feasible());
            assert!(result.solution().is_none());
            assert!(result.steps().last().unwrap().description().starts_with("Infeasible"));
        }
    }
}

#[test]
fn unbounded() {
    for method in METHODS {
        let result = solve_symbols(
            &[1_f64, 0_f64],
            &[&[1_f64, -1_f64]],
            &[1_f64],
            &["<="],
            true,
            method,
        );

        assert_eq!(result.status(), Status::Unbounded);
        assert!(result.solution().is_none());
        assert_eq!(result.steps().last().unwrap().entering(), "x2");
    }
}

#[test]
fn negative_right_hand_side() {
    for method in METHODS {
        // Same as x1 <= 3
        let result = solve_symbols(&[1_f64], &[&[-1_f64]], &[-3_f64], &[">="], true, method);
        assert_abs_diff_eq!(result.solution().unwrap().objective_value(), 3_f64, epsilon = 1e-6);

        // Same as x1 + x2 >= 2
        let result = solve_symbols(&[1_f64, 1_f64], &[&[-1_f64, -1_f64]], &[-2_f64], &["<="], false, method);
        let solution = result.solution().unwrap();
        assert_abs_diff_eq!(solution.objective_value(), 2_f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.get("x1").unwrap() + solution.get("x2").unwrap(), 2_f64, epsilon = 1e-6);
    }
}

#[test]
fn redundant_equality() {
    for method in METHODS {
        let result = solve_symbols(
            &[1_f64, 2_f64],
            &[&[1_f64, 1_f64], &[2_f64, 2_f64]],
            &[2_f64, 4_f64],
            &["=", "="],
            false,
            method,
        );

        let solution = result.solution().unwrap();
        assert_abs_diff_eq!(solution.objective_value(), 2_f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.get("x1").unwrap(), 2_f64, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.get("x2").unwrap(), 0_f64, epsilon = 1e-6);
    }
}

#[test]
fn variables() {
    let result = solve_symbols(
        &[1_f64, 1_f64],
        &[&[1_f64, 1_f64], &[1_f64, 0_f64], &[0_f64, 1_f64]],
        &[1_f64, 3_f64, 3_f64],
        &[">=", "<=", "="],
        false,
        Method::BigM,
    );

    let described = result.variables().iter()
        .map(|variable| (variable.name(), variable.kind(), variable.column()))
        .collect::<Vec<_>>();
    assert_eq!(described, vec![
        ("x1", VariableKind::Original, 1),
        ("x2", VariableKind::Original, 2),
        ("e1", VariableKind::Surplus, 3),
        ("a1", VariableKind::Artificial, 4),
        ("s1", VariableKind::Slack, 5),
        ("a2", VariableKind::Artificial, 6),
    ]);
    // Non-basic variables are reported at zero
    for variable in result.variables() {
        if !variable.is_basic() {
            assert_eq!(variable.value(), 0_f64);
        }
    }
}

#[test]
fn stored_values_are_rounded() {
    let precision = Precision::default();
    for method in METHODS {
        let result = solve_symbols(
            &[2_f64, 3_f64, 1_f64],
            &[&[1_f64, 1_f64, 1_f64], &[2_f64, 1_f64, -1_f64], &[0_f64, 3_f64, 7_f64]],
            &[4_f64, 1_f64, 9_f64],
            &["<=", ">=", "<="],
            true,
            method,
        );
        assert!(result.step_count() > 1);

        for step in result.steps() {
            for &value in step.tableau().rows().flatten() {
                assert_eq!(precision.round(value), value);
                assert!(value == 0_f64 || value.abs() >= precision.epsilon);
            }
        }
    }
}

#[test]
fn accessors_are_stable() {
    let result = solve_symbols(
        &[1_f64, 1_f64],
        &[&[1_f64, 2_f64], &[3_f64, 1_f64]],
        &[4_f64, 6_f64],
        &["<=", "<="],
        true,
        Method::TwoPhase,
    );

    assert_eq!(result.solution(), result.solution());
    assert_eq!(result.steps(), result.steps());
    assert_eq!(result.step_count(), result.steps().len());
    assert_eq!(result.steps().iter().count(), result.step_count());
    assert_eq!(result.tableau(), result.steps().last().unwrap().tableau());
}

#[test]
fn malformed_input() {
    let result = Problem::from_symbols(vec![1_f64], vec![vec![1_f64]], vec![1_f64], &["<"], true);
    assert_eq!(result, Err(ProblemError::UnknownOperator("<".to_string())));

    let result = Problem::from_symbols(vec![1_f64, 1_f64], vec![vec![1_f64]], vec![1_f64], &["<="], true);
    assert!(matches!(result, Err(ProblemError::ConstraintRowLength { row: 0, expected: 2, found: 1 })));

    let error: Error = ProblemError::NoVariables.into();
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn invalid_configuration() {
    let problem = Problem::from_symbols(vec![1_f64], vec![vec![1_f64]], vec![1_f64], &["<="], true).unwrap();
    let config = SolverConfig::default().with_decimals(-1);

    for method in METHODS {
        assert_eq!(solve(&problem, method, &config).err(), Some(Error::Config(ConfigError::Decimals(-1))));
    }
}
