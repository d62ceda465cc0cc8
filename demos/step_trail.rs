//! Solve a small problem with both methods and print every recorded step.
//!
//! Set `RUST_LOG=debug` (or `trace`) to also see the pivots as they happen.
use env_logger::Builder;
use log::LevelFilter;

use simplex_steps::{solve, Error, Method, Problem, SolverConfig};

fn main() -> Result<(), Error> {
    Builder::new().filter_level(LevelFilter::Info).parse_default_env().init();

    // Minimize 4x1 + x2 subject to 3x1 + x2 = 3, 4x1 + 3x2 >= 6 and x1 + 2x2 <= 4
    let problem = Problem::from_symbols(
        vec![4_f64, 1_f64],
        vec![vec![3_f64, 1_f64], vec![4_f64, 3_f64], vec![1_f64, 2_f64]],
        vec![3_f64, 6_f64, 4_f64],
        &["=", "≥", "≤"],
        false,
    )?;

    for method in [Method::BigM, Method::TwoPhase] {
        let result = solve(&problem, method, &SolverConfig::default())?;
        let labels = result.column_labels();

        println!("=== {} method ===", method);
        for (index, step) in result.steps().iter().enumerate() {
            println!("Step {}: {}", index, step.description());
            if !step.entering().is_empty() || !step.leaving().is_empty() {
                println!("entering: {}, leaving: {}", step.entering(), step.leaving());
            }
            println!("{}", step.tableau().labeled(labels));
        }

        match result.solution() {
            Some(solution) => println!("{}", solution),
            None => println!("No solution: {}", result.status()),
        }
    }

    Ok(())
}
